//! Reference meals and the daily entries logged against them

use crate::domain::Nutrition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A reusable nutrition template; all values are per one portion.
///
/// Two meals are equal when their ids are equal, regardless of field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceMeal {
    pub id: Uuid,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl ReferenceMeal {
    /// Create a meal with a freshly generated id
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self::with_id(Uuid::new_v4(), name, nutrition)
    }

    pub fn with_id(id: Uuid, name: impl Into<String>, nutrition: Nutrition) -> Self {
        ReferenceMeal {
            id,
            name: name.into(),
            calories: nutrition.calories,
            protein: nutrition.protein,
            fat: nutrition.fat,
            carbs: nutrition.carbs,
        }
    }

    /// Per-portion nutrition
    pub fn nutrition(&self) -> Nutrition {
        Nutrition::new(self.calories, self.protein, self.fat, self.carbs)
    }
}

impl PartialEq for ReferenceMeal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ReferenceMeal {}

impl Hash for ReferenceMeal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One logged serving of a meal on a calendar day.
///
/// The meal is an owned snapshot taken at logging time, so later catalog
/// edits or deletions never change past totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMealEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub reference_meal: ReferenceMeal,
    pub portions: f64,
}

impl DailyMealEntry {
    pub fn new(date: NaiveDate, reference_meal: ReferenceMeal, portions: f64) -> Self {
        DailyMealEntry {
            id: Uuid::new_v4(),
            date,
            reference_meal,
            portions,
        }
    }

    pub fn total_calories(&self) -> f64 {
        self.reference_meal.calories * self.portions
    }

    pub fn total_protein(&self) -> f64 {
        self.reference_meal.protein * self.portions
    }

    pub fn total_fat(&self) -> f64 {
        self.reference_meal.fat * self.portions
    }

    pub fn total_carbs(&self) -> f64 {
        self.reference_meal.carbs * self.portions
    }

    pub fn totals(&self) -> Nutrition {
        self.reference_meal.nutrition() * self.portions
    }
}
