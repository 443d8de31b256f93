//! Input validation for new meals and entries
//!
//! Mirrors the add-meal and add-entry forms: nothing is saved until every
//! required field is present and parseable.

use crate::domain::{DailyMealEntry, Nutrition, ReferenceMeal};
use crate::error::{MealTrackError, Result};
use chrono::NaiveDate;

/// Build a reference meal from user input
pub fn reference_meal(name: &str, nutrition: Nutrition) -> Result<ReferenceMeal> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MealTrackError::InvalidInput(
            "meal name must not be empty".to_string(),
        ));
    }
    if !nutrition.is_finite() {
        return Err(MealTrackError::InvalidInput(
            "calories, protein, fat and carbs must be numbers".to_string(),
        ));
    }

    Ok(ReferenceMeal::new(name, nutrition))
}

/// Build a daily entry from a catalog meal and a portion multiplier
pub fn daily_entry(date: NaiveDate, meal: &ReferenceMeal, portions: f64) -> Result<DailyMealEntry> {
    if !portions.is_finite() {
        return Err(MealTrackError::InvalidInput(format!(
            "portions must be a number, got {}",
            portions
        )));
    }

    Ok(DailyMealEntry::new(date, meal.clone(), portions))
}
