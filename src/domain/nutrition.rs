//! Nutrition values and their arithmetic

use std::iter::Sum;
use std::ops::{Add, Mul};

/// Calories plus macronutrients (grams)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl Nutrition {
    pub fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Nutrition {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    /// True when every value is a finite number
    pub fn is_finite(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

/// Scale by a portion multiplier
impl Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, portions: f64) -> Nutrition {
        Nutrition {
            calories: self.calories * portions,
            protein: self.protein * portions,
            fat: self.fat * portions,
            carbs: self.carbs * portions,
        }
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Nutrition>>(iter: I) -> Nutrition {
        iter.fold(Nutrition::default(), Add::add)
    }
}
