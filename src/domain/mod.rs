//! Domain layer - Meal model, nutrition arithmetic and CSV formats

pub mod csv;
pub mod day;
pub mod meal;
pub mod nutrition;
pub mod time_ref;

pub use csv::ExportOptions;
pub use day::DaySummary;
pub use meal::{DailyMealEntry, ReferenceMeal};
pub use nutrition::Nutrition;
pub use time_ref::TimeReference;
