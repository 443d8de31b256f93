//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, MealCommand};
pub use output::{format_day_summary, format_meal_list};
