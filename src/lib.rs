//! mealtrack - Personal meal and nutrition tracker
//!
//! Keeps a catalog of reference meals and a daily log of portions eaten,
//! shows per-day nutrition totals and exchanges data as CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MealTrackError;
