//! CSV export of the log and CSV import of reference meals
//!
//! Both directions are deliberately plain: no quoting or escaping. A comma
//! inside a meal name corrupts an exported row and splits an imported one.

use crate::domain::{DailyMealEntry, Nutrition, ReferenceMeal};
use crate::error::{MealTrackError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

/// Header line of the exported log
pub const EXPORT_HEADER: &str = "Date,Food Name,Calories,Protein,Fat,Carbs";

/// First cell that marks an import header row
pub const IMPORT_HEADER_TOKEN: &str = "Name";

/// Medium-length date, e.g. `Jan 1, 2024`
pub const MEDIUM_DATE_FORMAT: &str = "%b %-d, %Y";

/// Options controlling CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    date_format: String,
}

impl ExportOptions {
    /// Use a custom strftime pattern for the date column
    pub fn with_date_format(pattern: &str) -> Result<Self> {
        validate_date_format(pattern)?;
        Ok(ExportOptions {
            date_format: pattern.to_string(),
        })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            date_format: MEDIUM_DATE_FORMAT.to_string(),
        }
    }
}

/// Check that a strftime pattern can be rendered without error
pub fn validate_date_format(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(MealTrackError::Config(
            "Invalid date format: pattern is empty".to_string(),
        ));
    }
    let invalid = || MealTrackError::Config(format!("Invalid date format: '{}'", pattern));

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // Some specifiers parse but need a time or offset (%H, %z) and fail on a bare date
    let mut sample = String::new();
    write!(sample, "{}", NaiveDate::MIN.format(pattern)).map_err(|_| invalid())?;
    Ok(())
}

/// Render the log as CSV, oldest day first.
///
/// The sort is stable, so entries on the same day keep their logging order.
pub fn export_entries(entries: &[DailyMealEntry], options: &ExportOptions) -> Result<String> {
    let mut sorted: Vec<&DailyMealEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.date);

    let mut csv = String::new();
    csv.push_str(EXPORT_HEADER);
    csv.push('\n');

    for entry in sorted {
        let totals = entry.totals();
        writeln!(
            csv,
            "{},{},{:.1},{:.1},{:.1},{:.1}",
            entry.date.format(&options.date_format),
            entry.reference_meal.name,
            totals.calories,
            totals.protein,
            totals.fat,
            totals.carbs
        )
        .map_err(|_| {
            MealTrackError::Config(format!(
                "Date format '{}' cannot be rendered for a calendar day",
                options.date_format
            ))
        })?;
    }

    Ok(csv)
}

/// Parse reference meals from CSV text.
///
/// Expected columns: name, calories, protein, fat, carbs; anything after the
/// fifth column is ignored. Rows that are too short or carry a non-numeric
/// value are skipped.
pub fn parse_reference_meals(text: &str) -> Vec<ReferenceMeal> {
    let rows: Vec<Vec<&str>> = text
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();

    let skip = match rows.first() {
        Some(first) if first.first() == Some(&IMPORT_HEADER_TOKEN) => 1,
        _ => 0,
    };

    rows.iter()
        .enumerate()
        .skip(skip)
        .filter_map(|(line, cells)| {
            let meal = parse_row(cells);
            if meal.is_none() {
                tracing::debug!(row = line + 1, "skipping unreadable meal row");
            }
            meal
        })
        .collect()
}

fn parse_row(cells: &[&str]) -> Option<ReferenceMeal> {
    if cells.len() < 5 {
        return None;
    }

    let nutrition = Nutrition::new(
        parse_number(cells[1])?,
        parse_number(cells[2])?,
        parse_number(cells[3])?,
        parse_number(cells[4])?,
    );

    Some(ReferenceMeal::new(cells[0], nutrition))
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
