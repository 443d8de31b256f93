//! Day selection for logging and viewing meals

use crate::error::{MealTrackError, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::str::FromStr;

/// A human-friendly reference to a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeReference {
    #[default]
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    /// Occurrence of a weekday strictly after today
    NextWeekday(Weekday),
    Date(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference such as `today`, `last monday`, `2025-01-17` or `17-01-2025`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MealTrackError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day)
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day)
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(TimeReference::Date)
            .map_err(|_| invalid())
    }

    /// Resolve against an explicit base date
    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base,
            TimeReference::Yesterday => base - Duration::days(1),
            TimeReference::Tomorrow => base + Duration::days(1),
            TimeReference::Weekday(target) => base - Duration::days(days_back(base, *target)),
            TimeReference::LastWeekday(target) => {
                let back = match days_back(base, *target) {
                    0 => 7,
                    n => n,
                };
                base - Duration::days(back)
            }
            TimeReference::NextWeekday(target) => {
                let forward = match (7 - days_back(base, *target)) % 7 {
                    0 => 7,
                    n => n,
                };
                base + Duration::days(forward)
            }
            TimeReference::Date(date) => *date,
        }
    }

    /// Resolve against the local current date
    pub fn resolve_today(&self) -> NaiveDate {
        self.resolve(Local::now().date_naive())
    }
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    // chrono also accepts three-letter abbreviations ("mon", "fri")
    Weekday::from_str(name).ok()
}

/// Days between `base` and the most recent `target` weekday (0..=6)
fn days_back(base: NaiveDate, target: Weekday) -> i64 {
    let current = base.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    (current - wanted).rem_euclid(7)
}
