//! Per-day view over the log

use crate::domain::{DailyMealEntry, Nutrition};
use chrono::NaiveDate;

/// Entries logged on one calendar day and their combined nutrition
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: Vec<DailyMealEntry>,
    pub totals: Nutrition,
}

impl DaySummary {
    /// Collect the entries for `date`, keeping their logging order
    pub fn for_date(date: NaiveDate, log: &[DailyMealEntry]) -> Self {
        let entries: Vec<DailyMealEntry> = log
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect();
        let totals: Nutrition = entries.iter().map(DailyMealEntry::totals).sum();

        DaySummary {
            date,
            entries,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReferenceMeal;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_sums_only_the_selected_day() {
        let oatmeal = ReferenceMeal::new("Oatmeal", Nutrition::new(150.0, 5.0, 3.0, 27.0));
        let banana = ReferenceMeal::new("Banana", Nutrition::new(90.0, 1.0, 0.0, 23.0));
        let log = vec![
            DailyMealEntry::new(day(1), oatmeal.clone(), 1.0),
            DailyMealEntry::new(day(2), oatmeal, 3.0),
            DailyMealEntry::new(day(1), banana, 2.0),
        ];

        let summary = DaySummary::for_date(day(1), &log);
        assert_eq!(summary.entries.len(), 2);
        assert_eq!(summary.entries[0].reference_meal.name, "Oatmeal");
        assert_eq!(summary.entries[1].reference_meal.name, "Banana");
        assert_eq!(summary.totals, Nutrition::new(330.0, 7.0, 3.0, 73.0));
    }

    #[test]
    fn test_empty_day_has_zero_totals() {
        let summary = DaySummary::for_date(day(9), &[]);
        assert!(summary.is_empty());
        assert_eq!(summary.totals, Nutrition::default());
    }
}
