//! Output formatting utilities

use crate::domain::{DaySummary, ReferenceMeal};

/// Whole units, truncated toward zero
fn whole(value: f64) -> i64 {
    value as i64
}

/// Format the catalog with 1-based positions
pub fn format_meal_list(meals: &[ReferenceMeal]) -> String {
    if meals.is_empty() {
        return "No reference meals".to_string();
    }

    let mut output = String::new();
    for (i, meal) in meals.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {}\n     Calories: {}  Protein: {}g  Fat: {}g  Carbs: {}g\n",
            i + 1,
            meal.name,
            whole(meal.calories),
            whole(meal.protein),
            whole(meal.fat),
            whole(meal.carbs)
        ));
    }
    output
}

/// Format a day's totals followed by its entries with 1-based positions
pub fn format_day_summary(summary: &DaySummary) -> String {
    let totals = &summary.totals;
    let mut output = format!(
        "{}\n\n\
        Daily Summary\n\
        \x20 Total Calories: {}\n\
        \x20 Total Protein: {}g\n\
        \x20 Total Fat: {}g\n\
        \x20 Total Carbs: {}g\n\n\
        Meals\n",
        summary.date.format("%A, %B %-d, %Y"),
        whole(totals.calories),
        whole(totals.protein),
        whole(totals.fat),
        whole(totals.carbs)
    );

    if summary.is_empty() {
        output.push_str("  No meals logged\n");
        return output;
    }

    for (i, entry) in summary.entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {}  Portions: {:.1}  Calories: {}\n",
            i + 1,
            entry.reference_meal.name,
            entry.portions,
            whole(entry.total_calories())
        ));
    }
    output
}
