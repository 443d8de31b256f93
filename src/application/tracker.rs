//! Catalog and log manager
//!
//! Owns the reference meal catalog and the daily log, and writes both back
//! to its store after every mutation.

use crate::domain::csv::{export_entries, parse_reference_meals};
use crate::domain::{DailyMealEntry, DaySummary, ExportOptions, ReferenceMeal};
use crate::error::{MealTrackError, Result};
use crate::infrastructure::store::{load_collection, save_collection};
use crate::infrastructure::KeyValueStore;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Store key of the reference meal catalog
pub const REFERENCE_MEALS_KEY: &str = "referenceMeals";

/// Store key of the daily log
pub const DAILY_ENTRIES_KEY: &str = "dailyEntries";

pub struct MealTracker<S: KeyValueStore> {
    store: S,
    reference_meals: Vec<ReferenceMeal>,
    daily_entries: Vec<DailyMealEntry>,
}

impl<S: KeyValueStore> MealTracker<S> {
    /// Load both collections from `store`; absent keys start empty
    pub fn open(store: S) -> Result<Self> {
        let reference_meals = load_collection(&store, REFERENCE_MEALS_KEY)?;
        let daily_entries = load_collection(&store, DAILY_ENTRIES_KEY)?;

        Ok(MealTracker {
            store,
            reference_meals,
            daily_entries,
        })
    }

    pub fn reference_meals(&self) -> &[ReferenceMeal] {
        &self.reference_meals
    }

    pub fn daily_entries(&self) -> &[DailyMealEntry] {
        &self.daily_entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Append a meal to the catalog. Duplicate names are allowed.
    pub fn add_reference_meal(&mut self, meal: ReferenceMeal) -> Result<()> {
        tracing::info!(id = %meal.id, name = %meal.name, "adding reference meal");
        self.reference_meals.push(meal);
        self.save()
    }

    pub fn add_daily_entry(&mut self, entry: DailyMealEntry) -> Result<()> {
        tracing::info!(id = %entry.id, date = %entry.date, "adding daily entry");
        self.daily_entries.push(entry);
        self.save()
    }

    /// Remove catalog meals at the given 0-based positions.
    ///
    /// Logged entries keep their own copy of the meal and are not touched.
    pub fn remove_reference_meals(&mut self, indices: &[usize]) -> Result<Vec<ReferenceMeal>> {
        let removed = remove_at(&mut self.reference_meals, indices)?;
        self.save()?;
        Ok(removed)
    }

    /// Remove log entries at the given 0-based positions
    pub fn remove_daily_entries(&mut self, indices: &[usize]) -> Result<Vec<DailyMealEntry>> {
        let removed = remove_at(&mut self.daily_entries, indices)?;
        self.save()?;
        Ok(removed)
    }

    /// Remove one log entry by id
    pub fn remove_daily_entry(&mut self, id: Uuid) -> Result<DailyMealEntry> {
        let index = self
            .daily_entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(MealTrackError::EntryNotFound(id))?;

        let removed = self.daily_entries.remove(index);
        self.save()?;
        Ok(removed)
    }

    /// Look up a catalog meal by 1-based position or exact name
    pub fn find_reference_meal(&self, selector: &str) -> Result<&ReferenceMeal> {
        let selector = selector.trim();

        if let Ok(position) = selector.parse::<usize>() {
            if let Some(meal) = position
                .checked_sub(1)
                .and_then(|i| self.reference_meals.get(i))
            {
                return Ok(meal);
            }
        }

        self.reference_meals
            .iter()
            .find(|meal| meal.name == selector)
            .ok_or_else(|| MealTrackError::MealNotFound(selector.to_string()))
    }

    /// Entries logged on `date`, in logging order
    pub fn entries_for_day(&self, date: NaiveDate) -> Vec<&DailyMealEntry> {
        self.daily_entries
            .iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    pub fn day_summary(&self, date: NaiveDate) -> DaySummary {
        DaySummary::for_date(date, &self.daily_entries)
    }

    /// The whole log as CSV, oldest day first
    pub fn export_to_csv(&self, options: &ExportOptions) -> Result<String> {
        export_entries(&self.daily_entries, options)
    }

    /// Append one reference meal per readable CSV row and return the new meals.
    ///
    /// Unreadable rows are skipped without error. The store is written once.
    pub fn import_reference_meals_from_csv(&mut self, text: &str) -> Result<Vec<ReferenceMeal>> {
        let meals = parse_reference_meals(text);
        tracing::info!(count = meals.len(), "importing reference meals");

        if meals.is_empty() {
            return Ok(meals);
        }

        self.reference_meals.extend(meals.iter().cloned());
        self.save()?;
        Ok(meals)
    }

    fn save(&mut self) -> Result<()> {
        save_collection(&mut self.store, REFERENCE_MEALS_KEY, &self.reference_meals)?;
        save_collection(&mut self.store, DAILY_ENTRIES_KEY, &self.daily_entries)
    }
}

/// Remove the items at `indices` (a set; duplicates ignored) and return them
/// in collection order. Nothing is removed if any index is out of range.
fn remove_at<T>(items: &mut Vec<T>, indices: &[usize]) -> Result<Vec<T>> {
    let targets: BTreeSet<usize> = indices.iter().copied().collect();

    if let Some(&index) = targets.iter().find(|&&i| i >= items.len()) {
        return Err(MealTrackError::IndexOutOfRange {
            index,
            len: items.len(),
        });
    }

    let mut removed = Vec::with_capacity(targets.len());
    let mut kept = Vec::with_capacity(items.len() - targets.len());
    for (i, item) in items.drain(..).enumerate() {
        if targets.contains(&i) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;

    Ok(removed)
}
