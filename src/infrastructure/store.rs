//! Key-value persistence for the catalog and the log

use crate::error::{MealTrackError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Opaque byte storage addressed by fixed string keys
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()>;
}

/// Read and decode a JSON-encoded collection.
///
/// A missing key is an empty collection. A key whose bytes do not decode is
/// reported as [`MealTrackError::CorruptData`] so the caller never overwrites
/// it with an empty collection by accident.
pub fn load_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(key, error = %source, "stored collection failed to decode");
            MealTrackError::CorruptData {
                key: key.to_string(),
                source,
            }
        }),
    }
}

/// Encode a collection as JSON and write it under `key`
pub fn save_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(items)?;
    store.set(key, &bytes)?;
    tracing::debug!(key, count = items.len(), "collection saved");
    Ok(())
}

/// One JSON file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(dir: PathBuf) -> Self {
        FileSystemStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileSystemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MealTrackError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.mealtrack-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-process store, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyMealEntry, Nutrition, ReferenceMeal};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_loads_empty() {
        let store = MemoryStore::new();
        let meals: Vec<ReferenceMeal> = load_collection(&store, "referenceMeals").unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_corrupt_key_is_reported() {
        let mut store = MemoryStore::new();
        store.set("referenceMeals", b"not json").unwrap();

        let result: Result<Vec<ReferenceMeal>> = load_collection(&store, "referenceMeals");
        match result {
            Err(MealTrackError::CorruptData { key, .. }) => assert_eq!(key, "referenceMeals"),
            other => panic!("Expected CorruptData, got {:?}", other),
        }
    }

    #[test]
    fn test_collection_round_trip_keeps_order_and_values() {
        let mut store = MemoryStore::new();
        let meals = vec![
            ReferenceMeal::new("Oatmeal", Nutrition::new(150.0, 5.0, 3.0, 27.0)),
            ReferenceMeal::new("Banana", Nutrition::new(90.0, 1.0, 0.0, 23.0)),
            ReferenceMeal::new("Oatmeal", Nutrition::new(0.1, 0.2, 0.3, 0.4)),
        ];

        save_collection(&mut store, "referenceMeals", &meals).unwrap();
        let loaded: Vec<ReferenceMeal> = load_collection(&store, "referenceMeals").unwrap();

        assert_eq!(loaded.len(), meals.len());
        for (a, b) in loaded.iter().zip(&meals) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.nutrition(), b.nutrition());
        }
    }

    #[test]
    fn test_log_round_trip_keeps_order_and_embedded_meals() {
        let mut store = MemoryStore::new();
        let oatmeal = ReferenceMeal::new("Oatmeal", Nutrition::new(150.0, 5.0, 3.0, 27.0));
        let toast = ReferenceMeal::new("Toast", Nutrition::new(80.5, 2.2, 1.25, 14.0));
        let entries = vec![
            DailyMealEntry::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), oatmeal.clone(), 1.5),
            DailyMealEntry::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), toast, 0.25),
            DailyMealEntry::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), oatmeal, 3.0),
        ];

        save_collection(&mut store, "dailyEntries", &entries).unwrap();
        let loaded: Vec<DailyMealEntry> = load_collection(&store, "dailyEntries").unwrap();

        assert_eq!(loaded.len(), entries.len());
        for (a, b) in loaded.iter().zip(&entries) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.date, b.date);
            assert_eq!(a.portions, b.portions);
            assert_eq!(a.reference_meal.id, b.reference_meal.id);
            assert_eq!(a.reference_meal.name, b.reference_meal.name);
            assert_eq!(a.reference_meal.nutrition(), b.reference_meal.nutrition());
            assert_eq!(a.totals(), b.totals());
        }
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().join("store"));
        assert_eq!(store.get("dailyEntries").unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_dir_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = FileSystemStore::new(temp.path().join("store"));

        store.set("dailyEntries", b"[1]").unwrap();
        store.set("dailyEntries", b"[2]").unwrap();

        assert_eq!(store.get("dailyEntries").unwrap(), Some(b"[2]".to_vec()));
        assert_eq!(
            fs::read_to_string(temp.path().join("store/dailyEntries.json")).unwrap(),
            "[2]"
        );
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let mut store = FileSystemStore::new(temp.path().to_path_buf());
        store.set("referenceMeals", b"[]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["referenceMeals.json".to_string()]);
    }
}
