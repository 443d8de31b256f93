//! Error types for mealtrack

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for the mealtrack application
#[derive(Debug, Error)]
pub enum MealTrackError {
    #[error("Not a mealtrack directory: {0}")]
    NotMealTrackDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(Uuid),

    #[error("Position {index} is out of range (collection has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Stored data under '{key}' is corrupt: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MealTrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MealTrackError::NotMealTrackDirectory(_) => 2,
            MealTrackError::InvalidTimeReference(_) => 3,
            MealTrackError::MealNotFound(_) | MealTrackError::EntryNotFound(_) => 4,
            MealTrackError::IndexOutOfRange { .. } | MealTrackError::InvalidInput(_) => 5,
            MealTrackError::CorruptData { .. } => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MealTrackError::NotMealTrackDirectory(path) => {
                format!(
                    "Not a mealtrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mealtrack init' in this directory to start tracking\n\
                    • Navigate to an existing mealtrack directory\n\
                    • Set MEALTRACK_ROOT environment variable to your data path",
                    path.display()
                )
            }
            MealTrackError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    mealtrack day yesterday\n\
                    mealtrack log Oatmeal --date 2025-01-15",
                    ref_str
                )
            }
            MealTrackError::MealNotFound(selector) => {
                format!(
                    "No reference meal matches '{}'\n\n\
                    Suggestions:\n\
                    • Use 'mealtrack meal list' to see the catalog\n\
                    • Select a meal by its position (e.g., 2) or exact name\n\
                    • Add it first: mealtrack meal add <NAME> --calories ...",
                    selector
                )
            }
            MealTrackError::IndexOutOfRange { index, len } => {
                format!(
                    "Position {} is out of range (collection has {} items)\n\n\
                    Positions start at 1, as printed by 'mealtrack meal list' or 'mealtrack day'",
                    index + 1,
                    len
                )
            }
            MealTrackError::CorruptData { key, source } => {
                format!(
                    "Stored data under '{}' could not be decoded: {}\n\n\
                    Suggestions:\n\
                    • Inspect .mealtrack/store/{}.json and repair or remove it\n\
                    • Nothing was overwritten; your data file is left as-is",
                    key, source, key
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MealTrackError
pub type Result<T> = std::result::Result<T, MealTrackError>;
