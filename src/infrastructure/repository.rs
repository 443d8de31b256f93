//! Data root discovery and layout

use crate::error::{MealTrackError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::{Config, FileSystemStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a data root
pub const ROOT_ENV: &str = "MEALTRACK_ROOT";

const STORE_DIR: &str = "store";

/// Abstract repository for a mealtrack data root
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mealtrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mealtrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .mealtrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mealtrack directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the data root.
    /// Checks MEALTRACK_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(MealTrackError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'mealtrack init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                DATA_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the data root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_data_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| MealTrackError::NotMealTrackDirectory(start.to_path_buf()))
    }

    /// Key-value store holding the catalog and the log
    pub fn store(&self) -> FileSystemStore {
        FileSystemStore::new(self.root.join(DATA_DIR).join(STORE_DIR))
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(MealTrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(DATA_DIR).join(STORE_DIR))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::KeyValueStore;
    use tempfile::TempDir;

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        fs::create_dir(temp.path().join(".mealtrack")).unwrap();
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_creates_store_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        assert!(temp.path().join(".mealtrack").is_dir());
        assert!(temp.path().join(".mealtrack/store").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(matches!(repo.initialize(), Err(MealTrackError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".mealtrack")).unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_missing() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()) {
            Err(MealTrackError::NotMealTrackDirectory(path)) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotMealTrackDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();
        assert_eq!(repo.load_config().unwrap(), config);
    }

    #[test]
    fn test_store_lives_under_data_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut store = repo.store();
        store.set("referenceMeals", b"[]").unwrap();
        assert!(temp
            .path()
            .join(".mealtrack/store/referenceMeals.json")
            .exists());
    }
}
