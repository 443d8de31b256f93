//! Initialize data root use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use std::fs;
use std::path::Path;

/// Initialize a new data root at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    tracing::info!(root = %path.display(), "initialized data root");
    Ok(repo)
}
