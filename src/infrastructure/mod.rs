//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, TrackerRepository};
pub use store::{FileSystemStore, KeyValueStore, MemoryStore};
