//! Application layer - Use cases and orchestration

pub mod forms;
pub mod init;
pub mod manage_config;
pub mod tracker;

pub use manage_config::ConfigService;
pub use tracker::MealTracker;
