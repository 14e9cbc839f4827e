//! Configuration management for o2ox

mod settings;

// Re-export main types
pub use settings::{Config, CONFIG_FILE_NAMES};
