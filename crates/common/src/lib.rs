//! cloudctl Common Library
//!
//! Inventory types, snapshot loading, unit formatting and the shared error
//! type used by the cloudctl CLI.

pub mod error;
pub mod inventory;
pub mod types;
pub mod units;

// Re-export commonly used types
pub use error::{Error, Result};
pub use inventory::{Inventory, SnapshotFormat};
pub use types::*;

/// cloudctl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory for CLI state, `~/.cloudctl`
pub fn default_store_path() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".cloudctl")
}

/// Default config file path
pub fn default_config_path() -> std::path::PathBuf {
    default_store_path().join("config.toml")
}
