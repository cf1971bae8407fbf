//! Configuration module
//!
//! Typed configuration sections plus the figment-based loader that merges
//! defaults, an optional TOML file, and `MCC_*` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CatalogConfig, LoggingConfig, RepositoryConfig};
