//! # MCP Component Catalog - Infrastructure Layer
//!
//! Configuration loading and structured logging for the catalog service.
//!
//! ## Architecture
//!
//! The infrastructure layer:
//! - Loads and validates the typed application configuration
//!   (defaults → TOML file → `MCC_*` environment variables)
//! - Initializes the tracing subscriber (stderr console, optional file
//!   output)
//! - Provides error context extension helpers for plumbing code
//!
//! Provider implementations live in `mcc-providers`; this crate only
//! supplies the ambient concerns they are configured from.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, CatalogConfig, ConfigLoader, LoggingConfig, RepositoryConfig};
pub use logging::init_logging;
