//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::catalog::CatalogConfig;
pub use super::logging::LoggingConfig;
pub use super::repository::RepositoryConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote catalog endpoint configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Tracked repository configuration
    #[serde(default)]
    pub repository: RepositoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
