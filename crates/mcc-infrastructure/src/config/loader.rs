//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mcc_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `MCC_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path() {
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Add environment variables. Only the first underscore nests
        // (MCC_CATALOG_BASE_URL -> catalog.base_url), so multi-word leaf
        // keys are preserved.
        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix))
                .map(|key| key.as_str().replacen('_', ":", 1).into())
                .split(":"),
        );

        // Extract and deserialize configuration
        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        // Validate configuration
        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_catalog_config(config)?;
    validate_repository_config(config)?;
    Ok(())
}

fn validate_catalog_config(config: &AppConfig) -> Result<()> {
    if config.catalog.base_url.is_empty() {
        return Err(Error::configuration("Catalog base URL cannot be empty"));
    }
    if !config.catalog.base_url.starts_with("http://")
        && !config.catalog.base_url.starts_with("https://")
    {
        return Err(Error::configuration(format!(
            "Catalog base URL must be an HTTP(S) URL, got: {}",
            config.catalog.base_url
        )));
    }
    if config.catalog.request_timeout_secs == 0 {
        return Err(Error::configuration("Catalog request timeout cannot be 0"));
    }
    Ok(())
}

fn validate_repository_config(config: &AppConfig) -> Result<()> {
    if config.repository.remote.is_empty() {
        return Err(Error::configuration("Repository remote cannot be empty"));
    }
    if config.repository.branch.is_empty() {
        return Err(Error::configuration("Repository branch cannot be empty"));
    }
    if config.repository.command_timeout_secs == 0 {
        return Err(Error::configuration(
            "Repository command timeout cannot be 0",
        ));
    }
    if config
        .repository
        .content_prefixes
        .iter()
        .any(String::is_empty)
    {
        return Err(Error::configuration(
            "Repository content prefixes cannot contain empty entries",
        ));
    }
    Ok(())
}
