//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation:
//! configuration discovery, defaults for the catalog endpoint and the
//! tracked repository, and logging defaults.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mcc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mcc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MCC";

// ============================================================================
// CATALOG CONSTANTS
// ============================================================================

/// Default base URL of the remote catalog directory
pub const DEFAULT_CATALOG_BASE_URL: &str =
    "https://raw.githubusercontent.com/evgenyshkuratov-rgb/android-components/main/specs";

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// REPOSITORY CONSTANTS
// ============================================================================

/// Default remote name of the tracked repository
pub const DEFAULT_REPOSITORY_REMOTE: &str = "origin";

/// Default tracked branch
pub const DEFAULT_REPOSITORY_BRANCH: &str = "main";

/// Path prefixes that mark a changed file as catalog content
pub const DEFAULT_CONTENT_PREFIXES: &[&str] = &["components/", "specs/"];

/// Default git subprocess timeout in seconds
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
