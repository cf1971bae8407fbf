//! Tracked repository configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Local version-control repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Filesystem root of the local repository
    pub root: PathBuf,

    /// Name of the configured remote
    pub remote: String,

    /// Tracked branch compared against `<remote>/<branch>`
    pub branch: String,

    /// Path prefixes that mark a changed file as catalog content
    pub content_prefixes: Vec<String>,

    /// Git subprocess timeout in seconds
    pub command_timeout_secs: u64,
}

impl RepositoryConfig {
    /// Subprocess timeout as a duration
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            remote: DEFAULT_REPOSITORY_REMOTE.to_string(),
            branch: DEFAULT_REPOSITORY_BRANCH.to_string(),
            content_prefixes: DEFAULT_CONTENT_PREFIXES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
        }
    }
}
