//! Update Check Use Case
//!
//! Application service for the update-diff computation. Drives the
//! upstream repository port through the per-invocation state machine:
//! fetch the remote, count the divergence, classify the changed paths,
//! and collect the commit log.

use crate::ports::services::UpdateCheckInterface;
use mcc_domain::error::Result;
use mcc_domain::ports::providers::UpstreamRepoProvider;
use mcc_domain::value_objects::{ChangeKind, ChangeSet, UpdateOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Update service implementation - compares local HEAD to the tracking ref
pub struct UpdateService {
    upstream_repo: Arc<dyn UpstreamRepoProvider>,
}

impl UpdateService {
    /// Create new update service with injected dependencies
    pub fn new(upstream_repo: Arc<dyn UpstreamRepoProvider>) -> Self {
        Self { upstream_repo }
    }
}

#[async_trait::async_trait]
impl UpdateCheckInterface for UpdateService {
    async fn check_updates(&self) -> Result<UpdateOutcome> {
        // A failed fetch is an expected condition (offline, auth), not an
        // error: report it as a graceful terminal outcome.
        if let Err(e) = self.upstream_repo.fetch_remote().await {
            warn!(error = %e, "Could not update remote-tracking ref");
            return Ok(UpdateOutcome::RemoteUnreachable);
        }

        let commits_behind = self.upstream_repo.commits_behind().await?;
        if commits_behind == 0 {
            debug!("Local HEAD matches the remote tracking ref");
            return Ok(UpdateOutcome::UpToDate);
        }

        let new_paths = self.upstream_repo.changed_paths(ChangeKind::Added).await?;
        let modified_paths = self
            .upstream_repo
            .changed_paths(ChangeKind::Modified)
            .await?;
        let deleted_paths = self
            .upstream_repo
            .changed_paths(ChangeKind::Deleted)
            .await?;
        let commit_log = self.upstream_repo.commit_log().await?;

        info!(
            commits_behind,
            new = new_paths.len(),
            modified = modified_paths.len(),
            deleted = deleted_paths.len(),
            "Remote tracking ref is ahead of local HEAD"
        );

        Ok(UpdateOutcome::Diverged(ChangeSet {
            commits_behind,
            new_paths,
            modified_paths,
            deleted_paths,
            commit_log,
        }))
    }
}
