//! Upstream Repository Provider Port
//!
//! Narrow view of the local version-control repository and its configured
//! remote. The update checker needs exactly four primitives: update the
//! remote-tracking ref, count the commits behind it, list changed paths by
//! classification, and read the formatted commit log. Which refs are
//! compared is fixed at provider construction time.

use crate::error::Result;
use crate::value_objects::{ChangeKind, CommitEntry};
use async_trait::async_trait;

/// Upstream repository provider trait
///
/// All operations compare local HEAD of the tracked branch against the
/// remote tracking ref. Failures map into the error taxonomy:
/// [`Error::UpstreamUnreachable`](crate::Error::UpstreamUnreachable) for
/// `fetch_remote`, [`Error::DiffComputation`](crate::Error::DiffComputation)
/// for the read operations.
#[async_trait]
pub trait UpstreamRepoProvider: Send + Sync {
    /// Update the remote-tracking ref for the tracked branch (network)
    async fn fetch_remote(&self) -> Result<()>;

    /// Count commits reachable from the tracking ref but not local HEAD
    async fn commits_behind(&self) -> Result<u64>;

    /// List paths with the given change classification between the refs
    ///
    /// Exact-match diff classification; rename/similarity detection is not
    /// applied, so the three kinds partition the changed paths.
    async fn changed_paths(&self, kind: ChangeKind) -> Result<Vec<String>>;

    /// Ordered commit descriptors for the divergence, newest first
    async fn commit_log(&self) -> Result<Vec<CommitEntry>>;
}
