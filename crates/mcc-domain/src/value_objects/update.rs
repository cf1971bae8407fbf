//! Update-Check Value Objects
//!
//! Value objects describing how far the local repository has diverged
//! from its remote tracking branch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Changed-Path Classification
///
/// Classification of a changed path between two refs. The three kinds are
/// mutually exclusive per the rename-agnostic diff: a path belongs to
/// exactly one set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Path exists only on the remote tracking ref
    Added,
    /// Path exists on both refs with different content
    Modified,
    /// Path exists only on local HEAD
    Deleted,
}

/// Value Object: Commit Descriptor
///
/// One entry of the commit log between local HEAD and the remote
/// tracking ref. The relative time is kept as the opaque text the VCS
/// produced ("2 days ago"); it is presentation data, not a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitEntry {
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Commit subject line
    pub subject: String,
    /// Author name
    pub author: String,
    /// Relative author time as formatted by the VCS
    pub relative_time: String,
}

impl fmt::Display for CommitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.short_hash, self.subject, self.author, self.relative_time
        )
    }
}

/// Value Object: Change Set
///
/// Result of an update check when the tracking ref is ahead of local
/// HEAD. Path sets are disjoint; the commit log is ordered as the VCS
/// reports it (newest first).
///
/// ## Business Rules
///
/// - `commits_behind` is always ≥ 1 for an assembled change set (a count
///   of 0 short-circuits to [`UpdateOutcome::UpToDate`])
/// - A path appears in exactly one of the three sets
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSet {
    /// Commits reachable from the tracking ref but not from local HEAD
    pub commits_behind: u64,
    /// Paths present only on the tracking ref
    pub new_paths: Vec<String>,
    /// Paths changed on the tracking ref
    pub modified_paths: Vec<String>,
    /// Paths removed on the tracking ref
    pub deleted_paths: Vec<String>,
    /// Ordered commit descriptors for the divergence
    pub commit_log: Vec<CommitEntry>,
}

impl ChangeSet {
    /// All changed paths in report order: new, then modified, then deleted
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.new_paths
            .iter()
            .chain(self.modified_paths.iter())
            .chain(self.deleted_paths.iter())
            .map(String::as_str)
    }
}

/// Value Object: Update-Check Outcome
///
/// The three terminal states of an update check. `RemoteUnreachable` and
/// `UpToDate` are expected, graceful outcomes; only unexpected diff
/// failures surface as errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum UpdateOutcome {
    /// The VCS remote could not be reached; nothing further was computed
    RemoteUnreachable,
    /// Local HEAD already matches the remote tracking ref
    UpToDate,
    /// The tracking ref is ahead; the change set describes the divergence
    Diverged(ChangeSet),
}
