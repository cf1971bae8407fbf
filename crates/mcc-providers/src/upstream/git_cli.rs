//! Git CLI Upstream Provider
//!
//! Implements the `UpstreamRepoProvider` port by shelling out to the `git`
//! binary with a fixed timeout per command. The four primitives used are
//! `fetch`, `rev-list --count`, `diff --name-only --diff-filter`, and
//! `log --format`; all comparisons run over the `<branch>..<remote>/<branch>`
//! range.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use mcc_domain::error::{Error, Result};
use mcc_domain::ports::providers::UpstreamRepoProvider;
use mcc_domain::value_objects::{ChangeKind, CommitEntry};

/// NUL-separated log format: short hash, subject, author, relative time.
/// Git rejects NUL bytes in commit objects, so the separator cannot occur
/// inside a field (subjects and author names may contain tabs).
const LOG_FORMAT: &str = "--format=%h%x00%s%x00%an%x00%cr";

/// Diff filter letter for a change classification
fn diff_filter(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "A",
        ChangeKind::Modified => "M",
        ChangeKind::Deleted => "D",
    }
}

/// Parse the NUL-separated `git log` output into commit descriptors
///
/// Each line carries four fields; a line with fewer is unparsable output
/// and fails the whole read.
pub fn parse_commit_log(output: &str) -> Result<Vec<CommitEntry>> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut fields = line.splitn(4, '\0');
            match (
                fields.next(),
                fields.next(),
                fields.next(),
                fields.next(),
            ) {
                (Some(short_hash), Some(subject), Some(author), Some(relative_time)) => {
                    Ok(CommitEntry {
                        short_hash: short_hash.to_string(),
                        subject: subject.to_string(),
                        author: author.to_string(),
                        relative_time: relative_time.to_string(),
                    })
                }
                _ => Err(Error::diff_computation(format!(
                    "unparsable git log line: {line}"
                ))),
            }
        })
        .collect()
}

/// Git command-line upstream provider
///
/// The repository root, remote, branch, and subprocess timeout are fixed
/// at construction time. Only `fetch_remote` writes anything (the
/// remote-tracking ref); every other operation is a read.
pub struct GitCliProvider {
    repo_root: PathBuf,
    remote: String,
    branch: String,
    timeout: Duration,
}

impl GitCliProvider {
    /// Create a new git CLI provider
    ///
    /// # Arguments
    /// * `repo_root` - Filesystem root of the local repository
    /// * `remote` - Name of the configured remote (e.g., "origin")
    /// * `branch` - Tracked branch (e.g., "main")
    /// * `timeout` - Per-command subprocess timeout
    pub fn new(repo_root: PathBuf, remote: String, branch: String, timeout: Duration) -> Self {
        Self {
            repo_root,
            remote,
            branch,
            timeout,
        }
    }

    /// The `<branch>..<remote>/<branch>` revision range
    fn range(&self) -> String {
        format!("{}..{}/{}", self.branch, self.remote, self.branch)
    }

    /// Run one git command in the repository root
    ///
    /// Returns trimmed stdout on success, or a failure message carrying
    /// the subcommand, exit status, and stderr. Callers map the message
    /// into the right domain error variant.
    async fn run_git(&self, args: &[&str]) -> std::result::Result<String, String> {
        let subcommand = args.first().copied().unwrap_or("git");
        debug!(?args, repo = %self.repo_root.display(), "Running git command");

        let command = tokio::process::Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // When the timeout drops the output future, reap the child
            // instead of leaving it running detached.
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, command)
            .await
            .map_err(|_| format!("git {subcommand} timed out after {:?}", self.timeout))?
            .map_err(|e| format!("failed to run git {subcommand}: {e}"))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(format!(
                "git {subcommand} exited with {}: {}",
                output.status,
                stderr.trim()
            ))
        }
    }
}

#[async_trait]
impl UpstreamRepoProvider for GitCliProvider {
    async fn fetch_remote(&self) -> Result<()> {
        self.run_git(&["fetch", &self.remote, &self.branch, "--quiet"])
            .await
            .map(|_| ())
            .map_err(Error::upstream_unreachable)
    }

    async fn commits_behind(&self) -> Result<u64> {
        let range = self.range();
        let count = self
            .run_git(&["rev-list", "--count", &range])
            .await
            .map_err(Error::diff_computation)?;

        count.parse::<u64>().map_err(|e| {
            Error::diff_computation(format!("unparsable commit count \"{count}\": {e}"))
        })
    }

    async fn changed_paths(&self, kind: ChangeKind) -> Result<Vec<String>> {
        let range = self.range();
        let filter = format!("--diff-filter={}", diff_filter(kind));
        let output = self
            .run_git(&["diff", "--name-only", &filter, &range])
            .await
            .map_err(Error::diff_computation)?;

        Ok(output
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn commit_log(&self) -> Result<Vec<CommitEntry>> {
        let range = self.range();
        let output = self
            .run_git(&["log", LOG_FORMAT, &range])
            .await
            .map_err(Error::diff_computation)?;

        parse_commit_log(&output)
    }
}
