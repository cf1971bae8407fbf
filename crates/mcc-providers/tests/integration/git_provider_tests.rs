//! Integration tests for the git CLI provider
//!
//! Each test builds a pair of real repositories in a temporary directory:
//! an upstream repository and a local clone tracking it as `origin`.

use mcc_domain::Error;
use mcc_domain::ports::providers::UpstreamRepoProvider;
use mcc_domain::value_objects::ChangeKind;
use mcc_providers::upstream::GitCliProvider;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git binary should be runnable");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write_file(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

struct TestRepos {
    _tmp: tempfile::TempDir,
    upstream: PathBuf,
    local: PathBuf,
}

/// One upstream repository with an initial commit, cloned to a local
/// repository tracking it as `origin`
fn setup_repos() -> TestRepos {
    let tmp = tempfile::tempdir().unwrap();
    let upstream = tmp.path().join("upstream");
    let local = tmp.path().join("local");

    std::fs::create_dir_all(&upstream).unwrap();
    git(&upstream, &["init", "--initial-branch=main"]);
    git(&upstream, &["config", "user.email", "dev@example.com"]);
    git(&upstream, &["config", "user.name", "Dev"]);
    write_file(&upstream, "components/Bar.json", r#"{"name": "Bar"}"#);
    write_file(&upstream, "README.md", "catalog\n");
    git(&upstream, &["add", "."]);
    git(&upstream, &["commit", "-m", "Initial catalog"]);

    git(tmp.path(), &["clone", "upstream", "local"]);

    TestRepos {
        _tmp: tmp,
        upstream,
        local,
    }
}

/// Three upstream commits: one added spec, one modified component, one
/// deleted file
fn advance_upstream(repos: &TestRepos) {
    write_file(
        &repos.upstream,
        "specs/components/Foo.json",
        r#"{"name": "Foo"}"#,
    );
    git(&repos.upstream, &["add", "."]);
    git(&repos.upstream, &["commit", "-m", "Add Foo spec"]);

    write_file(
        &repos.upstream,
        "components/Bar.json",
        r#"{"name": "Bar", "version": 2}"#,
    );
    git(&repos.upstream, &["add", "."]);
    git(&repos.upstream, &["commit", "-m", "Tweak Bar"]);

    git(&repos.upstream, &["rm", "--quiet", "README.md"]);
    git(&repos.upstream, &["commit", "-m", "Drop readme"]);
}

fn provider_for(root: &Path) -> GitCliProvider {
    GitCliProvider::new(
        root.to_path_buf(),
        "origin".to_string(),
        "main".to_string(),
        Duration::from_secs(15),
    )
}

#[tokio::test]
async fn test_in_sync_repositories_report_zero_behind() {
    let repos = setup_repos();
    let provider = provider_for(&repos.local);

    provider.fetch_remote().await.unwrap();
    assert_eq!(provider.commits_behind().await.unwrap(), 0);
}

#[tokio::test]
async fn test_commits_behind_counts_upstream_commits() {
    let repos = setup_repos();
    advance_upstream(&repos);
    let provider = provider_for(&repos.local);

    provider.fetch_remote().await.unwrap();
    assert_eq!(provider.commits_behind().await.unwrap(), 3);
}

#[tokio::test]
async fn test_changed_paths_are_classified_disjointly() {
    let repos = setup_repos();
    advance_upstream(&repos);
    let provider = provider_for(&repos.local);
    provider.fetch_remote().await.unwrap();

    let added = provider.changed_paths(ChangeKind::Added).await.unwrap();
    let modified = provider.changed_paths(ChangeKind::Modified).await.unwrap();
    let deleted = provider.changed_paths(ChangeKind::Deleted).await.unwrap();

    assert_eq!(added, vec!["specs/components/Foo.json"]);
    assert_eq!(modified, vec!["components/Bar.json"]);
    assert_eq!(deleted, vec!["README.md"]);
}

#[tokio::test]
async fn test_commit_log_is_newest_first() {
    let repos = setup_repos();
    advance_upstream(&repos);
    let provider = provider_for(&repos.local);
    provider.fetch_remote().await.unwrap();

    let log = provider.commit_log().await.unwrap();
    assert_eq!(log.len(), 3);
    assert_eq!(log[0].subject, "Drop readme");
    assert_eq!(log[1].subject, "Tweak Bar");
    assert_eq!(log[2].subject, "Add Foo spec");
    for entry in &log {
        assert!(!entry.short_hash.is_empty());
        assert_eq!(entry.author, "Dev");
        assert!(!entry.relative_time.is_empty());
    }
}

#[tokio::test]
async fn test_commit_subject_with_tab_survives_log_parsing() {
    let repos = setup_repos();
    write_file(&repos.upstream, "components/Grid.json", r#"{"name": "Grid"}"#);
    git(&repos.upstream, &["add", "."]);
    git(&repos.upstream, &["commit", "-m", "Add\tGrid spec"]);

    let provider = provider_for(&repos.local);
    provider.fetch_remote().await.unwrap();

    let log = provider.commit_log().await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].subject, "Add\tGrid spec");
    assert_eq!(log[0].author, "Dev");
}

#[tokio::test(start_paused = true)]
async fn test_expired_timeout_is_diff_error() {
    let repos = setup_repos();
    let provider = GitCliProvider::new(
        repos.local.clone(),
        "origin".to_string(),
        "main".to_string(),
        Duration::ZERO,
    );

    let err = provider.commits_behind().await.unwrap_err();
    match err {
        Error::DiffComputation { message } => assert!(message.contains("timed out")),
        other => panic!("expected DiffComputation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_from_missing_remote_is_unreachable() {
    let repos = setup_repos();
    git(
        &repos.local,
        &["remote", "set-url", "origin", "/nonexistent/upstream"],
    );
    let provider = provider_for(&repos.local);

    let err = provider.fetch_remote().await.unwrap_err();
    assert!(matches!(err, Error::UpstreamUnreachable { .. }));
}

#[tokio::test]
async fn test_missing_tracking_ref_is_diff_error() {
    // A repository with no origin/main ref cannot be compared
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "--initial-branch=main"]);
    git(tmp.path(), &["config", "user.email", "dev@example.com"]);
    git(tmp.path(), &["config", "user.name", "Dev"]);
    write_file(tmp.path(), "file.txt", "x\n");
    git(tmp.path(), &["add", "."]);
    git(tmp.path(), &["commit", "-m", "Initial"]);

    let provider = provider_for(tmp.path());
    let err = provider.commits_behind().await.unwrap_err();
    assert!(matches!(err, Error::DiffComputation { .. }));
}
