//! Unit tests for update-check value objects

use mcc_domain::value_objects::{ChangeKind, ChangeSet, CommitEntry, UpdateOutcome};

fn sample_entry() -> CommitEntry {
    CommitEntry {
        short_hash: "a1b2c3d".to_string(),
        subject: "Add chips spec".to_string(),
        author: "Dev".to_string(),
        relative_time: "2 days ago".to_string(),
    }
}

#[test]
fn test_commit_entry_display() {
    assert_eq!(
        sample_entry().to_string(),
        "a1b2c3d Add chips spec (Dev, 2 days ago)"
    );
}

#[test]
fn test_change_kinds_are_distinct() {
    assert_ne!(ChangeKind::Added, ChangeKind::Modified);
    assert_ne!(ChangeKind::Modified, ChangeKind::Deleted);
    assert_ne!(ChangeKind::Added, ChangeKind::Deleted);
}

#[test]
fn test_all_paths_report_order() {
    let change_set = ChangeSet {
        commits_behind: 2,
        new_paths: vec!["specs/components/Foo.json".to_string()],
        modified_paths: vec!["components/Bar.json".to_string()],
        deleted_paths: vec!["components/Old.json".to_string()],
        commit_log: vec![sample_entry()],
    };

    let all: Vec<&str> = change_set.all_paths().collect();
    assert_eq!(
        all,
        vec![
            "specs/components/Foo.json",
            "components/Bar.json",
            "components/Old.json",
        ]
    );
}

#[test]
fn test_all_paths_empty_change_set() {
    let change_set = ChangeSet::default();
    assert_eq!(change_set.all_paths().count(), 0);
}

#[test]
fn test_outcome_equality() {
    assert_eq!(UpdateOutcome::UpToDate, UpdateOutcome::UpToDate);
    assert_eq!(
        UpdateOutcome::RemoteUnreachable,
        UpdateOutcome::RemoteUnreachable
    );
    assert_ne!(UpdateOutcome::UpToDate, UpdateOutcome::RemoteUnreachable);

    let diverged = UpdateOutcome::Diverged(ChangeSet {
        commits_behind: 1,
        ..ChangeSet::default()
    });
    assert_ne!(diverged, UpdateOutcome::UpToDate);
}

#[test]
fn test_change_set_serde_round_trip() {
    let change_set = ChangeSet {
        commits_behind: 3,
        new_paths: vec!["specs/components/Foo.json".to_string()],
        modified_paths: vec![],
        deleted_paths: vec![],
        commit_log: vec![sample_entry()],
    };

    let json = serde_json::to_string(&change_set).unwrap();
    let parsed: ChangeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, change_set);
}
