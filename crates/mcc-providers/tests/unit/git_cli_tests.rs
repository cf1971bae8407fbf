//! Unit tests for git CLI output parsing

use mcc_domain::Error;
use mcc_providers::upstream::git_cli::parse_commit_log;

#[test]
fn test_parse_empty_log() {
    let entries = parse_commit_log("").unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_parse_single_entry() {
    let entries =
        parse_commit_log("a1b2c3d\x00Add chips spec\x00Dev\x002 days ago").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].short_hash, "a1b2c3d");
    assert_eq!(entries[0].subject, "Add chips spec");
    assert_eq!(entries[0].author, "Dev");
    assert_eq!(entries[0].relative_time, "2 days ago");
}

#[test]
fn test_parse_preserves_order() {
    let output = "aaa1111\x00Newest\x00Dev\x001 hour ago\nbbb2222\x00Older\x00Dev\x002 hours ago";
    let entries = parse_commit_log(output).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].subject, "Newest");
    assert_eq!(entries[1].subject, "Older");
}

#[test]
fn test_parse_subject_with_punctuation() {
    let entries =
        parse_commit_log("ccc3333\x00fix: colors, spacing (round 2)\x00A. Dev\x003 weeks ago")
            .unwrap();
    assert_eq!(entries[0].subject, "fix: colors, spacing (round 2)");
    assert_eq!(entries[0].author, "A. Dev");
}

#[test]
fn test_parse_subject_with_tab_keeps_field_alignment() {
    // Tabs are legal in commit subjects; the NUL separator keeps the
    // author and time fields in their slots.
    let entries =
        parse_commit_log("ddd4444\x00Add\tcolumn spec\x00Dev\x005 minutes ago").unwrap();
    assert_eq!(entries[0].subject, "Add\tcolumn spec");
    assert_eq!(entries[0].author, "Dev");
    assert_eq!(entries[0].relative_time, "5 minutes ago");
}

#[test]
fn test_parse_rejects_short_lines() {
    let err = parse_commit_log("a1b2c3d\x00only two fields").unwrap_err();
    assert!(matches!(err, Error::DiffComputation { .. }));
}

#[test]
fn test_parse_skips_blank_lines() {
    let output = "aaa1111\x00Subject\x00Dev\x00now\n\n";
    let entries = parse_commit_log(output).unwrap();
    assert_eq!(entries.len(), 1);
}
