//! Unit tests for the update check use case

use crate::test_utils::mock_providers::{MockUpstreamRepo, commit};
use mcc_application::ports::services::UpdateCheckInterface;
use mcc_application::use_cases::UpdateService;
use mcc_domain::Error;
use mcc_domain::value_objects::UpdateOutcome;
use std::sync::Arc;

#[tokio::test]
async fn test_unreachable_remote_is_graceful() {
    let repo = Arc::new(MockUpstreamRepo::unreachable());
    let service = UpdateService::new(repo.clone());

    let outcome = service.check_updates().await.unwrap();
    assert_eq!(outcome, UpdateOutcome::RemoteUnreachable);
    // Nothing further is computed once the fetch fails
    assert_eq!(repo.diff_calls(), 0);
    assert_eq!(repo.log_calls(), 0);
}

#[tokio::test]
async fn test_up_to_date_short_circuits() {
    let repo = Arc::new(MockUpstreamRepo::up_to_date());
    let service = UpdateService::new(repo.clone());

    let outcome = service.check_updates().await.unwrap();
    assert_eq!(outcome, UpdateOutcome::UpToDate);
    // A zero count means no diff or log reads at all
    assert_eq!(repo.diff_calls(), 0);
    assert_eq!(repo.log_calls(), 0);
}

#[tokio::test]
async fn test_diverged_assembles_change_set() {
    let repo = Arc::new(
        MockUpstreamRepo::behind(3)
            .with_added(&["specs/components/Foo.json"])
            .with_modified(&["components/Bar.json"])
            .with_log(vec![
                commit("aaa1111", "Add Foo spec"),
                commit("bbb2222", "Tweak Bar colors"),
                commit("ccc3333", "Bump catalog version"),
            ]),
    );
    let service = UpdateService::new(repo.clone());

    let outcome = service.check_updates().await.unwrap();
    let change_set = match outcome {
        UpdateOutcome::Diverged(cs) => cs,
        other => panic!("Expected Diverged, got {:?}", other),
    };

    assert_eq!(change_set.commits_behind, 3);
    assert_eq!(change_set.new_paths, vec!["specs/components/Foo.json"]);
    assert_eq!(change_set.modified_paths, vec!["components/Bar.json"]);
    assert!(change_set.deleted_paths.is_empty());
    assert_eq!(change_set.commit_log.len(), 3);
    assert_eq!(change_set.commit_log[0].short_hash, "aaa1111");

    // One read per classification, one log read
    assert_eq!(repo.diff_calls(), 3);
    assert_eq!(repo.log_calls(), 1);
}

#[tokio::test]
async fn test_count_failure_surfaces_as_error() {
    let repo = Arc::new(MockUpstreamRepo::behind(1).with_failing_count());
    let service = UpdateService::new(repo);

    let err = service.check_updates().await.unwrap_err();
    assert!(matches!(err, Error::DiffComputation { .. }));
}
