//! Unit tests for the catalog query use case

use crate::test_utils::mock_providers::{MockCatalogSource, spec, summary};
use mcc_application::ports::services::CatalogQueryInterface;
use mcc_application::use_cases::CatalogService;
use mcc_domain::Error;
use std::sync::Arc;

fn chips_index() -> Vec<mcc_domain::ComponentSummary> {
    vec![
        summary("ChipsView", "Filter chips", &["chip"]),
        summary("AvatarView", "User avatar", &["avatar"]),
        summary("CheckboxView", "Tri-state checkbox", &["form", "chip-adjacent"]),
    ]
}

fn service_with(source: Arc<MockCatalogSource>) -> CatalogService {
    CatalogService::new(source)
}

#[tokio::test]
async fn test_list_returns_index_in_order() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let index = service.list_components().await.unwrap();
    let names: Vec<&str> = index.components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ChipsView", "AvatarView", "CheckboxView"]);
}

#[tokio::test]
async fn test_list_is_idempotent_and_uncached() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source.clone());

    let first = service.list_components().await.unwrap();
    let second = service.list_components().await.unwrap();

    assert_eq!(first, second);
    // One network read per call, never served from a cache
    assert_eq!(source.index_calls(), 2);
}

#[tokio::test]
async fn test_list_propagates_remote_unavailable() {
    let source = Arc::new(MockCatalogSource::new(chips_index()).with_failing_index());
    let service = service_with(source);

    let err = service.list_components().await.unwrap_err();
    assert!(matches!(err, Error::RemoteUnavailable { .. }));
}

#[tokio::test]
async fn test_search_empty_query_is_identity() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let matches = service.search_components("").await.unwrap();
    assert_eq!(matches, chips_index());
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let matches = service.search_components("CHIP").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ChipsView"]);
}

#[tokio::test]
async fn test_search_matches_description() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let matches = service.search_components("tri-state").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["CheckboxView"]);
}

#[tokio::test]
async fn test_search_preserves_index_order() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    // "view" matches every entry; the result must be the index subsequence
    let matches = service.search_components("view").await.unwrap();
    let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ChipsView", "AvatarView", "CheckboxView"]);
}

#[tokio::test]
async fn test_search_no_match_returns_empty() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let matches = service.search_components("xyz").await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_search_does_not_match_tags() {
    // The ChipsView scenario: only name/description participate in search
    let source = Arc::new(MockCatalogSource::new(vec![summary(
        "BadgeView",
        "Status badge",
        &["chip"],
    )]));
    let service = service_with(source);

    let matches = service.search_components("chip").await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_get_component_empty_name_rejected() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let err = service.get_component("").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[tokio::test]
async fn test_get_component_not_found() {
    let source = Arc::new(MockCatalogSource::new(chips_index()));
    let service = service_with(source);

    let err = service.get_component("Missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_every_listed_component_resolves() {
    // Contract between the index and detail documents: a listed name must
    // never come back as not-found
    let mut source = MockCatalogSource::new(chips_index());
    for entry in chips_index() {
        source = source.with_spec(spec(&entry.name, &entry.description, &[]));
    }
    let service = service_with(Arc::new(source));

    let index = service.list_components().await.unwrap();
    for entry in &index.components {
        let result = service.get_component(&entry.name).await;
        assert!(
            !matches!(result, Err(Error::NotFound { .. })),
            "listed component {} must resolve",
            entry.name
        );
    }
}
