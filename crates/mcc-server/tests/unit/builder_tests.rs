//! Unit tests for the MCP server builder

use std::sync::Arc;

use mcc_server::{BuilderError, McpServerBuilder};

use crate::test_utils::mock_services::{MockCatalogService, MockUpdateService};
use mcc_domain::value_objects::UpdateOutcome;

#[test]
fn test_build_with_all_dependencies() {
    let result = McpServerBuilder::new()
        .with_catalog_service(Arc::new(MockCatalogService::new(vec![])))
        .with_update_service(Arc::new(MockUpdateService::with_outcome(
            UpdateOutcome::UpToDate,
        )))
        .build();
    assert!(result.is_ok());
}

#[test]
fn test_build_accepts_custom_content_prefixes() {
    let result = McpServerBuilder::new()
        .with_catalog_service(Arc::new(MockCatalogService::new(vec![])))
        .with_update_service(Arc::new(MockUpdateService::with_outcome(
            UpdateOutcome::UpToDate,
        )))
        .with_content_prefixes(vec!["catalog/".to_string()])
        .build();
    assert!(result.is_ok());
}

#[test]
fn test_build_without_catalog_service_fails() {
    let result = McpServerBuilder::new()
        .with_update_service(Arc::new(MockUpdateService::with_outcome(
            UpdateOutcome::UpToDate,
        )))
        .build();
    match result {
        Err(BuilderError::MissingDependency(name)) => assert_eq!(name, "catalog service"),
        Ok(_) => panic!("build should fail without a catalog service"),
    }
}

#[test]
fn test_build_without_update_service_fails() {
    let result = McpServerBuilder::new()
        .with_catalog_service(Arc::new(MockCatalogService::new(vec![])))
        .build();
    match result {
        Err(BuilderError::MissingDependency(name)) => assert_eq!(name, "update service"),
        Ok(_) => panic!("build should fail without an update service"),
    }
}

#[test]
fn test_missing_dependency_error_display() {
    let error = BuilderError::MissingDependency("catalog service");
    assert_eq!(
        error.to_string(),
        "Missing required dependency: catalog service"
    );
}
