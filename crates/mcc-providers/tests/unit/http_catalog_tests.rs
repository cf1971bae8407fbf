//! Unit tests for the HTTP catalog provider

use mcc_providers::catalog::HttpCatalogProvider;
use std::time::Duration;

fn provider(base_url: &str) -> HttpCatalogProvider {
    HttpCatalogProvider::new(
        base_url.to_string(),
        Duration::from_secs(15),
        reqwest::Client::new(),
    )
}

#[test]
fn test_index_url() {
    let provider = provider("https://example.com/specs");
    assert_eq!(provider.index_url(), "https://example.com/specs/index.json");
}

#[test]
fn test_index_url_trims_trailing_slash() {
    let provider = provider("https://example.com/specs/");
    assert_eq!(provider.index_url(), "https://example.com/specs/index.json");
}

#[test]
fn test_component_url() {
    let provider = provider("https://example.com/specs");
    assert_eq!(
        provider.component_url("ChipsView"),
        "https://example.com/specs/components/ChipsView.json"
    );
}
