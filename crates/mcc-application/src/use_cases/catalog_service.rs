//! Catalog Query Use Case
//!
//! Application service for read-only catalog access. Orchestrates the
//! catalog source port for the list, get, and search operations.

use crate::ports::services::CatalogQueryInterface;
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::providers::CatalogSourceProvider;
use mcc_domain::value_objects::{ComponentIndex, ComponentSpec, ComponentSummary};
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether a summary matches the already-lowercased query
fn matches_query(summary: &ComponentSummary, query_lower: &str) -> bool {
    summary.name.to_lowercase().contains(query_lower)
        || summary.description.to_lowercase().contains(query_lower)
}

/// Catalog service implementation - fetches and filters catalog documents
pub struct CatalogService {
    catalog_source: Arc<dyn CatalogSourceProvider>,
}

impl CatalogService {
    /// Create new catalog service with injected dependencies
    pub fn new(catalog_source: Arc<dyn CatalogSourceProvider>) -> Self {
        Self { catalog_source }
    }
}

#[async_trait::async_trait]
impl CatalogQueryInterface for CatalogService {
    async fn list_components(&self) -> Result<ComponentIndex> {
        let index = self.catalog_source.fetch_index().await?;
        debug!(components = index.len(), "Fetched component index");
        Ok(index)
    }

    async fn get_component(&self, name: &str) -> Result<ComponentSpec> {
        if name.is_empty() {
            return Err(Error::invalid_argument("Component name cannot be empty"));
        }

        let spec = self.catalog_source.fetch_component(name).await?;
        if spec.name != name {
            // The document is still returned; the directory keyed it by name
            warn!(
                requested = name,
                document = %spec.name,
                "Component document name disagrees with the requested name"
            );
        }
        Ok(spec)
    }

    async fn search_components(&self, query: &str) -> Result<Vec<ComponentSummary>> {
        let index = self.catalog_source.fetch_index().await?;
        let query_lower = query.to_lowercase();

        let matches: Vec<ComponentSummary> = index
            .components
            .into_iter()
            .filter(|c| matches_query(c, &query_lower))
            .collect();

        debug!(query, matches = matches.len(), "Searched component index");
        Ok(matches)
    }
}
