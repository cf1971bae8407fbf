//! HTTP Catalog Provider
//!
//! Implements the `CatalogSourceProvider` port against the remote catalog,
//! a static JSON directory served over HTTP. Two document kinds exist:
//! `{base}/index.json` and `{base}/components/{name}.json`.
//!
//! Every call is a single attempt with a fixed timeout; retry policy
//! belongs to the caller. Nothing is cached between calls.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use mcc_domain::error::{Error, Result};
use mcc_domain::ports::providers::CatalogSourceProvider;
use mcc_domain::value_objects::{ComponentIndex, ComponentSpec};

use crate::constants::{COMPONENTS_DIR, ERROR_MSG_REQUEST_TIMEOUT, INDEX_DOCUMENT};

/// HTTP catalog provider
///
/// Implements the `CatalogSourceProvider` domain port over a reqwest
/// client received via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use mcc_providers::catalog::HttpCatalogProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(15))
///         .build()?;
///     let provider = HttpCatalogProvider::new(
///         "https://example.com/specs".to_string(),
///         Duration::from_secs(15),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct HttpCatalogProvider {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpCatalogProvider {
    /// Create a new HTTP catalog provider
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the catalog directory
    /// * `timeout` - Per-request timeout duration
    /// * `http_client` - Reqwest HTTP client for making requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    /// URL of the index document
    pub fn index_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            INDEX_DOCUMENT
        )
    }

    /// URL of the document for one component
    pub fn component_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}.json",
            self.base_url.trim_end_matches('/'),
            COMPONENTS_DIR,
            name
        )
    }

    /// Map a reqwest transport failure into the error taxonomy
    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::remote_unavailable(format!("{} {:?}", ERROR_MSG_REQUEST_TIMEOUT, self.timeout))
        } else {
            Error::remote_unavailable_with_source("HTTP request failed", e)
        }
    }

    /// Fetch a document body, mapping transport failures
    async fn fetch_body(&self, url: &str) -> Result<(reqwest::StatusCode, String)> {
        let response = self
            .http_client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        Ok((status, body))
    }
}

#[async_trait]
impl CatalogSourceProvider for HttpCatalogProvider {
    async fn fetch_index(&self) -> Result<ComponentIndex> {
        let url = self.index_url();
        let (status, body) = self.fetch_body(&url).await?;

        if !status.is_success() {
            return Err(Error::remote_unavailable(format!(
                "component index request failed ({status})"
            )));
        }

        // Two-step parse so invalid JSON and a missing field are reported
        // as distinct data-integrity signals
        let document: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| Error::malformed_response(format!("index document is not valid JSON: {e}")))?;
        if document.get("components").is_none() {
            return Err(Error::malformed_response(
                "index document is missing the components field",
            ));
        }

        serde_json::from_value(document).map_err(|e| {
            Error::malformed_response(format!("index document has an unexpected shape: {e}"))
        })
    }

    async fn fetch_component(&self, name: &str) -> Result<ComponentSpec> {
        let url = self.component_url(name);
        let (status, body) = self.fetch_body(&url).await?;

        if !status.is_success() {
            // The directory is the source of truth for existence: any
            // non-success status collapses to not-found for this operation
            debug!(component = name, %status, "Component document request failed");
            return Err(Error::not_found(name));
        }

        let document: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            Error::malformed_response(format!(
                "component document for \"{name}\" is not valid JSON: {e}"
            ))
        })?;

        serde_json::from_value(document).map_err(|e| {
            Error::malformed_response(format!(
                "component document for \"{name}\" has an unexpected shape: {e}"
            ))
        })
    }
}
