//! Catalog Source Provider Port
//!
//! Port for read-only access to the remote component catalog, published as
//! a static JSON directory: one index document plus one document per
//! component.
//!
//! ## Design Rationale
//!
//! The port hides the transport entirely. Implementations decide how the
//! two document kinds are fetched (HTTP against a fixed base URL in
//! production, an in-memory map in tests) and own the mapping from
//! transport failures to the error taxonomy:
//!
//! - transport failure or non-success status on the index →
//!   [`Error::RemoteUnavailable`](crate::Error::RemoteUnavailable)
//! - any non-success status on a per-component document →
//!   [`Error::NotFound`](crate::Error::NotFound) (the directory is the
//!   source of truth for existence)
//! - body that is not valid JSON or lacks required fields →
//!   [`Error::MalformedResponse`](crate::Error::MalformedResponse)
//!
//! Every call performs exactly one read; providers must not cache.

use crate::error::Result;
use crate::value_objects::{ComponentIndex, ComponentSpec};
use async_trait::async_trait;

/// Catalog source provider trait
///
/// ## Thread Safety
///
/// All implementations must be `Send + Sync` for thread-safe sharing
/// across async contexts.
#[async_trait]
pub trait CatalogSourceProvider: Send + Sync {
    /// Fetch the catalog index document
    async fn fetch_index(&self) -> Result<ComponentIndex>;

    /// Fetch the full specification document for one component
    ///
    /// The name is interpolated into the document path; callers validate
    /// it is non-empty before reaching the port.
    async fn fetch_component(&self, name: &str) -> Result<ComponentSpec>;
}
