//! # MCP Component Catalog - Domain Layer
//!
//! Core types and contracts for the component catalog service.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the value objects exchanged between layers (catalog documents,
//!   change sets, update outcomes)
//! - Owns the error taxonomy shared by all layers
//! - Declares the provider ports (traits) that external adapters implement
//!
//! It has no dependency on any transport, protocol, or provider crate.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ComponentSummary`] | One entry of the catalog index |
//! | [`ComponentSpec`] | Full per-component document |
//! | [`ChangeSet`] | Divergence between local HEAD and the tracking ref |
//! | [`UpdateOutcome`] | Terminal states of an update check |
//! | [`Error`] | Error taxonomy for catalog and update operations |

pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export core types for public API
pub use error::{Error, Result};
pub use ports::providers::{CatalogSourceProvider, UpstreamRepoProvider};
pub use value_objects::{
    ChangeKind, ChangeSet, CommitEntry, ComponentIndex, ComponentSpec, ComponentSummary,
    UpdateOutcome,
};
