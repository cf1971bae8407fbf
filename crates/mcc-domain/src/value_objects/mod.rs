//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ComponentSummary`] | One entry in the catalog index |
//! | [`ComponentIndex`] | The ordered catalog index document |
//! | [`ComponentSpec`] | Full per-component document |
//! | [`ChangeKind`] | Classification of a changed path (added/modified/deleted) |
//! | [`CommitEntry`] | One formatted commit descriptor |
//! | [`ChangeSet`] | Divergence between local HEAD and the remote tracking ref |
//! | [`UpdateOutcome`] | Terminal states of an update check |

/// Catalog document value objects
pub mod catalog;
/// Update-check value objects
pub mod update;

// Re-export commonly used value objects
pub use catalog::{ComponentIndex, ComponentSpec, ComponentSummary};
pub use update::{ChangeKind, ChangeSet, CommitEntry, UpdateOutcome};
