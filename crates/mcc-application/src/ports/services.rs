//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.
//! These traits are the contracts that application services must implement;
//! the MCP handlers consume them as trait objects.

use async_trait::async_trait;
use mcc_domain::error::Result;
use mcc_domain::value_objects::{ComponentIndex, ComponentSpec, ComponentSummary, UpdateOutcome};

// ============================================================================
// Catalog Query Service Interface
// ============================================================================

/// Catalog Query Service Interface
///
/// Defines the contract for read-only component catalog operations.
/// Every operation performs exactly one remote read; results are never
/// cached between calls.
#[async_trait]
pub trait CatalogQueryInterface: Send + Sync {
    /// Fetch the full catalog index in display order
    async fn list_components(&self) -> Result<ComponentIndex>;

    /// Fetch the full specification document for one component
    async fn get_component(&self, name: &str) -> Result<ComponentSpec>;

    /// Filter the index by a case-insensitive substring of name or
    /// description
    ///
    /// An empty query matches everything. No match yields an empty
    /// sequence, not an error.
    async fn search_components(&self, query: &str) -> Result<Vec<ComponentSummary>>;
}

// ============================================================================
// Update Check Service Interface
// ============================================================================

/// Update Check Service Interface
///
/// Defines the contract for reporting how far the local repository has
/// diverged from its remote tracking branch.
#[async_trait]
pub trait UpdateCheckInterface: Send + Sync {
    /// Run one update check against the current repository state
    ///
    /// An unreachable remote is a graceful
    /// [`UpdateOutcome::RemoteUnreachable`](mcc_domain::UpdateOutcome)
    /// result; only unexpected diff failures surface as errors.
    async fn check_updates(&self) -> Result<UpdateOutcome>;
}
