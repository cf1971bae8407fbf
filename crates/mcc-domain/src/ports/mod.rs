//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! Ports follow the Dependency Inversion Principle: the domain declares the
//! interfaces, the provider layer implements them, and the server wires the
//! implementations in at construction time.

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{CatalogSourceProvider, UpstreamRepoProvider};
