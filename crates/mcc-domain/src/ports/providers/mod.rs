//! External Service Provider Ports
//!
//! - `catalog` - read-only access to the remote component catalog
//! - `upstream` - narrow view of the local VCS repository and its remote

/// Remote catalog document source port
pub mod catalog;
/// Version-control upstream comparison port
pub mod upstream;

pub use catalog::CatalogSourceProvider;
pub use upstream::UpstreamRepoProvider;
