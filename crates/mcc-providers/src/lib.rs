//! # MCP Component Catalog - Provider Layer
//!
//! Concrete implementations of the domain provider ports:
//!
//! - [`HttpCatalogProvider`](catalog::HttpCatalogProvider) - fetches the
//!   index and per-component documents from the remote static-JSON catalog
//!   over HTTP (reqwest)
//! - [`GitCliProvider`](upstream::GitCliProvider) - compares local HEAD to
//!   the remote tracking ref through the `git` command line (tokio
//!   subprocess)
//!
//! Both providers receive their configuration (base URL, repository root,
//! refs, timeouts) at construction time and hold no mutable state between
//! calls.

pub mod catalog;
pub mod constants;
pub mod upstream;

pub use catalog::HttpCatalogProvider;
pub use upstream::GitCliProvider;
