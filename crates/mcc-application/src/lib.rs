//! # MCP Component Catalog - Application Layer
//!
//! Use cases for the component catalog service, orchestrating the domain
//! ports according to Clean Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the service interfaces consumed by the protocol layer
//! - Implements the catalog query and update check use cases
//! - Depends only on `mcc-domain` ports, never on concrete providers
//!
//! ## Use Cases
//!
//! - Catalog queries: list, get, and search components
//! - Update checks: divergence of the local repository from its remote
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `mcc-domain`: value objects, error taxonomy, and provider ports
//! - Pure Rust libraries for async and logging

pub mod ports;
pub mod use_cases;

pub use ports::services::{CatalogQueryInterface, UpdateCheckInterface};
pub use use_cases::{CatalogService, UpdateService};
