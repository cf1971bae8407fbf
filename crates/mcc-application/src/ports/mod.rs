//! Application Port Interfaces
//!
//! Contracts exposed by the application layer to the protocol layer.
//! Handlers depend on these traits, never on the concrete use cases.

pub mod services;

pub use services::{CatalogQueryInterface, UpdateCheckInterface};
