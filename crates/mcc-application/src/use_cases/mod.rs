//! Application Use Cases
//!
//! Service implementations behind the application port interfaces.

pub mod catalog_service;
pub mod update_service;

pub use catalog_service::CatalogService;
pub use update_service::UpdateService;
