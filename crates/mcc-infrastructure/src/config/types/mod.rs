//! Typed configuration sections

pub mod app;
pub mod catalog;
pub mod logging;
pub mod repository;

pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use repository::RepositoryConfig;
