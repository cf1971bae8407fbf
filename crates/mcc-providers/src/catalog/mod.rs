//! Catalog source providers

pub mod http;

pub use http::HttpCatalogProvider;
