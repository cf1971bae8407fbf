//! # MCP Component Catalog Server
//!
//! MCP protocol server for querying a remote component catalog and checking
//! the local repository for upstream changes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mcc_server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Run with default config (XDG paths + environment)
//!     run_server(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! This crate implements the transport and protocol layer: tool schemas,
//! request routing, per-tool handlers, and response formatting. It depends
//! on the application service interfaces and the infrastructure config,
//! and wires the concrete providers in at startup.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server construction |

pub mod args;
pub mod builder;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;

// Re-export core types for public API
pub use builder::{BuilderError, McpServerBuilder};
pub use init::run_server;
pub use mcp_server::McpServer;
