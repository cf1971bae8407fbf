//! MCP tool handlers
//!
//! One handler per tool. Each validates its arguments, calls the matching
//! application service, and converts the result (or the domain failure)
//! into a text content block through the response formatter.

pub mod check_updates;
pub mod get_component;
pub mod list_components;
pub mod search_components;

pub use check_updates::CheckUpdatesHandler;
pub use get_component::GetComponentHandler;
pub use list_components::ListComponentsHandler;
pub use search_components::SearchComponentsHandler;
