//! MCP tool registry and routing

pub mod registry;
pub mod router;

pub use registry::{ToolDefinitions, create_tool_list};
pub use router::{ToolHandlers, route_tool_call};
