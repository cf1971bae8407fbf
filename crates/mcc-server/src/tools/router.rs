//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.
//! This module provides a centralized dispatch mechanism for MCP tool calls.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParam, CallToolResult};
use std::sync::Arc;

use crate::args::{CheckUpdatesArgs, GetComponentArgs, ListComponentsArgs, SearchComponentsArgs};
use crate::handlers::{
    CheckUpdatesHandler, GetComponentHandler, ListComponentsHandler, SearchComponentsHandler,
};

/// Handler references for tool routing
pub struct ToolHandlers {
    /// Handler for index listing
    pub list_components: Arc<ListComponentsHandler>,
    /// Handler for per-component fetches
    pub get_component: Arc<GetComponentHandler>,
    /// Handler for index searches
    pub search_components: Arc<SearchComponentsHandler>,
    /// Handler for upstream update checks
    pub check_updates: Arc<CheckUpdatesHandler>,
}

/// Route a tool call request to the appropriate handler
///
/// Parses the request arguments and delegates to the matching handler.
pub async fn route_tool_call(
    request: CallToolRequestParam,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    match request.name.as_ref() {
        "list_components" => {
            let args = parse_args::<ListComponentsArgs>(&request)?;
            handlers.list_components.handle(Parameters(args)).await
        }
        "get_component" => {
            let args = parse_args::<GetComponentArgs>(&request)?;
            handlers.get_component.handle(Parameters(args)).await
        }
        "search_components" => {
            let args = parse_args::<SearchComponentsArgs>(&request)?;
            handlers.search_components.handle(Parameters(args)).await
        }
        "check_updates" => {
            let args = parse_args::<CheckUpdatesArgs>(&request)?;
            handlers.check_updates.handle(Parameters(args)).await
        }
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        )),
    }
}

/// Parse request arguments into the expected type
fn parse_args<T: serde::de::DeserializeOwned>(
    request: &CallToolRequestParam,
) -> Result<T, McpError> {
    let args_value = serde_json::Value::Object(request.arguments.clone().unwrap_or_default());
    serde_json::from_value(args_value)
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e), None))
}
