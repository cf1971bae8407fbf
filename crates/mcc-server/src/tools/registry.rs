//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.
//! This module centralizes all tool metadata to enable consistent tool listing.

use rmcp::ErrorData as McpError;
use rmcp::model::Tool;
use std::borrow::Cow;
use std::sync::Arc;

use crate::args::{CheckUpdatesArgs, GetComponentArgs, ListComponentsArgs, SearchComponentsArgs};

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the list_components tool definition
    pub fn list_components() -> Result<Tool, McpError> {
        Self::create_tool(
            "list_components",
            "List all available catalog components with their descriptions",
            schemars::schema_for!(ListComponentsArgs),
        )
    }

    /// Get the get_component tool definition
    pub fn get_component() -> Result<Tool, McpError> {
        Self::create_tool(
            "get_component",
            "Get the full specification for a component including properties, usage examples, and tags",
            schemars::schema_for!(GetComponentArgs),
        )
    }

    /// Get the search_components tool definition
    pub fn search_components() -> Result<Tool, McpError> {
        Self::create_tool(
            "search_components",
            "Search for components by keyword (matches name or description)",
            schemars::schema_for!(SearchComponentsArgs),
        )
    }

    /// Get the check_updates tool definition
    pub fn check_updates() -> Result<Tool, McpError> {
        Self::create_tool(
            "check_updates",
            "Check for upstream changes in the component catalog repository",
            schemars::schema_for!(CheckUpdatesArgs),
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: &'static str,
        description: &'static str,
        schema: schemars::Schema,
    ) -> Result<Tool, McpError> {
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {} is not an object", name), None)
            })?
            .clone();

        Ok(Tool {
            name: Cow::Borrowed(name),
            title: None,
            description: Some(Cow::Borrowed(description)),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
///
/// Returns all tool definitions for the MCP list_tools response.
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    Ok(vec![
        ToolDefinitions::list_components()?,
        ToolDefinitions::get_component()?,
        ToolDefinitions::search_components()?,
        ToolDefinitions::check_updates()?,
    ])
}
