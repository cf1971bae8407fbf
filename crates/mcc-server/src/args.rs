//! Tool argument types for the MCP server
//!
//! Argument structs for the four catalog tools. Schemas are generated with
//! schemars for the MCP tool listing; values are validated at the handler
//! boundary before any service call.

use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// Arguments for the list_components tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for listing catalog components (none required)")]
pub struct ListComponentsArgs {}

/// Arguments for the get_component tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching one component specification")]
pub struct GetComponentArgs {
    /// Component name as listed in the index
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_component_name", message = "Invalid component name"))]
    #[schemars(description = "Component name exactly as listed in the index (e.g., 'ChipsView')")]
    pub name: String,
}

/// Arguments for the search_components tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for searching the component index")]
pub struct SearchComponentsArgs {
    /// Search query; empty matches every component
    #[validate(length(max = 500, message = "Query is too long (maximum 500 characters)"))]
    #[schemars(
        description = "Keyword matched case-insensitively against component names and descriptions"
    )]
    pub query: String,
}

/// Arguments for the check_updates tool
#[derive(Debug, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for checking upstream catalog changes (none required)")]
pub struct CheckUpdatesArgs {}

// Custom validation functions

/// The name is interpolated into a URL path, so restrict the charset
fn validate_component_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.is_empty() {
        return Err(validator::ValidationError::new(
            "Component name cannot be empty",
        ));
    }

    // Only allow alphanumeric, underscore, and hyphen
    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err(validator::ValidationError::new(
            "Component name can only contain letters, numbers, underscores, and hyphens",
        ));
    }

    Ok(())
}
