//! Response formatting utilities for the MCP server
//!
//! Converts service results into text content blocks: pretty-printed JSON
//! for catalog documents, and the ordered update report for divergence
//! results. Domain failures become error-tagged results with plain-text
//! messages; they never escape as protocol errors.

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};

use mcc_domain::error::Error;
use mcc_domain::value_objects::{ChangeSet, ComponentIndex, ComponentSpec, ComponentSummary, UpdateOutcome};

/// Response formatter for MCP server tools
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format the component index as pretty-printed JSON
    pub fn format_component_list(index: &ComponentIndex) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&index.components)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        tracing::info!(components = index.len(), "Listed component index");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Format one component specification as pretty-printed JSON
    pub fn format_component_spec(spec: &ComponentSpec) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(spec)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        tracing::info!(component = %spec.name, "Fetched component specification");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Format search results, or the no-match message for an empty result
    pub fn format_search_results(
        query: &str,
        matches: &[ComponentSummary],
    ) -> Result<CallToolResult, McpError> {
        if matches.is_empty() {
            let message = format!("No components found matching \"{}\".", query);
            return Ok(CallToolResult::success(vec![Content::text(message)]));
        }

        let json = serde_json::to_string_pretty(matches)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        tracing::info!(query, matches = matches.len(), "Searched component index");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Format the outcome of an update check
    pub fn format_update_outcome(outcome: &UpdateOutcome, prefixes: &[String]) -> CallToolResult {
        match outcome {
            UpdateOutcome::RemoteUnreachable => {
                CallToolResult::success(vec![Content::text("Could not fetch from remote.")])
            }
            UpdateOutcome::UpToDate => CallToolResult::success(vec![Content::text(
                "Up to date — no new changes on remote.",
            )]),
            UpdateOutcome::Diverged(change_set) => {
                Self::format_update_report(change_set, prefixes)
            }
        }
    }

    /// Render the ordered change report for a diverged repository
    ///
    /// Sections list catalog-content paths (those matching a configured
    /// prefix); when no changed path matches any prefix, the full union is
    /// listed verbatim instead so a layout change is never reported as
    /// nothing.
    fn format_update_report(change_set: &ChangeSet, prefixes: &[String]) -> CallToolResult {
        let relevant = |paths: &[String]| -> Vec<String> {
            paths
                .iter()
                .filter(|p| prefixes.iter().any(|prefix| p.starts_with(prefix)))
                .cloned()
                .collect()
        };

        let new = relevant(&change_set.new_paths);
        let modified = relevant(&change_set.modified_paths);
        let deleted = relevant(&change_set.deleted_paths);

        let mut lines = vec![format!(
            "## Component catalog: {} commit(s) behind remote\n",
            change_set.commits_behind
        )];
        if !new.is_empty() {
            lines.push(format!("**New:** {}", new.join(", ")));
        }
        if !modified.is_empty() {
            lines.push(format!("**Modified:** {}", modified.join(", ")));
        }
        if !deleted.is_empty() {
            lines.push(format!("**Deleted:** {}", deleted.join(", ")));
        }
        if new.is_empty() && modified.is_empty() && deleted.is_empty() {
            let union: Vec<&str> = change_set.all_paths().collect();
            lines.push(format!("**Changed:** {}", union.join(", ")));
        }

        let log = change_set
            .commit_log
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        lines.push(format!("\n**Commits:**\n{}", log));

        tracing::info!(
            commits_behind = change_set.commits_behind,
            "Formatted update report"
        );
        CallToolResult::success(vec![Content::text(lines.join("\n"))])
    }

    /// Format an index fetch failure (list and search operations)
    pub fn format_index_error(error: &Error) -> CallToolResult {
        let message = format!("Failed to fetch component index: {}", error);
        tracing::warn!(error = %error, "Component index fetch failed");
        CallToolResult::error(vec![Content::text(message)])
    }

    /// Format a per-component fetch failure
    pub fn format_component_error(name: &str, error: &Error) -> CallToolResult {
        let message = match error {
            Error::NotFound { .. } => format!(
                "Component \"{}\" not found. Use list_components to see available components.",
                name
            ),
            _ => format!("Error fetching component \"{}\": {}", name, error),
        };
        tracing::warn!(component = name, error = %error, "Component fetch failed");
        CallToolResult::error(vec![Content::text(message)])
    }

    /// Format an unexpected update check failure
    pub fn format_update_error(error: &Error) -> CallToolResult {
        let message = format!("Error: {}", error);
        tracing::error!(error = %error, "Update check failed");
        CallToolResult::error(vec![Content::text(message)])
    }
}
