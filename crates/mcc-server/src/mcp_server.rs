//! MCP Server Implementation
//!
//! Core MCP protocol server for the component catalog. It depends only on
//! the application service interfaces and receives all dependencies through
//! constructor injection.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};

use mcc_application::ports::services::{CatalogQueryInterface, UpdateCheckInterface};

use crate::handlers::{
    CheckUpdatesHandler, GetComponentHandler, ListComponentsHandler, SearchComponentsHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

/// Core MCP server implementation
///
/// Exposes the four catalog tools over the MCP protocol. Each invocation
/// is an independent request/response; the server holds only the `Arc`'d
/// handlers, which in turn hold the services and immutable configuration.
#[derive(Clone)]
pub struct McpServer {
    /// Handler for index listing
    list_components_handler: Arc<ListComponentsHandler>,
    /// Handler for per-component fetches
    get_component_handler: Arc<GetComponentHandler>,
    /// Handler for index searches
    search_components_handler: Arc<SearchComponentsHandler>,
    /// Handler for update checks
    check_updates_handler: Arc<CheckUpdatesHandler>,
}

impl McpServer {
    /// Create a new MCP server with injected dependencies
    pub fn new(
        catalog_service: Arc<dyn CatalogQueryInterface>,
        update_service: Arc<dyn UpdateCheckInterface>,
        content_prefixes: Vec<String>,
    ) -> Self {
        let list_components_handler =
            Arc::new(ListComponentsHandler::new(catalog_service.clone()));
        let get_component_handler = Arc::new(GetComponentHandler::new(catalog_service.clone()));
        let search_components_handler = Arc::new(SearchComponentsHandler::new(catalog_service));
        let check_updates_handler = Arc::new(CheckUpdatesHandler::new(
            update_service,
            content_prefixes,
        ));

        Self {
            list_components_handler,
            get_component_handler,
            search_components_handler,
            check_updates_handler,
        }
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "MCP Component Catalog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "MCP Component Catalog - Catalog Queries and Update Checks\n\n\
                 Browse a remote component catalog and track upstream changes.\n\n\
                 Tools:\n\
                 - list_components: List all catalog entries with descriptions\n\
                 - get_component: Fetch the full specification for one component\n\
                 - search_components: Filter the index by keyword\n\
                 - check_updates: Report how far the local repository is behind its remote\n"
                    .to_string(),
            ),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = create_tool_list()?;
        Ok(ListToolsResult {
            tools,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let handlers = ToolHandlers {
            list_components: Arc::clone(&self.list_components_handler),
            get_component: Arc::clone(&self.get_component_handler),
            search_components: Arc::clone(&self.search_components_handler),
            check_updates: Arc::clone(&self.check_updates_handler),
        };
        route_tool_call(request, &handlers).await
    }
}
