//! MCP server implementation for academic task management
//!
//! This module defines the main MCP server that exposes the task commands as
//! tools. Handler implementations are in the handlers module; unknown tool
//! names are rejected by the router itself.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::Config;
use crate::handlers;
use crate::notion::{NotionStore, TaskStore};
use crate::params::*;

/// The main Notion Task MCP Server
#[derive(Clone)]
pub struct NotionTaskServer {
    store: Arc<dyn TaskStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NotionTaskServer {
    pub fn new(config: Config) -> Self {
        Self::with_store(Arc::new(NotionStore::new(config.notion)))
    }

    /// Build the server around any store implementation. Tests inject an
    /// in-memory fake here.
    pub fn with_store(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Add homework/quiz with an automatic countdown task (H/HTN/Q + 5-day countdown)"
    )]
    async fn add_assignment(
        &self,
        Parameters(params): Parameters<AddAssignmentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_assignment(self.store.as_ref(), params).await
    }

    #[tool(description = "Add priority task with star notation (1* highest priority to 5* lowest)")]
    async fn add_priority_task(
        &self,
        Parameters(params): Parameters<AddPriorityTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_priority_task(self.store.as_ref(), params).await
    }

    #[tool(
        description = "Mark task as completed (automatically handles countdown logic and related tasks)"
    )]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<CompleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::complete_task(self.store.as_ref(), params).await
    }

    #[tool(description = "Show all tasks due today")]
    async fn show_today_tasks(&self) -> Result<CallToolResult, McpError> {
        handlers::show_today_tasks(self.store.as_ref()).await
    }

    #[tool(description = "Show all tasks from the academic database")]
    async fn show_all_tasks(&self) -> Result<CallToolResult, McpError> {
        handlers::show_all_tasks(self.store.as_ref()).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for NotionTaskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Academic task management MCP server backed by a Notion database. \
                 Assignments (H/HTN/Q) get an automatic 5-day countdown task; completing \
                 a countdown spawns the next day's task until the chain reaches zero."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
