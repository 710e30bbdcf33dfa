//! Notion Task MCP Server
//!
//! Academic task management over a Notion database, served via stdio.
//!
//! # Configuration
//! Set `NOTION_API_KEY` and `NOTION_DATABASE_ID` env vars, or configure in
//! `~/.config/notion-task-mcp.toml`.

use rmcp::{transport::stdio, ServiceExt};

use notion_task_mcp::config::Config;
use notion_task_mcp::logging;
use notion_task_mcp::NotionTaskServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing()?;

    tracing::info!("Starting Notion Task MCP server");

    // Missing credentials abort here, before the transport comes up
    let config = Config::load()?;

    let server = NotionTaskServer::new(config);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");

    Ok(())
}
