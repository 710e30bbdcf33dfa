//! Notion Task MCP Library
//!
//! Academic task management over a Notion database. Task titles carry their
//! type in a prefix convention (`H`/`HTN`/`Q` assignments, `5 bio homework`
//! countdowns, `1* errand` priorities); creating an assignment plans a linked
//! 5-day countdown record, and completing a countdown spawns the next link of
//! the chain.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use notion_task_mcp::NotionTaskServer;
//!
//! let server = NotionTaskServer::new(config);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! State lives entirely in Notion; every command re-derives what it needs from
//! title strings and store responses.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod notion;
pub mod params;
pub mod parser;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::NotionTaskServer;

// Re-export parameter types for direct API usage
pub use params::*;
