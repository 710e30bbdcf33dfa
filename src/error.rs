//! Error types for the task server
//!
//! All engine and store failures flow through [`TaskError`] and are converted
//! to MCP error data at the tool boundary, so a bad command never takes the
//! process down.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Structured failure for engine and store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Malformed input to a command (bad date, out-of-range priority).
    /// No mutation is performed.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Title lookup yielded no match. No mutation is performed.
    #[error("task '{0}' not found")]
    NotFound(String),

    /// The Notion call failed (network or non-2xx response). Not retried.
    #[error("store error: {0}")]
    Store(String),
}

impl From<reqwest::Error> for TaskError {
    fn from(e: reqwest::Error) -> Self {
        TaskError::Store(e.to_string())
    }
}

impl From<TaskError> for McpError {
    fn from(e: TaskError) -> Self {
        match e {
            TaskError::Validation(_) | TaskError::NotFound(_) => {
                McpError::invalid_params(e.to_string(), None)
            }
            TaskError::Store(_) => McpError::internal_error(e.to_string(), None),
        }
    }
}

/// Create an internal MCP error with a message.
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}
