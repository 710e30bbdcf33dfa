//! Record types shared between the engine and the store

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A task as persisted in the Notion database.
///
/// Records have no in-process lifecycle: each one lives only for the single
/// request/response cycle that produced or consumed it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskRecord {
    /// Notion page id
    pub id: String,
    pub title: String,
    /// Free text: "due", "completed", or ""
    pub status: String,
    /// ISO date, possibly with a time suffix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Mirrors the descriptor kind ("assignment", "countdown", ...)
    #[serde(rename = "type")]
    pub task_type: String,
    /// Back-reference to the anchor assignment, for countdown records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_task_id: Option<String>,
}

/// Fields for a record that has not been created yet.
///
/// Dates stay typed until the store boundary serializes them for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRecord {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    /// Empty string means no status is set on the record
    pub status: String,
    pub task_type: String,
    pub priority: Option<u32>,
    pub related_task_id: Option<String>,
}

/// Response payload for task listing tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TaskListResponse {
    pub total: usize,
    pub tasks: Vec<TaskRecord>,
}
