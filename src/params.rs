//! Parameter definitions for the task tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::parser::AssignmentType;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddAssignmentParams {
    #[schemars(description = "H=homework due before class, HTN=homework due tonight, Q=quiz/test")]
    #[serde(rename = "type")]
    pub assignment_type: AssignmentType,

    #[schemars(description = "Subject name (e.g., CHEM, BIO, STAT, ENG)")]
    pub subject: String,

    #[schemars(description = "Assignment description (e.g., FARABAUGH8.1-8.3, EDPUZZLE)")]
    pub description: String,

    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: String,

    #[schemars(description = "Due time in HH:MM format (optional, e.g., 15:30 for 3:30 PM)")]
    #[serde(default)]
    pub due_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddPriorityTaskParams {
    #[schemars(description = "Priority level: 1 (most important) to 5 (least important)")]
    pub priority: u32,

    #[schemars(description = "Task description (e.g., 'call hershey motel', 'get birth cert')")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTaskParams {
    #[schemars(
        description = "Task title to mark complete (e.g., '5 bio homework', 'H CHEM FARABAUGH8.1-8.3')"
    )]
    pub task_title: String,
}
