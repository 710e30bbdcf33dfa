//! Handler implementations for the task tools
//!
//! Each handler builds a mutation plan with the engine, applies it through the
//! store, and converts the outcome to a `CallToolResult`. Failures become
//! structured MCP errors; nothing here can crash the server.

use chrono::Local;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::Serialize;
use serde_json::json;

use crate::engine;
use crate::error::{internal_error, TaskError};
use crate::notion::TaskStore;
use crate::params::{AddAssignmentParams, AddPriorityTaskParams, CompleteTaskParams};
use crate::parser::parse_title;
use crate::types::TaskListResponse;

pub async fn add_assignment(
    store: &dyn TaskStore,
    params: AddAssignmentParams,
) -> Result<CallToolResult, McpError> {
    let plan = engine::plan_assignment(
        params.assignment_type,
        &params.subject,
        &params.description,
        &params.due_date,
        params.due_time.as_deref(),
    )?;

    let records = engine::apply_plan(store, &plan).await?;

    tracing::info!(summary = %plan.summary, "assignment created");

    json_success(&json!({
        "main_task": records.first().map(|r| r.id.clone()),
        "countdown_task": records.get(1).map(|r| r.id.clone()),
        "message": plan.summary,
    }))
}

pub async fn add_priority_task(
    store: &dyn TaskStore,
    params: AddPriorityTaskParams,
) -> Result<CallToolResult, McpError> {
    let plan = engine::plan_priority(params.priority, &params.description)?;
    engine::apply_plan(store, &plan).await?;

    Ok(CallToolResult::success(vec![Content::text(plan.summary)]))
}

pub async fn complete_task(
    store: &dyn TaskStore,
    params: CompleteTaskParams,
) -> Result<CallToolResult, McpError> {
    let matches = store.find_by_title(&params.task_title).await?;

    // When several records match, the first result in the store's default
    // order wins.
    let Some(record) = matches.into_iter().next() else {
        return Err(TaskError::NotFound(params.task_title).into());
    };

    let related = if parse_title(&record.title).is_main_task() {
        store.find_related(&record.id).await?
    } else {
        Vec::new()
    };

    let today = Local::now().date_naive();
    let plan = engine::plan_completion(&record, &related, today);
    engine::apply_plan(store, &plan).await?;

    tracing::info!(summary = %plan.summary, "task completed");

    json_success(&json!({ "message": plan.summary }))
}

pub async fn show_today_tasks(store: &dyn TaskStore) -> Result<CallToolResult, McpError> {
    let today = Local::now().date_naive();
    let tasks = store.due_on(today).await?;

    let formatted: Vec<_> = tasks
        .iter()
        .map(|t| {
            json!({
                "id": t.id,
                "title": t.title,
                "status": t.status,
                "type": t.task_type,
            })
        })
        .collect();

    json_success(&formatted)
}

pub async fn show_all_tasks(store: &dyn TaskStore) -> Result<CallToolResult, McpError> {
    let tasks = store.query_all().await?;

    let response = TaskListResponse {
        total: tasks.len(),
        tasks,
    };

    json_success(&response)
}

fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data).map_err(|e| internal_error(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
