//! Store collaborator: the Notion REST API behind a trait
//!
//! The engine and handlers only ever see [`TaskStore`], so tests run against
//! an in-memory fake and the HTTP wiring stays in one place. [`NotionStore`]
//! implements the trait with the database-query / page-create / page-patch
//! endpoints. Calls are not retried; a non-2xx response surfaces as
//! [`TaskError::Store`] with the status and body.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::NotionConfig;
use crate::error::TaskError;
use crate::types::{NewTaskRecord, TaskRecord};

const NOTION_VERSION: &str = "2022-06-28";

/// Narrow interface to the remote record store.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All records, sorted by due date ascending.
    async fn query_all(&self) -> Result<Vec<TaskRecord>, TaskError>;

    /// Records whose title contains `title`, in the store's default order.
    async fn find_by_title(&self, title: &str) -> Result<Vec<TaskRecord>, TaskError>;

    /// Records due exactly on `date`.
    async fn due_on(&self, date: NaiveDate) -> Result<Vec<TaskRecord>, TaskError>;

    /// Records whose back-reference points at `anchor_id`.
    async fn find_related(&self, anchor_id: &str) -> Result<Vec<TaskRecord>, TaskError>;

    /// Create a record; the store assigns the id.
    async fn create(&self, record: &NewTaskRecord) -> Result<TaskRecord, TaskError>;

    /// Overwrite a record's status.
    async fn set_status(&self, id: &str, status: &str) -> Result<TaskRecord, TaskError>;
}

/// Notion-backed [`TaskStore`].
#[derive(Clone)]
pub struct NotionStore {
    client: Client,
    config: NotionConfig,
}

impl NotionStore {
    pub fn new(config: NotionConfig) -> Self {
        let client = Client::builder()
            .user_agent("notion-task-mcp/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    async fn query(&self, body: Value) -> Result<Vec<TaskRecord>, TaskError> {
        let url = format!(
            "{}/databases/{}/query",
            self.config.base_url, self.config.database_id
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let payload: Value = response.json().await?;
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(results.iter().map(record_from_page).collect())
    }
}

#[async_trait]
impl TaskStore for NotionStore {
    async fn query_all(&self) -> Result<Vec<TaskRecord>, TaskError> {
        self.query(json!({
            "sorts": [{ "property": "Due Date", "direction": "ascending" }]
        }))
        .await
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<TaskRecord>, TaskError> {
        self.query(json!({
            "filter": { "property": "Name", "title": { "contains": title } }
        }))
        .await
    }

    async fn due_on(&self, date: NaiveDate) -> Result<Vec<TaskRecord>, TaskError> {
        self.query(json!({
            "filter": {
                "property": "Due Date",
                "date": { "equals": date.format("%Y-%m-%d").to_string() }
            }
        }))
        .await
    }

    async fn find_related(&self, anchor_id: &str) -> Result<Vec<TaskRecord>, TaskError> {
        self.query(json!({
            "filter": {
                "property": "Related Task",
                "rich_text": { "equals": anchor_id }
            }
        }))
        .await
    }

    async fn create(&self, record: &NewTaskRecord) -> Result<TaskRecord, TaskError> {
        let url = format!("{}/pages", self.config.base_url);
        let body = json!({
            "parent": { "database_id": self.config.database_id },
            "properties": page_properties(record)
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let page: Value = response.json().await?;
        Ok(record_from_page(&page))
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<TaskRecord, TaskError> {
        let url = format!("{}/pages/{}", self.config.base_url, id);
        let body = json!({
            "properties": {
                "Status": { "type": "select", "select": { "name": status } }
            }
        });

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;
        let response = check_status(response).await?;

        let page: Value = response.json().await?;
        Ok(record_from_page(&page))
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TaskError> {
    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(TaskError::Store(format!("Notion API error {status}: {text}")));
    }
    Ok(response)
}

/// Build the Notion property map for a pending record. Empty status and
/// absent optional fields are omitted entirely rather than sent as nulls.
fn page_properties(record: &NewTaskRecord) -> Value {
    let mut properties = json!({
        "Name": {
            "type": "title",
            "title": [{ "type": "text", "text": { "content": record.title } }]
        },
        "Type": {
            "type": "select",
            "select": { "name": record.task_type }
        }
    });

    if !record.status.is_empty() {
        properties["Status"] = json!({
            "type": "select",
            "select": { "name": record.status }
        });
    }

    if let Some(date) = record.due_date {
        let mut start = date.format("%Y-%m-%d").to_string();
        if let Some(time) = record.due_time {
            start.push_str(&format!("T{}:00", time.format("%H:%M")));
        }
        properties["Due Date"] = json!({
            "type": "date",
            "date": { "start": start }
        });
    }

    if let Some(priority) = record.priority {
        properties["Priority"] = json!({
            "type": "number",
            "number": priority
        });
    }

    if let Some(related) = &record.related_task_id {
        properties["Related Task"] = json!({
            "type": "rich_text",
            "rich_text": [{ "type": "text", "text": { "content": related } }]
        });
    }

    properties
}

/// Decode a Notion page into a [`TaskRecord`], tolerating missing properties.
fn record_from_page(page: &Value) -> TaskRecord {
    let props = &page["properties"];

    let title = props["Name"]["title"][0]["text"]["content"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let status = props["Status"]["select"]["name"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let due_date = props["Due Date"]["date"]["start"]
        .as_str()
        .map(str::to_string);
    let task_type = props["Type"]["select"]["name"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let related_task_id = props["Related Task"]["rich_text"][0]["text"]["content"]
        .as_str()
        .map(str::to_string);

    TaskRecord {
        id: page["id"].as_str().unwrap_or_default().to_string(),
        title,
        status,
        due_date,
        task_type,
        related_task_id,
    }
}
