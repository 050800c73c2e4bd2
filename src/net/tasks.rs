//! Task CRUD against the API, with envelope-tolerant payload unwrapping.
//!
//! Deployments differ in how much wrapping they put around task payloads
//! (`{ data: { tasks } }`, `{ tasks }`, or a bare array), so the parsers
//! try the wrapped shapes first and fall back to the bare one.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use serde_json::Value;

use crate::net::error::ApiError;
use crate::net::http::{ApiClient, Method, expect_success};
use crate::net::types::{CreateTaskRequest, Task, UpdateTaskRequest};

/// `GET /tasks` — all tasks for the current user.
pub async fn fetch_tasks(client: &ApiClient) -> Result<Vec<Task>, ApiError> {
    let raw = client.send(Method::Get, "/tasks", None).await?;
    parse_task_list(&expect_success(raw)?)
}

/// `POST /tasks` — create a task.
pub async fn create_task(
    client: &ApiClient,
    request: &CreateTaskRequest,
) -> Result<Task, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let raw = client.send(Method::Post, "/tasks", Some(&body)).await?;
    parse_task(&expect_success(raw)?)
}

/// `PUT /tasks/{id}` — update title/description/completed.
pub async fn update_task(
    client: &ApiClient,
    id: &str,
    request: &UpdateTaskRequest,
) -> Result<Task, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let raw = client
        .send(Method::Put, &format!("/tasks/{id}"), Some(&body))
        .await?;
    parse_task(&expect_success(raw)?)
}

/// `PUT /tasks/{id}` with only the completion flag.
pub async fn set_completed(
    client: &ApiClient,
    id: &str,
    completed: bool,
) -> Result<Task, ApiError> {
    update_task(
        client,
        id,
        &UpdateTaskRequest {
            completed: Some(completed),
            ..UpdateTaskRequest::default()
        },
    )
    .await
}

/// `DELETE /tasks/{id}`.
pub async fn delete_task(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let raw = client
        .send(Method::Delete, &format!("/tasks/{id}"), None)
        .await?;
    expect_success(raw)?;
    Ok(())
}

/// Unwrap a task-list payload: `{ data: { tasks } }`, `{ tasks }`, or a
/// bare array.
pub fn parse_task_list(body: &Value) -> Result<Vec<Task>, ApiError> {
    let list = body
        .get("data")
        .and_then(|d| d.get("tasks"))
        .or_else(|| body.get("tasks"))
        .or_else(|| body.get("data").filter(|d| d.is_array()))
        .unwrap_or(body);
    serde_json::from_value(list.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Unwrap a single-task payload: `{ data: { task } }`, `{ task }`,
/// `{ data }`, or a bare object.
pub fn parse_task(body: &Value) -> Result<Task, ApiError> {
    let task = body
        .get("data")
        .and_then(|d| d.get("task"))
        .or_else(|| body.get("task"))
        .or_else(|| body.get("data").filter(|d| d.is_object()))
        .unwrap_or(body);
    serde_json::from_value(task.clone()).map_err(|e| ApiError::Decode(e.to_string()))
}
