//! Task handlers
//!
//! Read-only task listing backing the project tasks table.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{ProjectId, Task};
use crate::domain::ports::TaskRepository;
use crate::error::AppError;
use crate::AppState;

/// Response for a task
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_completed: bool,
    pub completion_date: Option<String>,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            project_id: t.project_id.to_string(),
            name: t.name,
            status: t.status.to_string(),
            start_date: t.start_date.map(|d| d.to_rfc3339()),
            end_date: t.end_date.map(|d| d.to_rfc3339()),
            is_completed: t.is_completed,
            completion_date: t.completion_date.map(|d| d.to_rfc3339()),
            created_by: t.created_by.map(|u| u.to_string()),
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

/// GET /projects/:id/tasks
///
/// List a project's tasks, newest first. An unknown project id yields an
/// empty list.
pub async fn list_project_tasks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = state.task_repo.find_by_project(&ProjectId(id)).await?;

    let responses: Vec<TaskResponse> = tasks.into_iter().map(|t| t.into()).collect();

    Ok(Json(responses))
}
