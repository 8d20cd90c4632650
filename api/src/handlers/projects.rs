//! Project handlers
//!
//! Read-only endpoints backing the project pages. Creation and mutation
//! happen in a separate system; this API only serves the dashboards.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Project, ProjectId};
use crate::domain::ports::ProjectRepository;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing projects
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

/// Response for a project
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_completed: bool,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            description: p.description,
            start_date: p.start_date.map(|d| d.to_rfc3339()),
            end_date: p.end_date.map(|d| d.to_rfc3339()),
            is_completed: p.is_completed,
            created_by: p.created_by.map(|u| u.to_string()),
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// GET /projects
///
/// List projects, newest first.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state
        .project_repo
        .find_all(query.limit, query.offset)
        .await?;

    let responses: Vec<ProjectResponse> = projects.into_iter().map(|p| p.into()).collect();

    Ok(Json(responses))
}

/// GET /projects/:id
///
/// Get project details.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state
        .project_repo
        .find_by_id(&ProjectId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(project.into()))
}
