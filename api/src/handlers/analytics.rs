//! Analytics handlers
//!
//! Endpoints serving the dashboard statistics.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::{BurndownPoint, ProjectMonitoringStats, ProjectsAnalytics, UserWorkload};
use crate::domain::entities::ProjectId;
use crate::error::AppError;
use crate::AppState;

/// Response for an overdue project entry
#[derive(Debug, Serialize)]
pub struct OverdueProjectResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
}

/// Query parameters for the burndown range
#[derive(Debug, Deserialize)]
pub struct BurndownQuery {
    pub from_date: DateTime<Utc>,
    pub to_date: DateTime<Utc>,
}

/// Response for a burndown bucket
#[derive(Debug, Serialize)]
pub struct BurndownPointResponse {
    pub label: String,
    pub total: i64,
}

impl From<BurndownPoint> for BurndownPointResponse {
    fn from(point: BurndownPoint) -> Self {
        Self {
            label: point.label,
            total: point.total,
        }
    }
}

/// GET /analytics/projects
///
/// Portfolio-wide project statistics. The averages serialize as `null` when
/// the underlying set is empty (division by zero yields NaN).
pub async fn get_projects_analytics(
    State(state): State<AppState>,
) -> Result<Json<ProjectsAnalytics>, AppError> {
    let analytics = state.analytics_service.projects_analytics().await?;
    Ok(Json(analytics))
}

/// GET /analytics/projects/overdue
///
/// Projects past their end date and not completed. Full set, no pagination.
pub async fn get_overdue_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<OverdueProjectResponse>>, AppError> {
    let projects = state.analytics_service.overdue_projects().await?;

    let responses: Vec<OverdueProjectResponse> = projects
        .into_iter()
        .map(|p| OverdueProjectResponse {
            id: p.id.to_string(),
            name: p.name,
            description: p.description,
            start_date: p.start_date.map(|d| d.to_rfc3339()),
            end_date: p.end_date.map(|d| d.to_rfc3339()),
            created_at: p.created_at.to_rfc3339(),
        })
        .collect();

    Ok(Json(responses))
}

/// GET /analytics/projects/:id/monitoring
///
/// Task counters for a project. An unknown id answers with all zeros.
pub async fn get_project_monitoring_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectMonitoringStats>, AppError> {
    let stats = state
        .analytics_service
        .project_monitoring_stats(&ProjectId(id))
        .await?;

    Ok(Json(stats))
}

/// GET /analytics/projects/:id/burndown?from_date=..&to_date=..
///
/// Monthly completion burndown. An all-zero series answers with an empty
/// array, which the dashboard reads as "no data".
pub async fn get_project_tasks_burndown(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<BurndownQuery>,
) -> Result<Json<Vec<BurndownPointResponse>>, AppError> {
    let series = state
        .analytics_service
        .project_tasks_burndown(&ProjectId(id), query.from_date, query.to_date)
        .await?;

    let responses: Vec<BurndownPointResponse> = series
        .into_points()
        .into_iter()
        .map(|p| p.into())
        .collect();

    Ok(Json(responses))
}

/// GET /analytics/users
///
/// Per-user workload breakdown over the directory's first page.
pub async fn get_users_breakdown(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserWorkload>>, AppError> {
    let breakdown = state.analytics_service.users_breakdown().await?;
    Ok(Json(breakdown))
}
