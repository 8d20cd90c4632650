//! Analytics service
//!
//! Computes derived statistics over projects and tasks for the dashboards:
//! counts, averages, per-user breakdowns, and the monthly completion
//! burndown. Every operation is stateless and reads straight from the store;
//! nothing is cached between calls.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Locale, Months, Utc};
use serde::Serialize;

use crate::domain::entities::{Project, ProjectId, UserId};
use crate::domain::ports::{ProjectRepository, TaskRepository, UserDirectory, DIRECTORY_PAGE_LIMIT};
use crate::error::AppError;

/// Task counters for a single project's monitoring block
#[derive(Debug, Clone, Serialize)]
pub struct ProjectMonitoringStats {
    pub count: i64,
    pub completed_count: i64,
    /// Tasks past their end date. Completed tasks are NOT excluded: a task
    /// finished after its deadline still counts here. The per-user breakdown
    /// applies the stricter rule; the two are intentionally different.
    pub overdue_count: i64,
    pub without_date_count: i64,
}

/// Portfolio-wide project statistics
#[derive(Debug, Clone, Serialize)]
pub struct ProjectsAnalytics {
    pub count: i64,
    /// Mean task count per project across ALL projects, 2 decimal places.
    /// NaN when there are no projects; callers must guard.
    pub average_tasks_count: f64,
    /// Mean of (end - start) in whole days over projects with both dates,
    /// 2 decimal places. NaN when no project has both dates set.
    pub average_duration: f64,
    pub completed_count: i64,
}

/// Per-user workload summary
#[derive(Debug, Clone, Serialize)]
pub struct UserWorkload {
    pub user_id: UserId,
    pub full_name: String,
    pub open_tasks_count: i64,
    pub completed_tasks_count: i64,
    /// Open tasks past their end date; completed tasks are excluded here,
    /// unlike in `ProjectMonitoringStats::overdue_count`.
    pub overdue_tasks_count: i64,
    pub projects_count: i64,
}

/// One month bucket of the completion burndown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurndownPoint {
    /// Localized "month year" label (Russian), monotonic along the walk
    pub label: String,
    /// Tasks whose completion date falls in this calendar month
    pub total: i64,
}

/// Burndown result: a series of month buckets, or nothing at all.
///
/// `NoData` is a distinct signal ("no completions anywhere in range") rather
/// than an all-zero series; the HTTP layer renders it as an empty array.
#[derive(Debug, Clone, PartialEq)]
pub enum BurndownSeries {
    NoData,
    Series(Vec<BurndownPoint>),
}

impl BurndownSeries {
    /// Flatten to the wire shape: `NoData` becomes an empty list.
    pub fn into_points(self) -> Vec<BurndownPoint> {
        match self {
            BurndownSeries::NoData => Vec::new(),
            BurndownSeries::Series(points) => points,
        }
    }
}

/// Service producing read-only derived statistics
pub struct AnalyticsService<PR, TR, UD>
where
    PR: ProjectRepository,
    TR: TaskRepository,
    UD: UserDirectory,
{
    projects: Arc<PR>,
    tasks: Arc<TR>,
    directory: Arc<UD>,
}

impl<PR, TR, UD> AnalyticsService<PR, TR, UD>
where
    PR: ProjectRepository,
    TR: TaskRepository,
    UD: UserDirectory,
{
    pub fn new(projects: Arc<PR>, tasks: Arc<TR>, directory: Arc<UD>) -> Self {
        Self {
            projects,
            tasks,
            directory,
        }
    }

    /// Task counters for a project's monitoring block.
    ///
    /// An unknown project id yields all-zero counts; no existence check is
    /// made.
    pub async fn project_monitoring_stats(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectMonitoringStats, AppError> {
        let now = Utc::now();

        Ok(ProjectMonitoringStats {
            count: self.tasks.count_by_project(project_id).await?,
            completed_count: self.tasks.count_completed_by_project(project_id).await?,
            overdue_count: self
                .tasks
                .count_past_end_by_project(project_id, now)
                .await?,
            without_date_count: self.tasks.count_dateless_by_project(project_id).await?,
        })
    }

    /// Portfolio-wide statistics across all projects.
    pub async fn projects_analytics(&self) -> Result<ProjectsAnalytics, AppError> {
        let count = self.projects.count_all().await?;
        let completed_count = self.projects.count_completed().await?;

        let dated = self.projects.find_dated().await?;
        let durations: Vec<i64> = dated.iter().filter_map(|p| p.duration_days()).collect();
        let average_duration =
            round2(durations.iter().sum::<i64>() as f64 / durations.len() as f64);

        // Every task belongs to exactly one project, so the mean per-project
        // task count reduces to total tasks over total projects.
        let task_count = self.tasks.count_all().await?;
        let average_tasks_count = round2(task_count as f64 / count as f64);

        Ok(ProjectsAnalytics {
            count,
            average_tasks_count,
            average_duration,
            completed_count,
        })
    }

    /// All projects past their end date and not completed. No pagination.
    pub async fn overdue_projects(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.projects.find_overdue(Utc::now()).await?)
    }

    /// Workload summary for every user in the directory page.
    ///
    /// Four store queries per user, issued one user at a time. With N users
    /// this is 4N sequential queries; the directory page itself is capped at
    /// `DIRECTORY_PAGE_LIMIT` and anything beyond is never seen.
    pub async fn users_breakdown(&self) -> Result<Vec<UserWorkload>, AppError> {
        let now = Utc::now();
        let users = self.directory.list_users(DIRECTORY_PAGE_LIMIT).await?;

        let mut result = Vec::with_capacity(users.len());

        for user in users {
            result.push(UserWorkload {
                open_tasks_count: self.tasks.count_open_by_creator(&user.id).await?,
                completed_tasks_count: self.tasks.count_completed_by_creator(&user.id).await?,
                overdue_tasks_count: self
                    .tasks
                    .count_overdue_open_by_creator(&user.id, now)
                    .await?,
                projects_count: self.projects.count_by_creator(&user.id).await?,
                user_id: user.id,
                full_name: user.full_name,
            });
        }

        Ok(result)
    }

    /// Monthly completion burndown for a project over [from_date, to_date].
    ///
    /// The walk steps by calendar months anchored on `from_date`'s
    /// day-of-month: bucket i starts at `from_date + i months` and the walk
    /// continues while that instant is within `to_date`. When the
    /// day-of-month does not align with `to_date`, the final bucket's
    /// calendar month extends past `to_date` and completions in that tail
    /// are still counted.
    ///
    /// Each bucket counts tasks (fetched by creation date within the range)
    /// whose completion date falls in the bucket's calendar month. A series
    /// with no completions at all collapses to `NoData`.
    pub async fn project_tasks_burndown(
        &self,
        project_id: &ProjectId,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Result<BurndownSeries, AppError> {
        let tasks = self
            .tasks
            .find_created_in_range(project_id, from_date, to_date)
            .await?;

        let mut points = Vec::new();

        let mut step: u32 = 0;
        while let Some(current) = from_date.checked_add_months(Months::new(step)) {
            if current > to_date {
                break;
            }

            let total = tasks
                .iter()
                .filter(|t| t.completed_in_month(current.year(), current.month()))
                .count() as i64;

            points.push(BurndownPoint {
                label: month_label(current),
                total,
            });

            step += 1;
        }

        if points.iter().all(|p| p.total == 0) {
            return Ok(BurndownSeries::NoData);
        }

        Ok(BurndownSeries::Series(points))
    }
}

/// Round to 2 decimal places. NaN and infinities pass through untouched.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Localized "month year" label for a burndown bucket
fn month_label(date: DateTime<Utc>) -> String {
    date.format_localized("%B %Y", Locale::ru_RU).to_string()
}
