//! Repository port traits
//!
//! These traits define the read interface over the project/task store.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! All methods are reads; projects and tasks are created and mutated by a
//! separate system. Overdue filters take the comparison instant from the
//! caller so the store adapter never consults a clock of its own.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Project, ProjectId, Task, UserId};
use crate::error::DomainError;

/// Read-only repository for Project entities
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Find a project by ID
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// Find all projects with pagination, newest first
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, DomainError>;

    /// Find projects having both a start and an end date
    async fn find_dated(&self) -> Result<Vec<Project>, DomainError>;

    /// Find projects past their end date and not completed
    async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Project>, DomainError>;

    /// Count all projects
    async fn count_all(&self) -> Result<i64, DomainError>;

    /// Count completed projects
    async fn count_completed(&self) -> Result<i64, DomainError>;

    /// Count projects created by a user
    async fn count_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError>;
}

/// Read-only repository for Task entities
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find tasks of a project, newest first
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError>;

    /// Find tasks of a project created within [from, to], oldest first
    async fn find_created_in_range(
        &self,
        project_id: &ProjectId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError>;

    /// Count all tasks
    async fn count_all(&self) -> Result<i64, DomainError>;

    /// Count tasks of a project
    async fn count_by_project(&self, project_id: &ProjectId) -> Result<i64, DomainError>;

    /// Count completed tasks of a project
    async fn count_completed_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError>;

    /// Count tasks of a project past their end date.
    /// Completed tasks are NOT excluded from this count.
    async fn count_past_end_by_project(
        &self,
        project_id: &ProjectId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError>;

    /// Count tasks of a project with neither a start nor an end date
    async fn count_dateless_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError>;

    /// Count open (not completed) tasks created by a user
    async fn count_open_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError>;

    /// Count completed tasks created by a user
    async fn count_completed_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError>;

    /// Count open tasks created by a user that are past their end date.
    /// Unlike `count_past_end_by_project`, completed tasks are excluded.
    async fn count_overdue_open_by_creator(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError>;
}
