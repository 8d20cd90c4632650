//! PostgreSQL adapter for TaskRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::entities::{ProjectId, Task, TaskId, TaskStatus, UserId};
use crate::domain::ports::TaskRepository;
use crate::entity::tasks;
use crate::error::DomainError;

/// PostgreSQL implementation of TaskRepository
pub struct PostgresTaskRepository {
    db: DatabaseConnection,
}

impl PostgresTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError> {
        let results = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .order_by_desc(tasks::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_created_in_range(
        &self,
        project_id: &ProjectId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError> {
        let results = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .filter(tasks::Column::CreatedAt.gte(from))
            .filter(tasks::Column::CreatedAt.lte(to))
            .order_by_asc(tasks::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_by_project(&self, project_id: &ProjectId) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_completed_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .filter(tasks::Column::IsCompleted.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_past_end_by_project(
        &self,
        project_id: &ProjectId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        // No is_completed filter here; see the port contract.
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .filter(tasks::Column::EndDate.lt(now))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_dateless_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::ProjectId.eq(project_id.0))
            .filter(tasks::Column::StartDate.is_null())
            .filter(tasks::Column::EndDate.is_null())
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_open_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::CreatedBy.eq(user_id.as_str()))
            .filter(tasks::Column::IsCompleted.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_completed_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::CreatedBy.eq(user_id.as_str()))
            .filter(tasks::Column::IsCompleted.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_overdue_open_by_creator(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let count = tasks::Entity::find()
            .filter(tasks::Column::CreatedBy.eq(user_id.as_str()))
            .filter(tasks::Column::EndDate.lt(now))
            .filter(tasks::Column::IsCompleted.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }
}

/// Convert SeaORM model to domain entity
impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Task {
            id: TaskId(model.id),
            project_id: ProjectId(model.project_id),
            name: model.name,
            status: model
                .status
                .and_then(|s| s.parse().ok())
                .unwrap_or(TaskStatus::Plan),
            start_date: model.start_date.map(|dt| dt.with_timezone(&Utc)),
            end_date: model.end_date.map(|dt| dt.with_timezone(&Utc)),
            is_completed: model.is_completed,
            completion_date: model.completion_date.map(|dt| dt.with_timezone(&Utc)),
            created_by: model.created_by.map(UserId),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
