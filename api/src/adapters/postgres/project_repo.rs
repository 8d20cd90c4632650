//! PostgreSQL adapter for ProjectRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::domain::entities::{Project, ProjectId, UserId};
use crate::domain::ports::ProjectRepository;
use crate::entity::projects;
use crate::error::DomainError;

/// PostgreSQL implementation of ProjectRepository
pub struct PostgresProjectRepository {
    db: DatabaseConnection,
}

impl PostgresProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let result = projects::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, DomainError> {
        let results = projects::Entity::find()
            .order_by_desc(projects::Column::CreatedAt)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_dated(&self) -> Result<Vec<Project>, DomainError> {
        let results = projects::Entity::find()
            .filter(projects::Column::StartDate.is_not_null())
            .filter(projects::Column::EndDate.is_not_null())
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Project>, DomainError> {
        let results = projects::Entity::find()
            .filter(projects::Column::EndDate.lt(now))
            .filter(projects::Column::IsCompleted.eq(false))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let count = projects::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_completed(&self) -> Result<i64, DomainError> {
        let count = projects::Entity::find()
            .filter(projects::Column::IsCompleted.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }

    async fn count_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let count = projects::Entity::find()
            .filter(projects::Column::CreatedBy.eq(user_id.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count as i64)
    }
}

/// Convert SeaORM model to domain entity
impl From<projects::Model> for Project {
    fn from(model: projects::Model) -> Self {
        Project {
            id: ProjectId(model.id),
            name: model.name,
            description: model.description,
            start_date: model.start_date.map(|dt| dt.with_timezone(&Utc)),
            end_date: model.end_date.map(|dt| dt.with_timezone(&Utc)),
            is_completed: model.is_completed,
            created_by: model.created_by.map(UserId),
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
