//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. They store
//! data in memory and apply the same filters the PostgreSQL adapters express
//! in SQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Project, ProjectId, Task, TaskId, UserId};
use crate::domain::ports::{DirectoryUser, ProjectRepository, TaskRepository, UserDirectory};
use crate::error::{DirectoryError, DomainError};

// ============================================================================
// In-Memory Project Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, project: Project) {
        let mut projects = self.projects.write().unwrap();
        projects.insert(project.id, project);
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.get(id).cloned())
    }

    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        let mut all: Vec<_> = projects.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn find_dated(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects
            .values()
            .filter(|p| p.start_date.is_some() && p.end_date.is_some())
            .cloned()
            .collect())
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects
            .values()
            .filter(|p| p.is_overdue_at(now))
            .cloned()
            .collect())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.len() as i64)
    }

    async fn count_completed(&self) -> Result<i64, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects.values().filter(|p| p.is_completed).count() as i64)
    }

    async fn count_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let projects = self.projects.read().unwrap();
        Ok(projects
            .values()
            .filter(|p| p.created_by.as_ref() == Some(user_id))
            .count() as i64)
    }
}

// ============================================================================
// In-Memory Task Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, task: Task) {
        let mut tasks = self.tasks.write().unwrap();
        tasks.insert(task.id, task);
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().unwrap();
        let mut found: Vec<_> = tasks
            .values()
            .filter(|t| t.project_id == *project_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn find_created_in_range(
        &self,
        project_id: &ProjectId,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().unwrap();
        let mut found: Vec<_> = tasks
            .values()
            .filter(|t| t.project_id == *project_id && t.created_at >= from && t.created_at <= to)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks.len() as i64)
    }

    async fn count_by_project(&self, project_id: &ProjectId) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.project_id == *project_id)
            .count() as i64)
    }

    async fn count_completed_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.project_id == *project_id && t.is_completed)
            .count() as i64)
    }

    async fn count_past_end_by_project(
        &self,
        project_id: &ProjectId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        // Deliberately no is_completed filter, mirroring the SQL adapter.
        Ok(tasks
            .values()
            .filter(|t| t.project_id == *project_id && t.is_past_end_at(now))
            .count() as i64)
    }

    async fn count_dateless_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.project_id == *project_id && t.is_dateless())
            .count() as i64)
    }

    async fn count_open_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.created_by.as_ref() == Some(user_id) && !t.is_completed)
            .count() as i64)
    }

    async fn count_completed_by_creator(&self, user_id: &UserId) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.created_by.as_ref() == Some(user_id) && t.is_completed)
            .count() as i64)
    }

    async fn count_overdue_open_by_creator(
        &self,
        user_id: &UserId,
        now: DateTime<Utc>,
    ) -> Result<i64, DomainError> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks
            .values()
            .filter(|t| {
                t.created_by.as_ref() == Some(user_id) && !t.is_completed && t.is_past_end_at(now)
            })
            .count() as i64)
    }
}

// ============================================================================
// Mock User Directory
// ============================================================================

/// Configurable mock of the user directory
#[derive(Default)]
pub struct MockUserDirectory {
    users: Arc<RwLock<Vec<DirectoryUser>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: DirectoryUser) -> Self {
        {
            let mut users = self.users.write().unwrap();
            users.push(user);
        }
        self
    }

    /// Make every subsequent call fail
    pub fn set_failing(&self, failing: bool) {
        *self.fail.write().unwrap() = failing;
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn list_users(&self, limit: i64) -> Result<Vec<DirectoryUser>, DirectoryError> {
        if *self.fail.read().unwrap() {
            return Err(DirectoryError::Api {
                status: 503,
                message: "directory unavailable".to_string(),
            });
        }

        let users = self.users.read().unwrap();
        Ok(users.iter().take(limit as usize).cloned().collect())
    }
}
