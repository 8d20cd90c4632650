//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Project, ProjectId, Task, TaskId, TaskStatus, UserId};
use crate::domain::ports::DirectoryUser;

/// Create a test project with default values: no dates, not completed
pub fn test_project() -> Project {
    Project {
        id: ProjectId::new(),
        name: "test-project".to_string(),
        description: Some("A test project".to_string()),
        start_date: None,
        end_date: None,
        is_completed: false,
        created_by: None,
        created_at: Utc::now(),
    }
}

/// Create a test project with both dates set
pub fn test_project_with_dates(start: DateTime<Utc>, end: DateTime<Utc>) -> Project {
    Project {
        start_date: Some(start),
        end_date: Some(end),
        ..test_project()
    }
}

/// Create a completed test project
pub fn test_project_completed() -> Project {
    Project {
        is_completed: true,
        ..test_project()
    }
}

/// Create a test project created by a specific user
pub fn test_project_created_by(user_id: &str) -> Project {
    Project {
        created_by: Some(UserId::new(user_id)),
        ..test_project()
    }
}

/// Create a test task with default values: planned, no dates, not completed
pub fn test_task(project_id: &ProjectId) -> Task {
    Task {
        id: TaskId::new(),
        project_id: *project_id,
        name: "Test Task".to_string(),
        status: TaskStatus::Plan,
        start_date: None,
        end_date: None,
        is_completed: false,
        completion_date: None,
        created_by: None,
        created_at: Utc::now(),
    }
}

/// Create a completed test task with a specific completion date
pub fn test_task_completed_at(project_id: &ProjectId, completed: DateTime<Utc>) -> Task {
    Task {
        status: TaskStatus::Done,
        is_completed: true,
        completion_date: Some(completed),
        ..test_task(project_id)
    }
}

/// Create a test task created by a specific user
pub fn test_task_created_by(project_id: &ProjectId, user_id: &str) -> Task {
    Task {
        created_by: Some(UserId::new(user_id)),
        ..test_task(project_id)
    }
}

/// Create a directory user record
pub fn test_user(id: &str, full_name: &str) -> DirectoryUser {
    DirectoryUser {
        id: UserId::new(id),
        full_name: full_name.to_string(),
    }
}
