//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod analytics;
pub mod projects;
pub mod tasks;

pub use analytics::{
    get_overdue_projects, get_project_monitoring_stats, get_project_tasks_burndown,
    get_projects_analytics, get_users_breakdown,
};
pub use projects::{get_project, list_projects};
pub use tasks::list_project_tasks;
