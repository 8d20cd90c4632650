//! Project domain entity
//!
//! Represents a tracked project whose tasks feed the analytics dashboards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project with planned start/end dates and a completion flag.
///
/// `end_date >= start_date` is not guaranteed; the store may contain
/// violations and consumers must not assume the invariant holds.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Planned duration in whole days, when both dates are set.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Past its end date and not yet completed.
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed && matches!(self.end_date, Some(end) if end < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_project(
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        is_completed: bool,
    ) -> Project {
        Project {
            id: ProjectId::new(),
            name: "test-project".to_string(),
            description: Some("A test project".to_string()),
            start_date,
            end_date,
            is_completed,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn duration_days_with_both_dates() {
        let start = Utc::now();
        let project = make_project(Some(start), Some(start + Duration::days(14)), false);
        assert_eq!(project.duration_days(), Some(14));
    }

    #[test]
    fn duration_days_missing_start() {
        let project = make_project(None, Some(Utc::now()), false);
        assert_eq!(project.duration_days(), None);
    }

    #[test]
    fn duration_days_missing_end() {
        let project = make_project(Some(Utc::now()), None, false);
        assert_eq!(project.duration_days(), None);
    }

    #[test]
    fn duration_days_negative_when_dates_inverted() {
        // The store does not enforce end >= start; the violation surfaces
        // as a negative duration rather than an error.
        let start = Utc::now();
        let project = make_project(Some(start), Some(start - Duration::days(3)), false);
        assert_eq!(project.duration_days(), Some(-3));
    }

    #[test]
    fn overdue_when_past_end_and_open() {
        let now = Utc::now();
        let project = make_project(None, Some(now - Duration::days(1)), false);
        assert!(project.is_overdue_at(now));
    }

    #[test]
    fn not_overdue_when_completed() {
        let now = Utc::now();
        let project = make_project(None, Some(now - Duration::days(1)), true);
        assert!(!project.is_overdue_at(now));
    }

    #[test]
    fn not_overdue_without_end_date() {
        let project = make_project(Some(Utc::now()), None, false);
        assert!(!project.is_overdue_at(Utc::now()));
    }

    #[test]
    fn project_id_display() {
        let id = ProjectId(Uuid::nil());
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
