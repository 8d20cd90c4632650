//! Task domain entity
//!
//! Represents a unit of work inside a project, moving through a fixed
//! workflow from planning to done.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::project::ProjectId;
use super::user::UserId;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TaskId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Plan,
    ReadyForWork,
    InProgress,
    Checking,
    RequiresCorrection,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Plan => write!(f, "plan"),
            TaskStatus::ReadyForWork => write!(f, "ready_for_work"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Checking => write!(f, "checking"),
            TaskStatus::RequiresCorrection => write!(f, "requires_correction"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plan" => Ok(TaskStatus::Plan),
            "ready_for_work" => Ok(TaskStatus::ReadyForWork),
            "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "checking" => Ok(TaskStatus::Checking),
            "requires_correction" => Ok(TaskStatus::RequiresCorrection),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!("Unknown task status: {}", s)),
        }
    }
}

/// A task inside a project
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub name: String,
    pub status: TaskStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_completed: bool,
    /// Set when work actually finished; may differ from `end_date`
    pub completion_date: Option<DateTime<Utc>>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Past its planned end date. Completion status is NOT considered;
    /// a finished task past its end date still reads as overdue here.
    pub fn is_past_end_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.end_date, Some(end) if end < now)
    }

    /// Has neither a start nor an end date.
    pub fn is_dateless(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Work finished within the given calendar month of the given year.
    /// Tasks without a completion date never match.
    pub fn completed_in_month(&self, year: i32, month: u32) -> bool {
        match self.completion_date {
            Some(date) => date.year() == year && date.month() == month,
            None => false,
        }
    }
}
