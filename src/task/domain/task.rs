//! Task record and the draft payload it is created from.

use super::{ParseTaskStatusError, Priority, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Placeholder title used when command text yields no title token.
pub const UNTITLED_TASK_TITLE: &str = "Untitled Task";

/// Task lifecycle status.
///
/// The command surface only ever writes [`TaskStatus::Open`]; closed tasks
/// can appear in stored data maintained elsewhere and still count correctly
/// in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is outstanding.
    Open,
    /// Task has been completed or dismissed.
    Closed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Validated creation payload for a task record.
///
/// Construction resolves the title placeholder and derives the priority
/// tier, so a draft always carries the exact field values the stored task
/// will have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    assignee: String,
    due: String,
    priority: Priority,
}

impl TaskDraft {
    /// Creates a draft from parsed command fields.
    ///
    /// A title that is empty after trimming becomes
    /// [`UNTITLED_TASK_TITLE`]. The empty string is the sentinel for an
    /// unassigned task and for "no due date"; the due value is kept as
    /// given, without calendar validation. Priority is classified from the
    /// resolved title.
    #[must_use]
    pub fn new(title: impl Into<String>, assignee: impl Into<String>, due: impl Into<String>) -> Self {
        let raw_title: String = title.into();
        let trimmed = raw_title.trim();
        let resolved_title = if trimmed.is_empty() {
            UNTITLED_TASK_TITLE.to_owned()
        } else {
            trimmed.to_owned()
        };
        let priority = Priority::classify(&resolved_title);

        Self {
            title: resolved_title,
            assignee: assignee.into(),
            due: due.into(),
            priority,
        }
    }

    /// Returns the resolved title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee, empty when unassigned.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the due date string, empty when absent.
    #[must_use]
    pub fn due(&self) -> &str {
        &self.due
    }

    /// Returns the classified priority tier.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// Persistent task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    assignee: String,
    due: String,
    priority: Priority,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted display title.
    pub title: String,
    /// Persisted assignee, empty when unassigned.
    pub assignee: String,
    /// Persisted due date string, empty when absent.
    pub due: String,
    /// Persisted priority tier.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task from a draft, minting a fresh identifier and
    /// stamping the creation time from the injected clock.
    #[must_use]
    pub fn new(draft: &TaskDraft, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            assignee: draft.assignee().to_owned(),
            due: draft.due().to_owned(),
            priority: draft.priority(),
            status: TaskStatus::Open,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            assignee: data.assignee,
            due: data.due,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee, empty when unassigned.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the due date string, empty when absent.
    #[must_use]
    pub fn due(&self) -> &str {
        &self.due
    }

    /// Returns the priority tier assigned at creation.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true when the task is outstanding.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }
}
