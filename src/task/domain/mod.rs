//! Domain model for task records and reporting.
//!
//! The task domain models single-shot task creation (identifier, priority
//! classification, creation timestamp) and the pure reductions used for
//! summaries and priority statistics, keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod report;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError};
pub use ids::TaskId;
pub use priority::Priority;
pub use report::{TaskSummary, stats_by_priority, summarize};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskStatus, UNTITLED_TASK_TITLE};
