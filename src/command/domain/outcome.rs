//! Structured outcomes of executing a command intent.

use crate::task::domain::{Priority, Task, TaskSummary};
use std::collections::BTreeMap;

/// Result of executing a parsed intent against the task store.
///
/// Every variant renders to a fixed reply string; store failures are
/// captured as dedicated variants so the renderer stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Empty input: prompt with the usage hint.
    Usage,
    /// The multi-line command guide.
    HelpGuide,
    /// Priority counts for the stats reply.
    PriorityStats(BTreeMap<Priority, usize>),
    /// Aggregate counts for the summary reply.
    Summary(TaskSummary),
    /// A task was created from slash-command text.
    Created(Task),
    /// A task was created from a message action.
    CreatedFromMessage(Task),
    /// The store could not be read for stats.
    StatsUnavailable,
    /// The store could not be read for the summary.
    SummaryUnavailable,
    /// The store rejected the slash-command creation.
    CreateFailed,
    /// The store rejected the message-action creation.
    MessageCreateFailed,
}
