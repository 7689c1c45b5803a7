//! Pure reductions over the stored task list.

use super::{Priority, Task};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts for the `/task summary` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    /// Count of all stored tasks.
    pub total: usize,
    /// Count of tasks with open status.
    pub open: usize,
    /// Count of tasks whose due date string sorts before today.
    pub overdue: usize,
}

/// Computes total, open, and overdue counts over the full task list.
///
/// Overdue detection compares the due string lexicographically against
/// `today` formatted as `YYYY-MM-DD`, exactly as the tasks were captured:
/// well-formed ISO dates order correctly, malformed values order
/// deterministically but meaninglessly. This is a deliberate simplification,
/// not calendar arithmetic.
#[must_use]
pub fn summarize(tasks: &[Task], today: NaiveDate) -> TaskSummary {
    let today_iso = today.format("%Y-%m-%d").to_string();
    TaskSummary {
        total: tasks.len(),
        open: tasks.iter().filter(|task| task.is_open()).count(),
        overdue: tasks
            .iter()
            .filter(|task| !task.due().is_empty() && task.due() < today_iso.as_str())
            .count(),
    }
}

/// Counts stored tasks per priority tier.
///
/// Tiers with no tasks are absent from the result; an empty task list yields
/// an empty map. Map iteration follows [`Priority`] order, which fixes the
/// render order of the stats reply.
#[must_use]
pub fn stats_by_priority(tasks: &[Task]) -> BTreeMap<Priority, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.priority()).or_insert(0) += 1;
    }
    counts
}
