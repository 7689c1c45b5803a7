//! Priority tiers and the keyword-based title classifier.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title substrings that classify a task as high priority.
const HIGH_SIGNALS: [&str; 5] = ["urgent", "fix", "error", "issue", "critical"];

/// Title substrings that classify a task as medium priority.
const MEDIUM_SIGNALS: [&str; 4] = ["update", "review", "add", "design"];

/// Priority tier heuristically derived from task title keywords.
///
/// Variant order doubles as render order for priority statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Title signals urgent or defect-related work.
    High,
    /// Title signals routine change or review work.
    Medium,
    /// No recognised signal in the title.
    Low,
}

impl Priority {
    /// Classifies a task title into a priority tier.
    ///
    /// High-signal keywords take precedence over medium-signal keywords.
    /// Matching is case-insensitive substring containment, not whole-word:
    /// "Addressed feedback" matches "add". Any input classifies; an empty
    /// title is [`Priority::Low`].
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let lowered = title.to_lowercase();
        if HIGH_SIGNALS.iter().any(|signal| lowered.contains(signal)) {
            Self::High
        } else if MEDIUM_SIGNALS.iter().any(|signal| lowered.contains(signal)) {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the canonical display and storage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
