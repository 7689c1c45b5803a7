//! Free-text command parser.

use crate::task::domain::TaskDraft;

/// Case-insensitive prefix marking an assignee field token.
const ASSIGNEE_PREFIX: &str = "assignee:";

/// Case-insensitive prefix marking a due-date field token.
const DUE_PREFIX: &str = "due:";

/// The classified meaning of a raw command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Raw text was empty or whitespace-only.
    Empty,
    /// Trimmed text equals `help` case-insensitively.
    Help,
    /// Trimmed text equals `stats` case-insensitively.
    Stats,
    /// Trimmed text equals `summary` case-insensitively.
    Summary,
    /// Any other text: create a task from the parsed fields.
    Create(TaskDraft),
}

impl Intent {
    /// Parses raw command text into an intent.
    ///
    /// Parsing never fails: malformed input degrades to defaults and
    /// empty-string sentinels rather than being rejected.
    #[must_use]
    pub fn parse(raw_text: &str) -> Self {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.to_lowercase().as_str() {
            "help" => Self::Help,
            "stats" => Self::Stats,
            "summary" => Self::Summary,
            _ => Self::Create(parse_draft(trimmed)),
        }
    }
}

/// Parses `Title ; assignee:name ; due:YYYY-MM-DD` creation text.
///
/// Segments are split on `;`, trimmed, and empty segments discarded. The
/// first token is the title; later tokens are matched by case-insensitive
/// prefix, with unrecognised tokens silently ignored and later duplicates
/// overwriting earlier values.
fn parse_draft(text: &str) -> TaskDraft {
    let mut tokens = text
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty());

    let title = tokens.next().unwrap_or_default();
    let mut assignee = String::new();
    let mut due = String::new();

    for token in tokens {
        let lowered = token.to_lowercase();
        if lowered.starts_with(ASSIGNEE_PREFIX) {
            assignee = field_value(token);
        } else if lowered.starts_with(DUE_PREFIX) {
            due = field_value(token);
        }
    }

    TaskDraft::new(title, assignee, due)
}

/// Returns the trimmed text after the first `:` in a field token.
///
/// A token with nothing after the colon yields the empty string, and a
/// token with no colon at all is treated as an empty field rather than an
/// error.
fn field_value(token: &str) -> String {
    token
        .split_once(':')
        .map(|(_, value)| value.trim().to_owned())
        .unwrap_or_default()
}
