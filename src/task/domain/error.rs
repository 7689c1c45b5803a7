//! Error types for parsing persisted task labels.

use thiserror::Error;

/// Error returned while parsing priority labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority label: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing task status labels from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
