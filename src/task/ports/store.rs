//! Store port for task persistence and listing.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The command surface only requires atomic single-record insertion and a
/// consistent-read listing; summaries and statistics are derived in the
/// domain from the full list.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Stores a new task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task ID already
    /// exists or [`TaskStoreError::Write`] when persistence fails.
    async fn insert(&self, task: &Task) -> TaskStoreResult<()>;

    /// Returns all stored tasks in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Read`] when the listing cannot be produced.
    async fn list_all(&self) -> TaskStoreResult<Vec<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The store could not be read.
    #[error("task store read failed: {0}")]
    Read(Arc<dyn std::error::Error + Send + Sync>),

    /// The store rejected or failed a write.
    #[error("task store write failed: {0}")]
    Write(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a read-side failure.
    pub fn read(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Read(Arc::new(err))
    }

    /// Wraps a write-side failure.
    pub fn write(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Write(Arc::new(err))
    }
}
