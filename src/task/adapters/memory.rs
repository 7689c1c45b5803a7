//! In-memory task store for tests and development.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order, which [`TaskStore::list_all`] exposes
/// directly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut tasks = self
            .tasks
            .write()
            .map_err(|err| TaskStoreError::write(std::io::Error::other(err.to_string())))?;
        if tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn list_all(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .map_err(|err| TaskStoreError::read(std::io::Error::other(err.to_string())))?;
        Ok(tasks.clone())
    }
}
