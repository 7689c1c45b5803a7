//! Port contracts for task persistence.

mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
