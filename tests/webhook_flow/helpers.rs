//! Shared fixtures for webhook flow tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use taskdesk::command::services::CommandService;
use taskdesk::task::adapters::memory::InMemoryTaskStore;
use tokio::runtime::Runtime;

/// Command service wired to a fresh in-memory store.
pub type TestService = CommandService<InMemoryTaskStore, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a command service over a fresh store for each test.
#[fixture]
pub fn service() -> TestService {
    CommandService::new(Arc::new(InMemoryTaskStore::new()), Arc::new(DefaultClock))
}
