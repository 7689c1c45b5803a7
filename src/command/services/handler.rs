//! Command orchestration over the task store.

use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

use crate::command::domain::{
    CommandOutcome, CommandPayload, Intent, MessageActionPayload, Reply,
};
use crate::command::services::ReplyRenderer;
use crate::task::{
    domain::{Task, TaskDraft, stats_by_priority, summarize},
    ports::{TaskStore, TaskStoreResult},
};

/// Stateless-per-request command handler.
///
/// Holds the injected store and clock capabilities; nothing is shared
/// between requests beyond the store itself, and store failures surface as
/// fixed reply text rather than errors.
#[derive(Clone)]
pub struct CommandService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> CommandService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new command service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Handles a slash-command webhook payload and returns the reply.
    pub async fn handle_command(&self, payload: &Value) -> Reply {
        let command = CommandPayload::from_value(payload);
        let outcome = self.execute(command.text()).await;
        ReplyRenderer::render(&outcome)
    }

    /// Handles a message-action webhook payload and returns the reply.
    ///
    /// The message text becomes the task title (and drives priority
    /// classification), the resolved user becomes the assignee, and no due
    /// date is recorded.
    pub async fn handle_message_action(&self, payload: &Value) -> Reply {
        let action = MessageActionPayload::from_value(payload);
        let draft = TaskDraft::new(action.message(), action.user(), "");
        let task = Task::new(&draft, &*self.clock);
        let outcome = match self.store.insert(&task).await {
            Ok(()) => CommandOutcome::CreatedFromMessage(task),
            Err(_) => CommandOutcome::MessageCreateFailed,
        };
        ReplyRenderer::render(&outcome)
    }

    /// Executes raw command text and returns the structured outcome.
    pub async fn execute(&self, raw_text: &str) -> CommandOutcome {
        match Intent::parse(raw_text) {
            Intent::Empty => CommandOutcome::Usage,
            Intent::Help => CommandOutcome::HelpGuide,
            Intent::Stats => match self.store.list_all().await {
                Ok(tasks) => CommandOutcome::PriorityStats(stats_by_priority(&tasks)),
                Err(_) => CommandOutcome::StatsUnavailable,
            },
            Intent::Summary => match self.store.list_all().await {
                Ok(tasks) => {
                    CommandOutcome::Summary(summarize(&tasks, self.clock.utc().date_naive()))
                }
                Err(_) => CommandOutcome::SummaryUnavailable,
            },
            Intent::Create(draft) => {
                let task = Task::new(&draft, &*self.clock);
                match self.store.insert(&task).await {
                    Ok(()) => CommandOutcome::Created(task),
                    Err(_) => CommandOutcome::CreateFailed,
                }
            }
        }
    }

    /// Returns the stored task list for the dashboard feed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::TaskStoreError::Read`] when the store
    /// cannot be read; the dashboard route maps that to its own error body.
    pub async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.store.list_all().await
    }
}
