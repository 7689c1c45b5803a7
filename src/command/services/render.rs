//! Rendering of command outcomes into reply text.
//!
//! Single-line replies are fixed strings; multi-field blocks go through
//! minijinja templates. Rendering is total: a template failure falls back to
//! a fixed internal-error reply instead of propagating, so the webhook
//! always receives a text body.

use minijinja::Environment;
use serde_json::json;

use crate::command::domain::{CommandOutcome, Reply};
use crate::task::domain::{Priority, Task, TaskSummary};
use std::collections::BTreeMap;

const USAGE_REPLY: &str =
    "⚠️ Please provide task details.\nUsage: /task Title ; assignee:name ; due:YYYY-MM-DD";

const HELP_REPLY: &str = "🧭 *Task Assistant — Help Guide*\n\
    Here’s everything you can do:\n\n\
    • `/task Title ; assignee:name ; due:YYYY-MM-DD` → Create a new task\n\
    • `/task stats` → See task distribution by priority\n\
    • `/task summary` → Get total, open, and overdue counts\n\
    • Right-click message → Create Task\n\
    • Dashboard → Manage visually\n\n\
    💡 *Example:*\n\
    `/task Fix payment bug ; assignee:Mani ; due:2025-12-01`";

const STATS_EMPTY_REPLY: &str = "📊 No tasks yet.";
const SUMMARY_EMPTY_REPLY: &str = "📊 No tasks found yet.";

const STATS_ERROR_REPLY: &str = "⚠️ Error fetching task stats.";
const SUMMARY_ERROR_REPLY: &str = "⚠️ Error reading task summary.";
const CREATE_ERROR_REPLY: &str = "⚠️ Error creating task.";
const MESSAGE_CREATE_ERROR_REPLY: &str = "⚠️ Could not create task from message.";
const INTERNAL_ERROR_REPLY: &str = "⚠️ Internal error occurred.";

const STATS_TEMPLATE: &str = "📊 *Task Priority Stats* → {{ rows }}";

const SUMMARY_TEMPLATE: &str = "📋 *Task Summary*\n\
    • Total Tasks: {{ total }}\n\
    • Open: {{ open }}\n\
    • Overdue: {{ overdue }}";

const CREATED_TEMPLATE: &str = "✅ *Task Created!*\n\
    🆔 ID: {{ id }}\n\
    📝 {{ title }}\n\
    👤 {% if assignee %}{{ assignee }}{% else %}—{% endif %}\n\
    📅 {% if due %}{{ due }}{% else %}—{% endif %}\n\
    ⚡ Priority: {{ priority }}";

const MESSAGE_CREATED_TEMPLATE: &str = "✅ *Task Created from Message!*\n\
    📝 {{ title }}\n\
    🧑‍💻 Created by: {{ user }}\n\
    🕒 {{ created_at }}\n\
    ⚡ Priority: {{ priority }}";

/// Timestamp format shown in message-action confirmations.
const MESSAGE_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %I:%M:%S %p";

/// Renders command outcomes into the webhook reply envelope.
pub struct ReplyRenderer;

impl ReplyRenderer {
    /// Renders an outcome into reply text.
    #[must_use]
    pub fn render(outcome: &CommandOutcome) -> Reply {
        let text = match outcome {
            CommandOutcome::Usage => USAGE_REPLY.to_owned(),
            CommandOutcome::HelpGuide => HELP_REPLY.to_owned(),
            CommandOutcome::PriorityStats(stats) if stats.is_empty() => {
                STATS_EMPTY_REPLY.to_owned()
            }
            CommandOutcome::PriorityStats(stats) => render_stats(stats),
            CommandOutcome::Summary(summary) if summary.total == 0 => {
                SUMMARY_EMPTY_REPLY.to_owned()
            }
            CommandOutcome::Summary(summary) => render_summary(summary),
            CommandOutcome::Created(task) => render_created(task),
            CommandOutcome::CreatedFromMessage(task) => render_created_from_message(task),
            CommandOutcome::StatsUnavailable => STATS_ERROR_REPLY.to_owned(),
            CommandOutcome::SummaryUnavailable => SUMMARY_ERROR_REPLY.to_owned(),
            CommandOutcome::CreateFailed => CREATE_ERROR_REPLY.to_owned(),
            CommandOutcome::MessageCreateFailed => MESSAGE_CREATE_ERROR_REPLY.to_owned(),
        };
        Reply::new(text)
    }
}

fn render_stats(stats: &BTreeMap<Priority, usize>) -> String {
    let rows = stats
        .iter()
        .map(|(priority, count)| format!("{}: {count}", priority.as_str()))
        .collect::<Vec<_>>()
        .join(" | ");
    render_template(STATS_TEMPLATE, json!({ "rows": rows }))
}

fn render_summary(summary: &TaskSummary) -> String {
    render_template(SUMMARY_TEMPLATE, json!(summary))
}

fn render_created(task: &Task) -> String {
    render_template(
        CREATED_TEMPLATE,
        json!({
            "id": task.id().to_string(),
            "title": task.title(),
            "assignee": task.assignee(),
            "due": task.due(),
            "priority": task.priority().as_str(),
        }),
    )
}

fn render_created_from_message(task: &Task) -> String {
    render_template(
        MESSAGE_CREATED_TEMPLATE,
        json!({
            "title": task.title(),
            "user": task.assignee(),
            "created_at": task.created_at().format(MESSAGE_TIMESTAMP_FORMAT).to_string(),
            "priority": task.priority().as_str(),
        }),
    )
}

fn render_template(template: &str, context: serde_json::Value) -> String {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .unwrap_or_else(|_| INTERNAL_ERROR_REPLY.to_owned())
}
