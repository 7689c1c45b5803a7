//! Slash-command payload flows.

use crate::webhook_flow::helpers::{TestService, runtime, service};
use rstest::rstest;
use serde_json::json;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn blank_payload_prompts_usage(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    let reply = rt.block_on(service.handle_command(&json!({})));
    assert_eq!(
        reply.text(),
        "⚠️ Please provide task details.\nUsage: /task Title ; assignee:name ; due:YYYY-MM-DD"
    );
}

#[rstest]
fn stats_and_summary_report_empty_store(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");

    let stats = rt.block_on(service.handle_command(&json!({ "text": "stats" })));
    assert_eq!(stats.text(), "📊 No tasks yet.");

    let summary = rt.block_on(service.handle_command(&json!({ "text": "summary" })));
    assert_eq!(summary.text(), "📊 No tasks found yet.");
}

#[rstest]
fn created_task_round_trips_through_the_store(
    runtime: io::Result<Runtime>,
    service: TestService,
) {
    let rt = runtime.expect("runtime creation");
    let payload = json!({ "text": "Fix bug ; assignee:Mani ; due:2025-12-01" });
    let reply = rt.block_on(service.handle_command(&payload));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    let stored = listed.first().expect("one stored task");
    assert_eq!(stored.title(), "Fix bug");
    assert_eq!(stored.assignee(), "Mani");
    assert_eq!(stored.due(), "2025-12-01");
    assert_eq!(stored.priority().as_str(), "High");

    assert_eq!(
        reply.text(),
        format!(
            "✅ *Task Created!*\n🆔 ID: {}\n📝 Fix bug\n👤 Mani\n📅 2025-12-01\n⚡ Priority: High",
            stored.id()
        )
    );
}

#[rstest]
fn arguments_field_works_as_command_text(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    let reply = rt.block_on(service.handle_command(&json!({ "arguments": "help" })));
    assert!(reply.text().starts_with("🧭 *Task Assistant — Help Guide*"));
}

#[rstest]
fn stats_reply_reflects_created_priorities(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service.handle_command(&json!({ "text": "Fix outage" })));
    rt.block_on(service.handle_command(&json!({ "text": "update docs" })));
    rt.block_on(service.handle_command(&json!({ "text": "update changelog" })));

    let reply = rt.block_on(service.handle_command(&json!({ "text": "stats" })));
    assert_eq!(
        reply.text(),
        "📊 *Task Priority Stats* → High: 1 | Medium: 2"
    );
}

#[rstest]
fn summary_counts_overdue_tasks(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service.handle_command(&json!({ "text": "old chore ; due:2000-01-01" })));
    rt.block_on(service.handle_command(&json!({ "text": "future chore ; due:2999-01-01" })));
    rt.block_on(service.handle_command(&json!({ "text": "dateless chore" })));

    let reply = rt.block_on(service.handle_command(&json!({ "text": "summary" })));
    assert_eq!(
        reply.text(),
        "📋 *Task Summary*\n• Total Tasks: 3\n• Open: 3\n• Overdue: 1"
    );
}

#[rstest]
fn distinct_creations_get_distinct_identifiers(
    runtime: io::Result<Runtime>,
    service: TestService,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service.handle_command(&json!({ "text": "same chore" })));
    rt.block_on(service.handle_command(&json!({ "text": "same chore" })));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    assert_eq!(listed.len(), 2);
    let first = listed.first().expect("first task");
    let second = listed.get(1).expect("second task");
    assert_ne!(first.id(), second.id());
}
