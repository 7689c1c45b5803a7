//! Message-action payload flows and the dashboard feed.

use crate::webhook_flow::helpers::{TestService, runtime, service};
use rstest::rstest;
use serde_json::json;
use std::io;
use tokio::runtime::Runtime;

#[rstest]
fn message_action_creates_task_for_the_user(
    runtime: io::Result<Runtime>,
    service: TestService,
) {
    let rt = runtime.expect("runtime creation");
    let payload = json!({
        "message": "Fix the checkout error",
        "user": "Mani",
    });
    let reply = rt.block_on(service.handle_message_action(&payload));
    assert!(reply.text().starts_with("✅ *Task Created from Message!*"));
    assert!(reply.text().contains("📝 Fix the checkout error"));
    assert!(reply.text().contains("🧑‍💻 Created by: Mani"));
    assert!(reply.text().contains("⚡ Priority: High"));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    let stored = listed.first().expect("one stored task");
    assert_eq!(stored.assignee(), "Mani");
    assert_eq!(stored.due(), "");
}

#[rstest]
fn nested_payload_fields_resolve(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    let payload = json!({
        "messageObject": { "content": "review the release notes" },
        "created_by": { "name": "alice" },
    });
    rt.block_on(service.handle_message_action(&payload));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    let stored = listed.first().expect("one stored task");
    assert_eq!(stored.title(), "review the release notes");
    assert_eq!(stored.assignee(), "alice");
    assert_eq!(stored.priority().as_str(), "Medium");
}

#[rstest]
fn bare_payload_uses_fixed_fallbacks(runtime: io::Result<Runtime>, service: TestService) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service.handle_message_action(&json!({})));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    let stored = listed.first().expect("one stored task");
    assert_eq!(stored.title(), "Task from message");
    assert_eq!(stored.assignee(), "Unknown User");
    assert_eq!(stored.priority().as_str(), "Low");
}

#[rstest]
fn dashboard_feed_serialises_grouping_fields(
    runtime: io::Result<Runtime>,
    service: TestService,
) {
    let rt = runtime.expect("runtime creation");
    rt.block_on(service.handle_command(&json!({ "text": "Fix bug ; assignee:Mani" })));

    let listed = rt.block_on(service.list_tasks()).expect("listing succeeds");
    let feed = serde_json::to_value(&listed).expect("feed serialises");
    let entry = feed.get(0).expect("one feed entry");
    assert_eq!(entry.get("title"), Some(&json!("Fix bug")));
    assert_eq!(entry.get("assignee"), Some(&json!("Mani")));
    assert_eq!(entry.get("priority"), Some(&json!("High")));
    assert_eq!(entry.get("status"), Some(&json!("open")));
}
