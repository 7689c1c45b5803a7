//! Taskdesk: chat-driven task tracking backend.
//!
//! This crate implements the core of a task tracker invoked through a chat
//! platform's slash-command and message-action webhooks: free-text commands
//! are parsed into intents, task priority is classified heuristically, tasks
//! are persisted through an abstract store, and outcomes are rendered into
//! the reply text the chat platform displays.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, APIs, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task records, priority classification, aggregation, storage
//! - [`command`]: Command parsing, webhook payload handling, reply rendering

pub mod command;
pub mod task;
