//! Webhook payload field extraction and the reply envelope.
//!
//! Chat platforms deliver the same logical field under several names
//! depending on the webhook version, so extraction walks an ordered list of
//! accessor paths and takes the first value that is non-empty after
//! trimming.

use serde::Serialize;
use serde_json::Value;

/// Title used when a message-action payload carries no message text.
pub const DEFAULT_MESSAGE_TITLE: &str = "Task from message";

/// Assignee used when a message-action payload carries no user field.
pub const DEFAULT_MESSAGE_USER: &str = "Unknown User";

/// Accessor paths for slash-command text.
const COMMAND_TEXT_PATHS: &[&[&str]] = &[&["text"], &["arguments"]];

/// Accessor paths for the message text of a message action.
const MESSAGE_TEXT_PATHS: &[&[&str]] = &[
    &["message"],
    &["message_text"],
    &["messageObject", "content"],
];

/// Accessor paths for the acting user of a message action.
const MESSAGE_USER_PATHS: &[&[&str]] = &[&["user"], &["user_name"], &["created_by", "name"]];

/// Outbound reply envelope returned to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    text: String,
}

impl Reply {
    /// Wraps reply text in the webhook envelope.
    #[must_use]
    pub const fn new(text: String) -> Self {
        Self { text }
    }

    /// Returns the reply text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Slash-command request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPayload {
    text: String,
}

impl CommandPayload {
    /// Extracts command text from a webhook payload.
    ///
    /// Reads `text` then `arguments`; when neither yields a value the
    /// command text is empty and parses to the empty intent.
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            text: first_non_empty(payload, COMMAND_TEXT_PATHS).unwrap_or_default(),
        }
    }

    /// Returns the extracted command text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Message-action request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageActionPayload {
    message: String,
    user: String,
}

impl MessageActionPayload {
    /// Extracts message text and acting user from a webhook payload.
    ///
    /// Message text is read from `message`, `message_text`, then
    /// `messageObject.content`; the user from `user`, `user_name`, then
    /// `created_by.name`. Fixed fallbacks apply when every path misses.
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            message: first_non_empty(payload, MESSAGE_TEXT_PATHS)
                .unwrap_or_else(|| DEFAULT_MESSAGE_TITLE.to_owned()),
            user: first_non_empty(payload, MESSAGE_USER_PATHS)
                .unwrap_or_else(|| DEFAULT_MESSAGE_USER.to_owned()),
        }
    }

    /// Returns the message text to use as the task title.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the user to record as assignee.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Walks accessor paths in order and returns the first string value that is
/// non-empty after trimming.
fn first_non_empty(payload: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| {
        let mut current = payload;
        for key in *path {
            current = current.get(key)?;
        }
        let text = current.as_str()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_owned())
        }
    })
}
