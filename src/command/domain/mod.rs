//! Domain model for command parsing and webhook payloads.

mod intent;
mod outcome;
mod payload;

pub use intent::Intent;
pub use outcome::CommandOutcome;
pub use payload::{
    CommandPayload, DEFAULT_MESSAGE_TITLE, DEFAULT_MESSAGE_USER, MessageActionPayload, Reply,
};
