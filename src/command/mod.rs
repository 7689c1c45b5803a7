//! Command surface for slash-command and message-action webhooks.
//!
//! Raw command text is parsed into an [`domain::Intent`], executed against
//! the task store by [`services::CommandService`], and the outcome is
//! rendered into fixed reply text by [`services::ReplyRenderer`]. Each
//! request is a single independent transformation; no conversation state is
//! retained between calls.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
