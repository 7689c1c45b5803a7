//! Task records, priority classification, aggregation, and storage.
//!
//! A task is created once from command text or a message action and never
//! edited afterwards; summaries and priority statistics are pure reductions
//! over the stored task list. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
