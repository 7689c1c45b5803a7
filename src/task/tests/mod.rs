//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain types and classification,
//! aggregation reductions, and the in-memory store adapter.
