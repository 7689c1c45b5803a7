//! Unit tests for the command module.
//!
//! Tests cover intent parsing, payload field extraction, outcome rendering,
//! and service orchestration over the in-memory store.
