//! Deterministic, pure filter logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod collection;
pub mod event_spec;
pub mod invariants;
pub mod selector;
