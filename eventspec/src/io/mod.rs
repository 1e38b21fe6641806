//! I/O helpers for eventspec commands.

pub mod config;
