//! Event-name filters for named-event dispatch.
//!
//! A filter is an `on`-style list such as `["save", "update"]` (allow-list)
//! or `["!view"]` (deny-list). The crate is split the usual way:
//!
//! - **[`core`]**: Pure helpers (`contains`, `is_empty`, `applies`), the
//!   [`core::event_spec::EventSpec`] type, and handler selection. No I/O.
//! - **[`io`]**: Loading and writing the TOML handler registry.
//!
//! [`select`] ties the two together for the `eventspec select` command.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod registry;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
