//! Stable exit codes for eventspec CLI commands.

/// Command succeeded, the event applies, or at least one handler matched.
pub const OK: i32 = 0;
/// Command failed due to an invalid registry, lint findings, or other errors.
pub const INVALID: i32 = 1;
/// The event does not apply, or no registered handler matched it.
pub const NOT_APPLICABLE: i32 = 2;
