//! Structural checks on a handler registry.

use std::collections::HashSet;

use crate::registry::HandlerConfig;

/// Check registry invariants:
/// - Handler names are non-blank
/// - Handler names are unique
pub fn validate_invariants(cfg: &HandlerConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, handler) in cfg.handlers.iter().enumerate() {
        if handler.name.trim().is_empty() {
            errors.push(format!("handlers[{}]: name must be non-empty", index));
            continue;
        }
        if !seen.insert(handler.name.as_str()) {
            errors.push(format!(
                "duplicate handler '{}' at handlers[{}]",
                handler.name, index
            ));
        }
    }
    errors
}
