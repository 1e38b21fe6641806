//! Selection helpers for `eventspec select`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::selector::applicable_handlers;
use crate::io::config::load_config;
use crate::registry::HandlerConfig;

/// Structured selection outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Handler names whose filter applies, in registry order.
    Matched(Vec<String>),
    /// No registered handler applies to the event.
    NoneApplicable,
}

/// Select handlers for `event` from an in-memory registry.
pub fn select_handlers(cfg: &HandlerConfig, event: &str) -> SelectOutcome {
    let names: Vec<String> = applicable_handlers(cfg, event)
        .into_iter()
        .map(|handler| handler.name.clone())
        .collect();
    debug!(event, matched = names.len(), "handlers selected");
    if names.is_empty() {
        return SelectOutcome::NoneApplicable;
    }
    SelectOutcome::Matched(names)
}

/// Load the registry from disk and select handlers for `event`.
pub fn select_from_path(path: &Path, event: &str) -> Result<SelectOutcome> {
    let cfg = load_config(path).with_context(|| "load registry for selection")?;
    Ok(select_handlers(&cfg, event))
}
