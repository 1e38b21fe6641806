//! Test-only helpers for constructing handler registries.

use std::path::{Path, PathBuf};

use crate::io::config::write_config;
use crate::registry::{HandlerConfig, HandlerEntry};

/// Create a handler with the given `on` filter.
pub fn handler(name: &str, on: &[&str]) -> HandlerEntry {
    HandlerEntry {
        name: name.to_string(),
        on: on.iter().map(|event| event.to_string()).collect(),
    }
}

pub fn registry(handlers: Vec<HandlerEntry>) -> HandlerConfig {
    HandlerConfig { handlers }
}

/// Write `cfg` as `eventspec.toml` under `dir` and return the path.
pub fn write_registry(dir: &Path, cfg: &HandlerConfig) -> PathBuf {
    let path = dir.join("eventspec.toml");
    write_config(&path, cfg).expect("write registry");
    path
}
