//! Handler registry stored as TOML (default `eventspec.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::registry::HandlerConfig;

/// Default registry file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "eventspec.toml";

/// Load the registry from a TOML file.
///
/// If the file is missing, returns an empty registry.
pub fn load_config(path: &Path) -> Result<HandlerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "registry missing; using empty registry");
        return Ok(HandlerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HandlerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), handlers = cfg.handlers.len(), "registry loaded");
    Ok(cfg)
}

/// Atomically write the registry to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &HandlerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize registry toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp registry {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace registry {}", path.display()))?;
    Ok(())
}
