use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::event_spec::{EventSpec, applies};
use crate::core::invariants::validate_invariants;

/// Registered handlers, evaluated in declaration order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HandlerConfig {
    pub handlers: Vec<HandlerEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HandlerEntry {
    pub name: String,
    /// Event filter; empty means the handler runs for every event.
    pub on: Vec<String>,
}

impl HandlerEntry {
    pub fn spec(&self) -> EventSpec {
        EventSpec::new(self.on.iter().map(String::as_str))
    }

    pub fn applies(&self, event: &str) -> bool {
        applies(Some(&self.on[..]), event)
    }
}

impl HandlerConfig {
    pub fn validate(&self) -> Result<()> {
        let errors = validate_invariants(self);
        if errors.is_empty() {
            return Ok(());
        }
        Err(anyhow!("registry invariants failed: {}", errors.join("; ")))
    }

    /// Filter diagnostics for every handler, prefixed by handler name.
    pub fn lint(&self) -> Vec<String> {
        self.handlers
            .iter()
            .flat_map(|handler| {
                handler
                    .spec()
                    .lint()
                    .into_iter()
                    .map(move |warning| format!("{}: {}", handler.name, warning))
            })
            .collect()
    }
}

pub fn default_registry() -> HandlerConfig {
    HandlerConfig {
        handlers: vec![
            HandlerEntry {
                name: "validate_user".to_string(),
                on: vec!["save".to_string(), "update".to_string()],
            },
            HandlerEntry {
                name: "audit".to_string(),
                on: vec!["!view".to_string()],
            },
            HandlerEntry {
                name: "load_session".to_string(),
                on: Vec::new(),
            },
        ],
    }
}
