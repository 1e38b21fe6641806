//! Deterministic handler selection for an event.

use crate::registry::{HandlerConfig, HandlerEntry};

/// Handlers whose `on` filter applies to `event`, in registry order.
pub fn applicable_handlers<'a>(cfg: &'a HandlerConfig, event: &str) -> Vec<&'a HandlerEntry> {
    cfg.handlers
        .iter()
        .filter(|handler| handler.applies(event))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;
    use crate::test_support::{handler, registry};

    fn names(handlers: Vec<&HandlerEntry>) -> Vec<&str> {
        handlers.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn selects_in_registry_order() {
        let cfg = default_registry();
        assert_eq!(
            names(applicable_handlers(&cfg, "save")),
            vec!["validate_user", "audit", "load_session"]
        );
        assert_eq!(names(applicable_handlers(&cfg, "view")), vec!["load_session"]);
        assert_eq!(
            names(applicable_handlers(&cfg, "delete")),
            vec!["audit", "load_session"]
        );
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let cfg = HandlerConfig::default();
        assert!(applicable_handlers(&cfg, "save").is_empty());
    }

    #[test]
    fn mixed_polarity_handler_matches_literally() {
        let cfg = registry(vec![handler("mixed", &["save", "!delete"])]);
        assert_eq!(names(applicable_handlers(&cfg, "save")), vec!["mixed"]);
        assert!(applicable_handlers(&cfg, "delete").is_empty());
        assert_eq!(names(applicable_handlers(&cfg, "!delete")), vec!["mixed"]);
    }
}
