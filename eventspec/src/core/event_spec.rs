//! Event-name filters in the `on = [...]` style.
//!
//! A filter is a list of event names. When the first entry starts with `!`,
//! the whole list is a deny-list of `!`-prefixed names. Otherwise it is an
//! allow-list. Later entries never change the polarity and are matched
//! literally.

use std::fmt;

use crate::core::collection::{contains, is_empty};

/// Prefix that marks an excluded event name.
pub const NEGATION: char = '!';

/// Whether a filter allows the listed events or denies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Polarity of a single entry. An empty entry is positive.
    pub fn of(entry: &str) -> Self {
        if entry.starts_with(NEGATION) {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }
}

/// True if `event` passes the filter `events`.
///
/// - Absent or zero-length filters apply to every event.
/// - Positive filters apply iff `event` is listed verbatim.
/// - Negative filters apply iff `!event` is not listed.
///
/// An empty first entry makes the filter positive, so `[""]` only applies
/// to the empty event name.
pub fn applies<S: AsRef<str>>(events: Option<&[S]>, event: &str) -> bool {
    let Some(events) = events else {
        return true;
    };
    let Some(first) = events.first() else {
        return true;
    };

    let names: Vec<&str> = events.iter().map(AsRef::as_ref).collect();
    match Polarity::of(first.as_ref()) {
        Polarity::Positive => contains(Some(&names[..]), &event),
        Polarity::Negative => {
            let negated = format!("{NEGATION}{event}");
            !contains(Some(&names[..]), &negated.as_str())
        }
    }
}

/// Owned event filter, e.g. the `on` list of a registered handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSpec {
    entries: Vec<String>,
}

impl EventSpec {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma-separated attribute such as `"save, !delete"`.
    ///
    /// Tokens are trimmed; empty tokens are dropped.
    pub fn parse(attr: &str) -> Self {
        Self::new(
            attr.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty()),
        )
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_unrestricted(&self) -> bool {
        self.entries.is_empty()
    }

    /// Polarity decided by the first entry. Empty filters are positive.
    pub fn polarity(&self) -> Polarity {
        self.entries
            .first()
            .map_or(Polarity::Positive, |first| Polarity::of(first))
    }

    pub fn applies(&self, event: &str) -> bool {
        applies(Some(&self.entries[..]), event)
    }

    /// Diagnostics for filters whose behavior is easy to misread.
    ///
    /// Linting never changes how the filter is evaluated.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let Some(first) = self.entries.first() else {
            return warnings;
        };

        let values: Vec<Option<&str>> = self.entries.iter().map(|e| Some(e.as_str())).collect();
        if is_empty(Some(&values[..])) {
            warnings.push(format!(
                "all entries blank: filter only applies to the empty event name ({})",
                self
            ));
            return warnings;
        }

        if first.is_empty() {
            warnings.push("empty leading entry: filter treated as an allow-list".to_string());
        }

        let polarity = self.polarity();
        for entry in &self.entries[1..] {
            if Polarity::of(entry) != polarity {
                warnings.push(format!(
                    "mixed polarity: entry '{}' is matched literally in a {} filter",
                    entry,
                    match polarity {
                        Polarity::Positive => "positive",
                        Polarity::Negative => "negative",
                    }
                ));
            }
        }

        for entry in &self.entries {
            if entry.len() == 1 && entry.starts_with(NEGATION) {
                warnings.push(format!(
                    "bare '{NEGATION}' entry only matches the empty event name"
                ));
            }
        }

        warnings
    }
}

impl fmt::Display for EventSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(","))
    }
}
