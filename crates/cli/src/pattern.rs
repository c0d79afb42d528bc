//! Path and name patterns with match-from-start semantics.
//!
//! Config filters (`include`/`exclude`) and pattern parameters are regexes
//! matched from the start of the subject string, the convention the checks
//! follow for dbt paths. Patterns compile once, at config validation time,
//! so a bad regex is a fatal configuration error before any check runs.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// A compiled regex that matches from the start of its subject.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "String")]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(raw: &str) -> Result<Self, regex::Error> {
        let trimmed = raw.trim();
        let regex = RegexBuilder::new(&format!("^(?:{trimmed})"))
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self {
            raw: trimmed.to_string(),
            regex,
        })
    }

    /// True if the pattern matches at the start of `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Byte offset just past the match at the start of `text`, if any.
    pub fn match_end(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end())
    }

    /// The pattern as written in the config (for messages).
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<String> for Pattern {
    type Error = regex::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pattern::new(&value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
