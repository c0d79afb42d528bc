//! Shared types and predicates for check evaluation.

/// Raised by a check during evaluation.
///
/// `Failed` is the distinguished rule-violation condition, the thing the
/// tool exists to detect. `Error` covers everything else a check can raise:
/// malformed input, a missing precondition, an implementation bug. The two
/// are reported separately so operators can tell a violated rule from a
/// tooling malfunction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckIssue {
    Failed(String),
    Error(String),
}

impl CheckIssue {
    pub fn failed(message: impl Into<String>) -> Self {
        CheckIssue::Failed(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        CheckIssue::Error(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            CheckIssue::Failed(m) | CheckIssue::Error(m) => m,
        }
    }
}

/// Result of a single check evaluation. `Ok(())` is a pass.
pub type CheckResult<T = ()> = std::result::Result<T, CheckIssue>;

/// Minimum trimmed length for a description to count as populated, when the
/// check does not configure its own.
pub const DEFAULT_MIN_DESCRIPTION_LENGTH: usize = 4;

/// Whether a description is populated: non-placeholder and at least
/// `min_length` characters after trimming.
pub fn is_description_populated(description: &str, min_length: usize) -> bool {
    description.trim().len() >= min_length
}

/// Items of `required` missing from `present`, in `required` order.
pub fn missing_from<'a>(required: &'a [String], present: &[String]) -> Vec<&'a str> {
    required
        .iter()
        .filter(|r| !present.contains(r))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
