//! Report assembly: ordered outcomes, summary counts, run status.

use std::collections::HashSet;

use serde::Serialize;

use crate::checks::Severity;

/// Terminal state of one executed check instance.
///
/// `Fail` is a rule violation (the condition the tool detects); `Error` is
/// a tooling malfunction (malformed input, an implementation bug) and is
/// reported distinctly so operators can tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "lowercase")]
pub enum OutcomeKind {
    Pass,
    Fail(String),
    Error(String),
}

impl OutcomeKind {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Pass => "pass",
            OutcomeKind::Fail(_) => "fail",
            OutcomeKind::Error(_) => "error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            OutcomeKind::Pass => None,
            OutcomeKind::Fail(m) | OutcomeKind::Error(m) => Some(m),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, OutcomeKind::Pass)
    }
}

/// Result of one executed check instance, immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    #[serde(rename = "check_run_id")]
    pub run_id: String,
    pub check_name: String,
    pub index: usize,
    pub severity: Severity,
    /// Unique ids of the bound entities (empty for a whole-collection check
    /// that matched no entities).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entity_ids: Vec<String>,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

/// Summary counts, partitioned by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed_error: usize,
    pub failed_warn: usize,
    pub errored: usize,
}

/// The finished run report consumed by renderers and the exit-code
/// decision.
#[derive(Debug, Serialize)]
pub struct Report {
    pub timestamp: String,
    pub success: bool,
    pub summary: Summary,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Assemble outcomes, preserving resolution order.
    ///
    /// A repeated (check name, index, entity ids) triple keeps only its
    /// first occurrence; deterministic resolution should never produce one,
    /// so a duplicate is logged as a likely resolver bug.
    pub fn new(timestamp: String, outcomes: Vec<Outcome>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let key = (
                outcome.check_name.clone(),
                outcome.index,
                outcome.entity_ids.clone(),
            );
            if !seen.insert(key) {
                tracing::warn!("duplicate outcome for `{}` dropped", outcome.run_id);
                continue;
            }
            kept.push(outcome);
        }

        let mut summary = Summary {
            total: kept.len(),
            ..Summary::default()
        };
        for outcome in &kept {
            match (&outcome.kind, outcome.severity) {
                (OutcomeKind::Pass, _) => summary.passed += 1,
                (OutcomeKind::Fail(_), Severity::Error) => summary.failed_error += 1,
                (OutcomeKind::Fail(_), Severity::Warn) => summary.failed_warn += 1,
                (OutcomeKind::Error(_), _) => summary.errored += 1,
            }
        }

        // An errored check fails the run regardless of configured severity:
        // a malfunctioning check proves nothing about the rule it guards.
        let success = summary.failed_error == 0 && summary.errored == 0;

        Report {
            timestamp,
            success,
            summary,
            outcomes: kept,
        }
    }

    /// Outcomes that did not pass, in report order.
    pub fn problems(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.kind.is_pass())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
