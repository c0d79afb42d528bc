//! SARIF (Static Analysis Results Interchange Format) 2.1.0 renderer.

use serde::Serialize;

use crate::checks::Severity;
use crate::report::{OutcomeKind, Report};

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const INFO_URI: &str = "https://github.com/alfredjeanlab/gatecheck";

#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: &'static str,
    version: &'static str,
    information_uri: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: SarifLevel,
    message: SarifMessage,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum SarifLevel {
    Error,
    Warning,
    None,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

pub fn render(report: &Report) -> serde_json::Result<String> {
    let results = report
        .outcomes
        .iter()
        .map(|outcome| {
            let (level, text) = match (&outcome.kind, outcome.severity) {
                (OutcomeKind::Pass, _) => (SarifLevel::None, "Check passed".to_string()),
                (OutcomeKind::Fail(m), Severity::Error) => (SarifLevel::Error, m.clone()),
                (OutcomeKind::Fail(m), Severity::Warn) => (SarifLevel::Warning, m.clone()),
                (OutcomeKind::Error(m), _) => (SarifLevel::Error, m.clone()),
            };
            SarifResult {
                rule_id: outcome.run_id.clone(),
                level,
                message: SarifMessage { text },
            }
        })
        .collect();

    let doc = SarifReport {
        schema: SARIF_SCHEMA,
        version: SARIF_VERSION,
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "gatecheck",
                    version: env!("CARGO_PKG_VERSION"),
                    information_uri: INFO_URI,
                },
            },
            results,
        }],
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
