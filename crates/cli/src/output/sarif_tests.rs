#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::report::{Outcome, Report};

fn outcome(entity: &str, severity: Severity, kind: OutcomeKind) -> Outcome {
    Outcome {
        run_id: format!("check_x:0:{entity}"),
        check_name: "check_x".to_string(),
        index: 0,
        severity,
        entity_ids: vec![entity.to_string()],
        kind,
    }
}

fn rendered() -> serde_json::Value {
    let report = Report::new(
        "t".to_string(),
        vec![
            outcome("a", Severity::Error, OutcomeKind::Pass),
            outcome("b", Severity::Error, OutcomeKind::Fail("broken".to_string())),
            outcome("c", Severity::Warn, OutcomeKind::Fail("meh".to_string())),
            outcome("d", Severity::Warn, OutcomeKind::Error("boom".to_string())),
        ],
    );
    serde_json::from_str(&render(&report).unwrap()).unwrap()
}

#[test]
fn document_shape() {
    let doc = rendered();
    assert_eq!(doc["version"], "2.1.0");
    assert_eq!(doc["runs"][0]["tool"]["driver"]["name"], "gatecheck");
    assert_eq!(doc["runs"][0]["results"].as_array().unwrap().len(), 4);
}

#[test]
fn level_mapping() {
    let doc = rendered();
    let results = doc["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results[0]["level"], "none");
    assert_eq!(results[1]["level"], "error");
    assert_eq!(results[2]["level"], "warning");
    // An errored check is reported at error level whatever its severity.
    assert_eq!(results[3]["level"], "error");
}

#[test]
fn rule_id_is_the_run_id() {
    let doc = rendered();
    assert_eq!(doc["runs"][0]["results"][1]["ruleId"], "check_x:0:b");
}

#[test]
fn messages_carry_the_failure_text() {
    let doc = rendered();
    assert_eq!(doc["runs"][0]["results"][1]["message"]["text"], "broken");
    assert_eq!(doc["runs"][0]["results"][0]["message"]["text"], "Check passed");
}
