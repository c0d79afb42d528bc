#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::checks::Severity;
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

fn sample_report() -> Report {
    Report::new(
        "t".to_string(),
        vec![
            outcome("a", Severity::Error, OutcomeKind::Pass),
            outcome(
                "b",
                Severity::Warn,
                OutcomeKind::Fail("b is <broken> & \"bad\"".to_string()),
            ),
            outcome("c", Severity::Error, OutcomeKind::Error("boom".to_string())),
        ],
    )
}

#[test]
fn starts_with_xml_declaration() {
    let xml = render(&sample_report());
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
}

#[test]
fn counts_tests_failures_and_errors() {
    let xml = render(&sample_report());
    assert!(xml.contains("tests=\"3\" failures=\"1\" errors=\"1\""));
}

#[test]
fn one_testcase_per_outcome() {
    let xml = render(&sample_report());
    assert_eq!(xml.matches("<testcase").count(), 3);
    assert!(xml.contains("name=\"check_x:0:a\""));
}

#[test]
fn failure_element_carries_severity_type() {
    let xml = render(&sample_report());
    assert!(xml.contains("<failure type=\"warn\""));
}

#[test]
fn errored_outcome_uses_error_element() {
    let xml = render(&sample_report());
    assert!(xml.contains("<error message=\"boom\"/>"));
}

#[test]
fn escapes_xml_special_chars() {
    let xml = render(&sample_report());
    assert!(xml.contains("b is &lt;broken&gt; &amp; &quot;bad&quot;"));
}

#[test]
fn escape_xml_handles_all_special_chars() {
    assert_eq!(escape_xml("&"), "&amp;");
    assert_eq!(escape_xml("<"), "&lt;");
    assert_eq!(escape_xml(">"), "&gt;");
    assert_eq!(escape_xml("\""), "&quot;");
    assert_eq!(escape_xml("'"), "&apos;");
    assert_eq!(escape_xml("plain"), "plain");
}
