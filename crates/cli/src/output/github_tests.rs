#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::checks::Severity;
use crate::report::{Outcome, OutcomeKind, Report};

fn outcome(entity: &str, kind: OutcomeKind) -> Outcome {
    Outcome {
        run_id: format!("check_x:0:{entity}"),
        check_name: "check_x".to_string(),
        index: 0,
        severity: Severity::Error,
        entity_ids: vec![entity.to_string()],
        kind,
    }
}

#[test]
fn comment_lists_only_problems_sorted() {
    let report = Report::new(
        "t".to_string(),
        vec![
            outcome("b", OutcomeKind::Fail("b broke".to_string())),
            outcome("a", OutcomeKind::Pass),
            outcome("c", OutcomeKind::Error("c boom".to_string())),
        ],
    );
    let markdown = comment_markdown(&report);
    assert!(markdown.starts_with("## **Failed `gatecheck` checks**"));
    assert!(!markdown.contains("check_x:0:a"));
    let b_pos = markdown.find("check_x:0:b").unwrap();
    let c_pos = markdown.find("check_x:0:c").unwrap();
    assert!(b_pos < c_pos);
}

#[test]
fn multiline_messages_are_flattened() {
    let report = Report::new(
        "t".to_string(),
        vec![outcome("b", OutcomeKind::Fail("one\ntwo".to_string()))],
    );
    let markdown = comment_markdown(&report);
    assert!(markdown.contains("| one two |"));
}

#[test]
fn write_comment_file_creates_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(COMMENT_FILE_NAME);
    let report = Report::new(
        "t".to_string(),
        vec![outcome("b", OutcomeKind::Fail("broken".to_string()))],
    );
    write_comment_file(&report, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("check_x:0:b"));
}
