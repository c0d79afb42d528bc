#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

#[parameterized(
    empty = { "", 4, false },
    whitespace_only = { "   ", 4, false },
    too_short = { "abc", 4, false },
    exactly_min = { "abcd", 4, true },
    trimmed_before_measuring = { "  abc  ", 4, false },
    long_enough = { "A thing.", 5, true },
    stricter_minimum = { "Ok.", 5, false },
)]
fn description_populated(description: &str, min_length: usize, expected: bool) {
    assert_eq!(is_description_populated(description, min_length), expected);
}

#[test]
fn missing_from_keeps_required_order() {
    let required = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let present = vec!["b".to_string()];
    assert_eq!(missing_from(&required, &present), vec!["a", "c"]);
}

#[test]
fn missing_from_empty_when_all_present() {
    let required = vec!["a".to_string()];
    let present = vec!["a".to_string(), "b".to_string()];
    assert!(missing_from(&required, &present).is_empty());
}

#[test]
fn issue_constructors_carry_message() {
    assert_eq!(
        CheckIssue::failed("rule broken"),
        CheckIssue::Failed("rule broken".to_string())
    );
    assert_eq!(
        CheckIssue::error("bad input"),
        CheckIssue::Error("bad input".to_string())
    );
    assert_eq!(CheckIssue::failed("m").message(), "m");
}
