//! JUnit XML renderer.
//!
//! One `<testcase>` per outcome. Failed checks carry a `<failure>` element
//! typed with the check's severity; errored checks carry an `<error>`
//! element, matching how CI systems distinguish assertion failures from
//! harness problems.

use crate::report::{OutcomeKind, Report};

pub fn render(report: &Report) -> String {
    let failures = report
        .outcomes
        .iter()
        .filter(|o| matches!(o.kind, OutcomeKind::Fail(_)))
        .count();
    let errors = report
        .outcomes
        .iter()
        .filter(|o| matches!(o.kind, OutcomeKind::Error(_)))
        .count();

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<testsuites name=\"gatecheck\" tests=\"{}\" failures=\"{failures}\" errors=\"{errors}\">\n",
        report.outcomes.len()
    ));
    out.push_str(&format!(
        "  <testsuite name=\"gatecheck\" tests=\"{}\" failures=\"{failures}\" errors=\"{errors}\">\n",
        report.outcomes.len()
    ));

    for outcome in &report.outcomes {
        out.push_str(&format!(
            "    <testcase classname=\"gatecheck\" name=\"{}\">\n",
            escape_xml(&outcome.run_id)
        ));
        match &outcome.kind {
            OutcomeKind::Pass => {}
            OutcomeKind::Fail(message) => {
                out.push_str(&format!(
                    "      <failure type=\"{}\" message=\"{}\"/>\n",
                    outcome.severity,
                    escape_xml(message)
                ));
            }
            OutcomeKind::Error(message) => {
                out.push_str(&format!(
                    "      <error message=\"{}\"/>\n",
                    escape_xml(message)
                ));
            }
        }
        out.push_str("    </testcase>\n");
    }

    out.push_str("  </testsuite>\n");
    out.push_str("</testsuites>\n");
    out
}

/// Escapes special XML characters in a string.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "junit_tests.rs"]
mod tests;
