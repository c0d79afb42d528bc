//! TAP (Test Anything Protocol) version 13 renderer.

use crate::report::Report;

pub fn render(report: &Report) -> String {
    let mut lines = vec![
        "TAP version 13".to_string(),
        format!("1..{}", report.outcomes.len()),
    ];
    for (i, outcome) in report.outcomes.iter().enumerate() {
        let status = if outcome.kind.is_pass() { "ok" } else { "not ok" };
        lines.push(format!("{status} {} - {}", i + 1, outcome.run_id));
        if let Some(message) = outcome.kind.message() {
            for line in message.lines() {
                lines.push(format!("  # {line}"));
            }
        }
    }
    lines.join("\n") + "\n"
}

#[cfg(test)]
#[path = "tap_tests.rs"]
mod tests;
