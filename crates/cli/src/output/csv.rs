//! CSV renderer: one row per outcome.

use crate::report::Report;

pub fn render(report: &Report) -> String {
    let mut out = String::from("check_run_id,outcome,severity,message\n");
    for outcome in &report.outcomes {
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape(&outcome.run_id),
            outcome.kind.label(),
            outcome.severity,
            escape(outcome.kind.message().unwrap_or(""))
        ));
    }
    out
}

/// Quote a field containing a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
