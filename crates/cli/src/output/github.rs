//! GitHub PR comment file.
//!
//! Writes a markdown table of failed checks to a local file; posting it to
//! the PR is the CI workflow's job, not ours.

use std::path::Path;

use crate::error::{Error, Result};
use crate::report::Report;

/// Default name of the comment file, picked up by the CI workflow.
pub const COMMENT_FILE_NAME: &str = "github-comment.md";

pub fn comment_markdown(report: &Report) -> String {
    let mut rows: Vec<(&str, String)> = report
        .problems()
        .map(|o| {
            (
                o.run_id.as_str(),
                o.kind.message().unwrap_or("").replace('\n', " "),
            )
        })
        .collect();
    rows.sort();

    let mut out = String::from("## **Failed `gatecheck` checks**\n\n");
    out.push_str("| Check name | Failure message |\n");
    out.push_str("| --- | --- |\n");
    for (run_id, message) in rows {
        out.push_str(&format!("| {run_id} | {message} |\n"));
    }
    out
}

pub fn write_comment_file(report: &Report, path: &Path) -> Result<()> {
    tracing::info!("writing GitHub comment to `{}`", path.display());
    std::fs::write(path, comment_markdown(report)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "github_tests.rs"]
mod tests;
