//! `run_results.json` parsing.

use std::path::Path;

use serde_json::Value;

use super::ManifestBundle;
use super::{str_field, string_field};
use crate::entity::RunResult;
use crate::error::{Error, Result};

/// Run-results-derived collection.
#[derive(Debug)]
pub struct RunResultsBundle {
    pub results: Vec<RunResult>,
}

pub(super) fn parse_run_results(
    raw: &Value,
    path: &Path,
    manifest: &ManifestBundle,
) -> Result<RunResultsBundle> {
    let entries = raw.get("results").and_then(Value::as_array).ok_or_else(|| {
        Error::artifact("`results` missing, is this a run_results.json?", path)
    })?;

    let mut results = Vec::new();
    for entry in entries {
        let Some(unique_id) = str_field(entry, "unique_id") else {
            return Err(Error::artifact("result entry without `unique_id`", path));
        };
        // Results for nodes outside the project (or from a stale manifest)
        // have no path to filter on; skip them rather than failing the run.
        let Some(node_path) = manifest.node_path(unique_id) else {
            tracing::debug!("skipping run result `{unique_id}`: not in manifest");
            continue;
        };
        results.push(RunResult {
            unique_id: unique_id.to_string(),
            original_file_path: node_path.to_string(),
            status: string_field(entry, "status"),
            execution_time: entry
                .get("execution_time")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            adapter_response: entry
                .get("adapter_response")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        });
    }

    Ok(RunResultsBundle { results })
}
