//! Per-run-result checks over `run_results.json`.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};
use crate::entity::short_name;

/// Each result may take at most the permitted execution time.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResultsMaxExecutionTime {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub max_execution_time_seconds: f64,
}

impl RunResultsMaxExecutionTime {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let result = binding.run_result()?;
        if result.execution_time > self.max_execution_time_seconds {
            return Err(CheckIssue::failed(format!(
                "`{}` has an execution time ({:.1}s) greater than the permitted maximum of {}s.",
                short_name(&result.unique_id),
                result.execution_time,
                self.max_execution_time_seconds
            )));
        }
        Ok(())
    }
}

/// Each result may bill at most the permitted number of gigabytes.
///
/// Only the `dbt-bigquery` adapter reports `bytes_billed`; a result without
/// it is a tooling error, not a rule violation.
#[derive(Debug, Clone, Deserialize)]
pub struct RunResultsMaxGigabytesBilled {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub max_gigabytes_billed: f64,
}

impl RunResultsMaxGigabytesBilled {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let result = binding.run_result()?;
        let bytes_billed = result
            .adapter_response
            .get("bytes_billed")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| {
                CheckIssue::error(
                    "`bytes_billed` not found in adapter response. \
                     Are you using the `dbt-bigquery` adapter?",
                )
            })?;
        let gigabytes_billed = bytes_billed / 1_000_000_000.0;
        if gigabytes_billed >= self.max_gigabytes_billed {
            return Err(CheckIssue::failed(format!(
                "`{}` billed {gigabytes_billed} gigabytes, greater than the permitted maximum of {}.",
                short_name(&result.unique_id),
                self.max_gigabytes_billed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "run_results_tests.rs"]
mod tests;
