//! Per-snapshot checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult, missing_from};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Snapshots must carry all of the specified tags.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotHasTags {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub tags: Vec<String>,
}

impl SnapshotHasTags {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let snapshot = binding.snapshot()?;
        let missing = missing_from(&self.tags, &snapshot.tags);
        if !missing.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have all required tags, missing: {:?}.",
                snapshot.name, missing
            )));
        }
        Ok(())
    }
}
