//! Per-exposure checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};
use crate::entity::Access;

/// Exposures may only sit on public models.
#[derive(Debug, Clone, Deserialize)]
pub struct ExposureOnNonPublicModels {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl ExposureOnNonPublicModels {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let exposure = binding.exposure()?;
        let non_public: Vec<&str> = exposure
            .depends_on_nodes
            .iter()
            .filter_map(|uid| ctx.manifest.model(uid))
            .filter(|m| m.access != Access::Public)
            .map(|m| m.short_name())
            .collect();
        if !non_public.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` is exposed on non-public models: {:?}.",
                exposure.name, non_public
            )));
        }
        Ok(())
    }
}
