//! Per-semantic-model checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};
use crate::entity::Access;

/// Semantic models may only be built on public models.
#[derive(Debug, Clone, Deserialize)]
pub struct SemanticModelOnNonPublicModels {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl SemanticModelOnNonPublicModels {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let semantic_model = binding.semantic_model()?;
        let non_public: Vec<&str> = semantic_model
            .depends_on_nodes
            .iter()
            .filter_map(|uid| ctx.manifest.model(uid))
            .filter(|m| m.access != Access::Public)
            .map(|m| m.short_name())
            .collect();
        if !non_public.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` is built on non-public models: {:?}.",
                semantic_model.name, non_public
            )));
        }
        Ok(())
    }
}
