//! Per-source checks.

use serde::Deserialize;

use crate::checks::common::{
    CheckIssue, CheckResult, DEFAULT_MIN_DESCRIPTION_LENGTH, is_description_populated,
    missing_from,
};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Sources must have a populated description.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDescriptionPopulated {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_description_length: Option<usize>,
}

impl SourceDescriptionPopulated {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let source = binding.source()?;
        let min = self
            .min_description_length
            .unwrap_or(DEFAULT_MIN_DESCRIPTION_LENGTH);
        if !is_description_populated(&source.description, min) {
            return Err(CheckIssue::failed(format!(
                "`{}.{}` does not have a populated description.",
                source.source_name, source.name
            )));
        }
        Ok(())
    }
}

/// Sources must carry all of the specified tags.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceHasTags {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub tags: Vec<String>,
}

impl SourceHasTags {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let source = binding.source()?;
        let missing = missing_from(&self.tags, &source.tags);
        if !missing.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}.{}` does not have all required tags, missing: {:?}.",
                source.source_name, source.name, missing
            )));
        }
        Ok(())
    }
}

/// Every source must be referenced by at least one model.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceNotOrphaned {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl SourceNotOrphaned {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let source = binding.source()?;
        let referenced = ctx
            .manifest
            .models
            .iter()
            .any(|m| m.depends_on_nodes.contains(&source.unique_id));
        if !referenced {
            return Err(CheckIssue::failed(format!(
                "`{}.{}` is not referenced by any model.",
                source.source_name, source.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
