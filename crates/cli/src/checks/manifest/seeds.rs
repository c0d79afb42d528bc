//! Per-seed checks.

use serde::Deserialize;

use crate::checks::common::{
    CheckIssue, CheckResult, DEFAULT_MIN_DESCRIPTION_LENGTH, is_description_populated,
};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Seeds must have a populated description.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDescriptionPopulated {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_description_length: Option<usize>,
}

impl SeedDescriptionPopulated {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let seed = binding.seed()?;
        let min = self
            .min_description_length
            .unwrap_or(DEFAULT_MIN_DESCRIPTION_LENGTH);
        if !is_description_populated(&seed.description, min) {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have a populated description.",
                seed.name
            )));
        }
        Ok(())
    }
}
