//! Whole-collection checks over the model list.

use serde::Deserialize;

use crate::checks::common::{
    CheckIssue, CheckResult, DEFAULT_MIN_DESCRIPTION_LENGTH, is_description_populated,
};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Models may only live in the permitted top-level directories.
#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelDirectories {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub permitted_directories: Vec<String>,
}

impl TopLevelDirectories {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let models = binding.models()?;
        let mut offenders = Vec::new();
        for model in models {
            let top = model.original_file_path.split('/').next().unwrap_or("");
            if !self.permitted_directories.iter().any(|d| d == top) {
                offenders.push(format!(
                    "`{}` is located in `{}`, this is not a valid top-level directory.",
                    model.unique_id, top
                ));
            }
        }
        if !offenders.is_empty() {
            return Err(CheckIssue::Failed(offenders.join(" ")));
        }
        Ok(())
    }
}

/// A minimum share of models must have a populated description.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDocumentationCoverage {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_model_documentation_coverage_pct: Option<f64>,
}

impl ModelDocumentationCoverage {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let models = binding.models()?;
        if models.is_empty() {
            return Ok(());
        }
        let documented = models
            .iter()
            .filter(|m| is_description_populated(&m.description, DEFAULT_MIN_DESCRIPTION_LENGTH))
            .count();
        let pct = documented as f64 / models.len() as f64 * 100.0;
        let min = self.min_model_documentation_coverage_pct.unwrap_or(100.0);
        if pct < min {
            return Err(CheckIssue::failed(format!(
                "Only {pct:.1}% of models have a populated description, less than the permitted minimum of {min}%."
            )));
        }
        Ok(())
    }
}

/// A minimum share of models must have at least one test attached.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTestCoverage {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_model_test_coverage_pct: Option<f64>,
}

impl ModelTestCoverage {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let models = binding.models()?;
        if models.is_empty() {
            return Ok(());
        }
        let tested = models
            .iter()
            .filter(|m| {
                ctx.manifest
                    .tests
                    .iter()
                    .any(|t| t.attached_node.as_deref() == Some(m.unique_id.as_str()))
            })
            .count();
        let pct = tested as f64 / models.len() as f64 * 100.0;
        let min = self.min_model_test_coverage_pct.unwrap_or(100.0);
        if pct < min {
            return Err(CheckIssue::failed(format!(
                "Only {pct:.1}% of models have at least one test, less than the permitted minimum of {min}%."
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
