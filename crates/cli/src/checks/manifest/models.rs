//! Per-model checks.

use serde::Deserialize;

use crate::checks::common::{
    CheckIssue, CheckResult, DEFAULT_MIN_DESCRIPTION_LENGTH, is_description_populated,
    missing_from,
};
use crate::checks::{Binding, CheckCommon, CheckContext};
use crate::entity::Access;
use crate::pattern::Pattern;

/// Models must have the configured access level.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelAccess {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub access: Access,
}

impl ModelAccess {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        if model.access != self.access {
            return Err(CheckIssue::failed(format!(
                "`{}` has `{}` access, it should have access `{}`.",
                model.unique_id,
                model.access,
                self.access
            )));
        }
        Ok(())
    }
}

/// Models must have a populated description.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDescriptionPopulated {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_description_length: Option<usize>,
}

impl ModelDescriptionPopulated {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        let min = self
            .min_description_length
            .unwrap_or(DEFAULT_MIN_DESCRIPTION_LENGTH);
        if !is_description_populated(&model.description, min) {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have a populated description.",
                model.unique_id
            )));
        }
        Ok(())
    }
}

/// Only specified sub-directories are permitted below the `include` prefix.
///
/// `include` doubles as the path filter and the prefix that is stripped
/// before looking at the first remaining directory component, so it is
/// required for this check (enforced at config validation).
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDirectories {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub permitted_sub_directories: Vec<String>,
}

impl ModelDirectories {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        let include = self
            .common
            .include
            .as_ref()
            .ok_or_else(|| CheckIssue::error("`include` is not set"))?;

        let path = &model.original_file_path;
        let end = include.match_end(path).ok_or_else(|| {
            CheckIssue::error(format!("`{path}` does not match the `include` pattern"))
        })?;
        let rest = path.get(end..).unwrap_or("").trim_start_matches('/');
        let directory = rest.split('/').next().unwrap_or("");

        if directory.trim_end_matches(".sql") == model.name {
            // The model file sits directly under the include prefix.
            return Err(CheckIssue::failed(format!(
                "`{}` is not located in a valid sub-directory ({:?}).",
                model.unique_id,
                self.permitted_sub_directories
            )));
        }
        if !self.permitted_sub_directories.iter().any(|d| d == directory) {
            return Err(CheckIssue::failed(format!(
                "`{}` is located in the `{}` sub-directory, this is not a valid sub-directory ({:?}).",
                model.unique_id,
                directory,
                self.permitted_sub_directories
            )));
        }
        Ok(())
    }
}

/// Models must carry all of the specified tags.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelHasTags {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub tags: Vec<String>,
}

impl ModelHasTags {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        let missing = missing_from(&self.tags, &model.tags);
        if !missing.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have all required tags, missing: {:?}.",
                model.unique_id,
                missing
            )));
        }
        Ok(())
    }
}

/// Models may depend on at most the configured number of upstream
/// models/sources/macros.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelMaxUpstreamDependencies {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub max_upstream_models: Option<usize>,
    pub max_upstream_sources: Option<usize>,
    pub max_upstream_macros: Option<usize>,
}

impl ModelMaxUpstreamDependencies {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        let upstream_models = count_prefixed(&model.depends_on_nodes, "model.");
        let upstream_sources = count_prefixed(&model.depends_on_nodes, "source.");
        let upstream_macros = model.depends_on_macros.len();

        let mut over = Vec::new();
        if let Some(max) = self.max_upstream_models
            && upstream_models > max
        {
            over.push(format!("{upstream_models} upstream models (max {max})"));
        }
        if let Some(max) = self.max_upstream_sources
            && upstream_sources > max
        {
            over.push(format!("{upstream_sources} upstream sources (max {max})"));
        }
        if let Some(max) = self.max_upstream_macros
            && upstream_macros > max
        {
            over.push(format!("{upstream_macros} upstream macros (max {max})"));
        }

        if !over.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` has too many upstream dependencies: {}.",
                model.unique_id,
                over.join(", ")
            )));
        }
        Ok(())
    }
}

fn count_prefixed(unique_ids: &[String], prefix: &str) -> usize {
    unique_ids.iter().filter(|id| id.starts_with(prefix)).count()
}

/// Model names must match the supplied pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelNames {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub model_name_pattern: Pattern,
}

impl ModelNames {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let model = binding.model()?;
        if !self.model_name_pattern.is_match(&model.name) {
            return Err(CheckIssue::failed(format!(
                "`{}` does not match the supplied regex `{}`.",
                model.unique_id,
                self.model_name_pattern
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
