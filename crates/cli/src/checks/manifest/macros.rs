//! Per-macro checks.

use std::path::Path;

use serde::Deserialize;

use crate::checks::common::{
    CheckIssue, CheckResult, DEFAULT_MIN_DESCRIPTION_LENGTH, is_description_populated,
};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Macros must have a populated description.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroDescriptionPopulated {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub min_description_length: Option<usize>,
}

impl MacroDescriptionPopulated {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let mac = binding.macro_()?;
        let min = self
            .min_description_length
            .unwrap_or(DEFAULT_MIN_DESCRIPTION_LENGTH);
        if !is_description_populated(&mac.description, min) {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have a populated description.",
                mac.name
            )));
        }
        Ok(())
    }
}

/// Macros must live in a file named after the macro.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroNameMatchesFileName {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl MacroNameMatchesFileName {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let mac = binding.macro_()?;
        let stem = Path::new(&mac.original_file_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        if mac.name != stem {
            return Err(CheckIssue::failed(format!(
                "`{}` is not in a file of the same name (found `{}`).",
                mac.name, mac.original_file_path
            )));
        }
        Ok(())
    }
}

/// Macros may not exceed the permitted number of lines.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroMaxNumberOfLines {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub max_number_of_lines: Option<usize>,
}

impl MacroMaxNumberOfLines {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let mac = binding.macro_()?;
        let lines = mac.macro_sql.lines().count();
        let max = self.max_number_of_lines.unwrap_or(50);
        if lines > max {
            return Err(CheckIssue::failed(format!(
                "`{}` has {lines} lines, more than the permitted maximum of {max}.",
                mac.name
            )));
        }
        Ok(())
    }
}
