//! Per-catalog-source checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Every column observed on a source must be documented in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceColumnsAreAllDocumented {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl SourceColumnsAreAllDocumented {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let catalog_source = binding.catalog_source()?;
        let Some(source) = ctx.manifest.source(&catalog_source.unique_id) else {
            return Ok(());
        };
        let undocumented: Vec<&str> = catalog_source
            .columns
            .iter()
            .filter(|c| {
                !source.columns.iter().any(|doc| {
                    doc.name.eq_ignore_ascii_case(&c.name) && !doc.description.trim().is_empty()
                })
            })
            .map(|c| c.name.as_str())
            .collect();
        if !undocumented.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}.{}` has columns that are not documented: {:?}.",
                source.source_name, source.name, undocumented
            )));
        }
        Ok(())
    }
}
