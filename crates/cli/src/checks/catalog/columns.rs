//! Per-catalog-node checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};
use crate::entity::short_name;
use crate::pattern::Pattern;

/// Every column observed in the warehouse must be documented on the model.
///
/// Catalog entries for non-model resources (seeds, snapshots) are skipped;
/// their documentation rules live with their own checks.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnsAreAllDocumented {
    #[serde(flatten)]
    pub common: CheckCommon,
}

impl ColumnsAreAllDocumented {
    pub(crate) fn run(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
        let node = binding.catalog_node()?;
        let Some(model) = ctx.manifest.model(&node.unique_id) else {
            return Ok(());
        };
        let undocumented: Vec<&str> = node
            .columns
            .iter()
            .filter(|c| {
                !model.columns.iter().any(|doc| {
                    doc.name.eq_ignore_ascii_case(&c.name) && !doc.description.trim().is_empty()
                })
            })
            .map(|c| c.name.as_str())
            .collect();
        if !undocumented.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` has columns that are not documented: {:?}.",
                short_name(&node.unique_id),
                undocumented
            )));
        }
        Ok(())
    }
}

/// Columns of the specified types must match the naming pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnNameCompliesToColumnType {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub column_name_pattern: Pattern,
    /// Warehouse column types the pattern applies to (case-insensitive).
    pub types: Vec<String>,
}

impl ColumnNameCompliesToColumnType {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let node = binding.catalog_node()?;
        let noncompliant: Vec<&str> = node
            .columns
            .iter()
            .filter(|c| {
                self.types
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(&c.data_type))
            })
            .filter(|c| !self.column_name_pattern.is_match(&c.name))
            .map(|c| c.name.as_str())
            .collect();
        if !noncompliant.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` has columns that don't comply with the specified pattern (`{}`): {:?}.",
                short_name(&node.unique_id),
                self.column_name_pattern,
                noncompliant
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
