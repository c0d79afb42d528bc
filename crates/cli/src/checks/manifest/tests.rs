//! Per-test checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};

/// Singular tests must declare the specified meta keys.
///
/// Generic tests (declared on a column in a properties file) pass through
/// untouched; the check only constrains hand-written singular tests.
#[derive(Debug, Clone, Deserialize)]
pub struct SingularTestHasMetaKeys {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub keys: Vec<String>,
}

impl SingularTestHasMetaKeys {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let test = binding.test()?;
        if !test.singular {
            return Ok(());
        }
        let missing: Vec<&str> = self
            .keys
            .iter()
            .filter(|k| !test.meta.contains_key(k.as_str()))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(CheckIssue::failed(format!(
                "`{}` does not have all required meta keys, missing: {:?}.",
                test.name, missing
            )));
        }
        Ok(())
    }
}
