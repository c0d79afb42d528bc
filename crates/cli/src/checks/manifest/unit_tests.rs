//! Per-unit-test checks.

use serde::Deserialize;

use crate::checks::common::{CheckIssue, CheckResult};
use crate::checks::{Binding, CheckCommon, CheckContext};

const DEFAULT_FORMATS: &[&str] = &["csv", "dict", "sql"];

/// Unit test `expect` blocks may only use permitted fixture formats.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitTestExpectFormat {
    #[serde(flatten)]
    pub common: CheckCommon,
    pub permitted_formats: Option<Vec<String>>,
}

impl UnitTestExpectFormat {
    pub(crate) fn run(&self, binding: &Binding, _ctx: &CheckContext) -> CheckResult {
        let unit_test = binding.unit_test()?;
        let permitted: Vec<&str> = match &self.permitted_formats {
            Some(formats) => formats.iter().map(String::as_str).collect(),
            None => DEFAULT_FORMATS.to_vec(),
        };
        if let Some(format) = &unit_test.expect_format
            && !permitted.contains(&format.as_str())
        {
            return Err(CheckIssue::failed(format!(
                "`{}`'s expect input uses the `{}` format, this is not a permitted format ({:?}).",
                unit_test.name, format, permitted
            )));
        }
        Ok(())
    }
}
