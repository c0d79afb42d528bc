//! Configuration loading and validation.
//!
//! The config file is YAML by default (`gatecheck.yml`); a `.toml` file with
//! the same schema is accepted too. Parsing is atomic and fail-fast: any
//! invalid entry aborts startup before a single check runs, with the group
//! and position of the offending entry in the message.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::checks::{COMMON_FIELDS, CheckConfig, CheckGroup, Severity, spec_for};
use crate::error::{Error, Result};
use crate::pattern::Pattern;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gatecheck.yml";

/// Default artifacts directory, relative to the config file.
pub const DEFAULT_ARTIFACTS_DIR: &str = "./target";

const TOP_LEVEL_KEYS: &[&str] = &[
    "dbt_artifacts_dir",
    "include",
    "exclude",
    "severity",
    "manifest_checks",
    "catalog_checks",
    "run_results_checks",
];

/// Validated run configuration: the three check groups plus run settings.
#[derive(Debug)]
pub struct Config {
    pub dbt_artifacts_dir: PathBuf,
    pub manifest_checks: Vec<CheckConfig>,
    pub catalog_checks: Vec<CheckConfig>,
    pub run_results_checks: Vec<CheckConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dbt_artifacts_dir: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            manifest_checks: Vec::new(),
            catalog_checks: Vec::new(),
            run_results_checks: Vec::new(),
        }
    }
}

impl Config {
    /// All configured checks in resolution order: manifest, catalog,
    /// run-results, each group in load order.
    pub fn all_checks(&self) -> impl Iterator<Item = &CheckConfig> {
        self.manifest_checks
            .iter()
            .chain(self.catalog_checks.iter())
            .chain(self.run_results_checks.iter())
    }

    fn all_checks_mut(&mut self) -> impl Iterator<Item = &mut CheckConfig> {
        self.manifest_checks
            .iter_mut()
            .chain(self.catalog_checks.iter_mut())
            .chain(self.run_results_checks.iter_mut())
    }

    pub fn total_checks(&self) -> usize {
        self.manifest_checks.len() + self.catalog_checks.len() + self.run_results_checks.len()
    }

    /// Whether `catalog.json` must be loaded for this run.
    pub fn needs_catalog(&self) -> bool {
        !self.catalog_checks.is_empty()
    }

    /// Whether `run_results.json` must be loaded for this run.
    pub fn needs_run_results(&self) -> bool {
        !self.run_results_checks.is_empty()
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::config_in(format!("cannot read config file: {e}"), path))?;
    let raw: Value = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&contents)
            .map_err(|e| Error::config_in(format!("invalid TOML: {e}"), path))?
    } else {
        serde_yaml::from_str(&contents)
            .map_err(|e| Error::config_in(format!("invalid YAML: {e}"), path))?
    };
    from_value(&raw, path)
}

/// Validate a parsed config tree. Split from [`load`] so tests can feed
/// trees directly.
pub fn from_value(raw: &Value, path: &Path) -> Result<Config> {
    let table = raw
        .as_object()
        .ok_or_else(|| Error::config_in("config root must be a mapping", path))?;

    for key in table.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            return Err(Error::config_in(
                format!("unknown top-level key `{key}`"),
                path,
            ));
        }
    }

    let global_include = global_pattern(table, "include", path)?;
    let global_exclude = global_pattern(table, "exclude", path)?;
    let global_severity: Option<Severity> = match table.get("severity") {
        None => None,
        Some(value) => Some(serde_json::from_value(value.clone()).map_err(|_| {
            Error::config_in("`severity` must be `error` or `warn`", path)
        })?),
    };

    let dbt_artifacts_dir = match table.get("dbt_artifacts_dir") {
        None => PathBuf::from(DEFAULT_ARTIFACTS_DIR),
        Some(Value::String(dir)) => PathBuf::from(dir),
        Some(_) => {
            return Err(Error::config_in("`dbt_artifacts_dir` must be a string", path));
        }
    };

    let mut config = Config {
        dbt_artifacts_dir,
        manifest_checks: parse_group(table, CheckGroup::Manifest, path)?,
        catalog_checks: parse_group(table, CheckGroup::Catalog, path)?,
        run_results_checks: parse_group(table, CheckGroup::RunResults, path)?,
    };

    // Global defaults fill checks that did not set their own.
    for check in config.all_checks_mut() {
        let common = check.common_mut();
        if common.include.is_none() {
            common.include = global_include.clone();
        }
        if common.exclude.is_none() {
            common.exclude = global_exclude.clone();
        }
        if common.severity.is_none() {
            common.severity = global_severity;
        }
    }

    // Cross-field requirements, checked after defaults so a global
    // `include` can satisfy a check that requires one.
    for group in [
        CheckGroup::Manifest,
        CheckGroup::Catalog,
        CheckGroup::RunResults,
    ] {
        let checks = match group {
            CheckGroup::Manifest => &config.manifest_checks,
            CheckGroup::Catalog => &config.catalog_checks,
            CheckGroup::RunResults => &config.run_results_checks,
        };
        for (position, check) in checks.iter().enumerate() {
            check.validate().map_err(|message| {
                Error::config_in(format!("{group}[{position}]: {message}"), path)
            })?;
        }
    }

    // Index assignment: the nth occurrence of each distinct check name
    // (across all groups, in load order) gets index n.
    let mut counters: HashMap<&'static str, usize> = HashMap::new();
    for check in config.all_checks_mut() {
        let counter = counters.entry(check.name()).or_insert(0);
        check.common_mut().index = *counter;
        *counter += 1;
    }

    Ok(config)
}

fn global_pattern(
    table: &serde_json::Map<String, Value>,
    key: &str,
    path: &Path,
) -> Result<Option<Pattern>> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(raw)) => Pattern::new(raw)
            .map(Some)
            .map_err(|e| Error::config_in(format!("invalid `{key}` pattern: {e}"), path)),
        Some(_) => Err(Error::config_in(format!("`{key}` must be a string"), path)),
    }
}

fn parse_group(
    table: &serde_json::Map<String, Value>,
    group: CheckGroup,
    path: &Path,
) -> Result<Vec<CheckConfig>> {
    let Some(value) = table.get(group.key()) else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }
    let entries = value
        .as_array()
        .ok_or_else(|| Error::config_in(format!("`{group}` must be a list"), path))?;

    let mut checks = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        checks.push(parse_entry(entry, group, position, path)?);
    }
    Ok(checks)
}

fn parse_entry(
    entry: &Value,
    group: CheckGroup,
    position: usize,
    path: &Path,
) -> Result<CheckConfig> {
    let at = |message: String| Error::config_in(format!("{group}[{position}]: {message}"), path);

    let Some(map) = entry.as_object() else {
        return Err(at("check entry must be a mapping".to_string()));
    };
    let Some(name) = map.get("name").and_then(Value::as_str) else {
        return Err(at("missing `name`".to_string()));
    };
    let Some(spec) = spec_for(name) else {
        return Err(at(format!("unknown check `{name}`")));
    };
    if spec.group != group {
        return Err(at(format!(
            "`{name}` is a {} check, not valid in {group}",
            spec.group
        )));
    }
    // Strict schema: only common fields plus the check's registered
    // parameters are accepted.
    for field in map.keys() {
        if !COMMON_FIELDS.contains(&field.as_str()) && !spec.params.contains(&field.as_str()) {
            return Err(at(format!("unknown field `{field}` for `{name}`")));
        }
    }

    serde_json::from_value(entry.clone()).map_err(|e| at(format!("`{name}`: {e}")))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
