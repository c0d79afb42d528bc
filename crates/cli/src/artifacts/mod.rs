//! Loading and parsing of dbt artifact files.
//!
//! The parsers are deliberately tolerant of schema-version drift: they read
//! only the fields the entity model needs and treat everything else as
//! opaque. A missing file, malformed JSON, or a missing structural key is a
//! fatal artifact error raised before any check runs.

mod catalog;
mod manifest;
mod run_results;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

pub use catalog::CatalogBundle;
pub use manifest::ManifestBundle;
pub use run_results::RunResultsBundle;

/// Everything parsed out of the artifacts directory for one run.
#[derive(Debug)]
pub struct Artifacts {
    pub manifest: ManifestBundle,
    /// Present only when catalog checks are configured.
    pub catalog: Option<CatalogBundle>,
    /// Present only when run-results checks are configured.
    pub run_results: Option<RunResultsBundle>,
}

/// Load the artifacts a run needs. The manifest is always parsed; catalog
/// and run results only when a configured check consumes them.
pub fn load(dir: &Path, need_catalog: bool, need_run_results: bool) -> Result<Artifacts> {
    let manifest_path = dir.join("manifest.json");
    let manifest = manifest::parse_manifest(&read_json(&manifest_path)?, &manifest_path)?;
    tracing::info!(
        "parsed `manifest.json`: `{}` project with {} models, {} sources, {} tests, {} macros",
        manifest.project_name,
        manifest.models.len(),
        manifest.sources.len(),
        manifest.tests.len(),
        manifest.macros.len()
    );

    let catalog = if need_catalog {
        let path = dir.join("catalog.json");
        let bundle = catalog::parse_catalog(&read_json(&path)?, &path, &manifest)?;
        tracing::info!(
            "parsed `catalog.json`: {} nodes, {} sources",
            bundle.nodes.len(),
            bundle.sources.len()
        );
        Some(bundle)
    } else {
        None
    };

    let run_results = if need_run_results {
        let path = dir.join("run_results.json");
        let bundle = run_results::parse_run_results(&read_json(&path)?, &path, &manifest)?;
        tracing::info!("parsed `run_results.json`: {} results", bundle.results.len());
        Some(bundle)
    } else {
        None
    };

    Ok(Artifacts {
        manifest,
        catalog,
        run_results,
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::artifact(format!("cannot read file: {e}"), path))?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::artifact(format!("invalid JSON: {e}"), path))
}

/// A string field directly on `value`.
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// A string field, defaulting to empty when absent or not a string.
pub(crate) fn string_field(value: &Value, key: &str) -> String {
    str_field(value, key).unwrap_or_default().to_string()
}

/// A string array at a JSON pointer, defaulting to empty.
pub(crate) fn string_list_at(value: &Value, pointer: &str) -> Vec<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// The project-relative path of a node (`original_file_path`, with `path` as
/// the fallback older schema versions use).
pub(crate) fn path_field(value: &Value) -> String {
    str_field(value, "original_file_path")
        .or_else(|| str_field(value, "path"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
