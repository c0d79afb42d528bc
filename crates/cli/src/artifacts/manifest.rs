//! `manifest.json` parsing.
//!
//! Entities are filtered to the project's own package: installed packages
//! ship their own models and macros, and checks only apply to the project
//! under validation.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::{path_field, str_field, string_field, string_list_at};
use crate::entity::{
    Access, ColumnDoc, Exposure, Macro, Model, Seed, SemanticModel, Snapshot, Source, Test,
    UnitTest,
};
use crate::error::{Error, Result};

/// All manifest-derived collections, plus lookup maps for cross-reference
/// resolution. Built once per run, read-only afterwards.
#[derive(Debug)]
pub struct ManifestBundle {
    pub project_name: String,
    pub models: Vec<Model>,
    pub sources: Vec<Source>,
    pub tests: Vec<Test>,
    pub seeds: Vec<Seed>,
    pub snapshots: Vec<Snapshot>,
    pub exposures: Vec<Exposure>,
    pub semantic_models: Vec<SemanticModel>,
    pub macros: Vec<Macro>,
    pub unit_tests: Vec<UnitTest>,
    models_by_id: HashMap<String, usize>,
    sources_by_id: HashMap<String, usize>,
    node_paths: HashMap<String, String>,
}

impl ManifestBundle {
    /// An empty bundle for the named project.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            models: Vec::new(),
            sources: Vec::new(),
            tests: Vec::new(),
            seeds: Vec::new(),
            snapshots: Vec::new(),
            exposures: Vec::new(),
            semantic_models: Vec::new(),
            macros: Vec::new(),
            unit_tests: Vec::new(),
            models_by_id: HashMap::new(),
            sources_by_id: HashMap::new(),
            node_paths: HashMap::new(),
        }
    }

    /// Rebuild the unique-id lookup maps from the collections. Called once
    /// after the collections are filled; the bundle is read-only afterwards.
    pub fn rebuild_lookups(&mut self) {
        self.models_by_id = index_by_id(self.models.iter().map(|m| m.unique_id.clone()));
        self.sources_by_id = index_by_id(self.sources.iter().map(|s| s.unique_id.clone()));

        self.node_paths.clear();
        let nodes = self
            .models
            .iter()
            .map(|e| (&e.unique_id, &e.original_file_path))
            .chain(self.tests.iter().map(|e| (&e.unique_id, &e.original_file_path)))
            .chain(self.seeds.iter().map(|e| (&e.unique_id, &e.original_file_path)))
            .chain(
                self.snapshots
                    .iter()
                    .map(|e| (&e.unique_id, &e.original_file_path)),
            )
            .chain(
                self.sources
                    .iter()
                    .map(|e| (&e.unique_id, &e.original_file_path)),
            );
        for (unique_id, path) in nodes {
            self.node_paths.insert(unique_id.clone(), path.clone());
        }
    }

    /// Look up a model by unique id.
    pub fn model(&self, unique_id: &str) -> Option<&Model> {
        self.models_by_id
            .get(unique_id)
            .and_then(|&i| self.models.get(i))
    }

    /// Look up a source by unique id.
    pub fn source(&self, unique_id: &str) -> Option<&Source> {
        self.sources_by_id
            .get(unique_id)
            .and_then(|&i| self.sources.get(i))
    }

    /// File path of any project node (model, test, seed, snapshot, source),
    /// used to attach paths to catalog and run-results entries.
    pub(crate) fn node_path(&self, unique_id: &str) -> Option<&str> {
        self.node_paths.get(unique_id).map(String::as_str)
    }
}

pub(super) fn parse_manifest(raw: &Value, path: &Path) -> Result<ManifestBundle> {
    let project_name = raw
        .pointer("/metadata/project_name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            Error::artifact(
                "`metadata.project_name` missing, is this a manifest.json?",
                path,
            )
        })?
        .to_string();

    let mut bundle = ManifestBundle::new(project_name.as_str());

    let empty = serde_json::Map::new();
    let nodes = raw.get("nodes").and_then(Value::as_object).unwrap_or(&empty);
    for (unique_id, node) in nodes {
        if str_field(node, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        match str_field(node, "resource_type") {
            Some("model") => bundle.models.push(parse_model(unique_id, node)),
            Some("test") => bundle.tests.push(parse_test(unique_id, node)),
            Some("seed") => bundle.seeds.push(parse_seed(unique_id, node)),
            Some("snapshot") => bundle.snapshots.push(parse_snapshot(unique_id, node)),
            _ => {}
        }
    }
    for (unique_id, source) in raw
        .get("sources")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        if str_field(source, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        bundle.sources.push(parse_source(unique_id, source));
    }

    for (unique_id, exposure) in raw
        .get("exposures")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        if str_field(exposure, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        bundle.exposures.push(Exposure {
            unique_id: unique_id.clone(),
            name: string_field(exposure, "name"),
            original_file_path: path_field(exposure),
            depends_on_nodes: string_list_at(exposure, "/depends_on/nodes"),
        });
    }

    for (unique_id, mac) in raw
        .get("macros")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        if str_field(mac, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        bundle.macros.push(Macro {
            unique_id: unique_id.clone(),
            name: string_field(mac, "name"),
            package_name: string_field(mac, "package_name"),
            original_file_path: path_field(mac),
            description: string_field(mac, "description"),
            macro_sql: string_field(mac, "macro_sql"),
        });
    }

    for (unique_id, sm) in raw
        .get("semantic_models")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        if str_field(sm, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        bundle.semantic_models.push(SemanticModel {
            unique_id: unique_id.clone(),
            name: string_field(sm, "name"),
            original_file_path: path_field(sm),
            depends_on_nodes: string_list_at(sm, "/depends_on/nodes"),
        });
    }

    for (unique_id, ut) in raw
        .get("unit_tests")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        if str_field(ut, "package_name") != Some(project_name.as_str()) {
            continue;
        }
        bundle.unit_tests.push(parse_unit_test(unique_id, ut));
    }

    bundle.rebuild_lookups();
    Ok(bundle)
}

fn index_by_id(ids: impl Iterator<Item = String>) -> HashMap<String, usize> {
    ids.enumerate().map(|(i, id)| (id, i)).collect()
}

fn parse_model(unique_id: &str, node: &Value) -> Model {
    Model {
        unique_id: unique_id.to_string(),
        name: string_field(node, "name"),
        original_file_path: path_field(node),
        package_name: string_field(node, "package_name"),
        description: string_field(node, "description"),
        access: str_field(node, "access")
            .map(Access::parse)
            .unwrap_or_default(),
        materialization: node
            .pointer("/config/materialized")
            .and_then(Value::as_str)
            .unwrap_or("view")
            .to_string(),
        tags: string_list_at(node, "/tags"),
        depends_on_nodes: string_list_at(node, "/depends_on/nodes"),
        depends_on_macros: string_list_at(node, "/depends_on/macros"),
        columns: parse_column_docs(node),
    }
}

fn parse_test(unique_id: &str, node: &Value) -> Test {
    let meta = node
        .pointer("/config/meta")
        .or_else(|| node.get("meta"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    Test {
        unique_id: unique_id.to_string(),
        name: string_field(node, "name"),
        original_file_path: path_field(node),
        attached_node: str_field(node, "attached_node").map(String::from),
        // Generic tests carry `test_metadata`; singular tests do not.
        singular: node.get("test_metadata").is_none(),
        meta,
    }
}

fn parse_seed(unique_id: &str, node: &Value) -> Seed {
    Seed {
        unique_id: unique_id.to_string(),
        name: string_field(node, "name"),
        original_file_path: path_field(node),
        description: string_field(node, "description"),
    }
}

fn parse_snapshot(unique_id: &str, node: &Value) -> Snapshot {
    Snapshot {
        unique_id: unique_id.to_string(),
        name: string_field(node, "name"),
        original_file_path: path_field(node),
        tags: string_list_at(node, "/tags"),
    }
}

fn parse_source(unique_id: &str, source: &Value) -> Source {
    Source {
        unique_id: unique_id.to_string(),
        name: string_field(source, "name"),
        source_name: string_field(source, "source_name"),
        original_file_path: path_field(source),
        description: string_field(source, "description"),
        tags: string_list_at(source, "/tags"),
        columns: parse_column_docs(source),
    }
}

fn parse_unit_test(unique_id: &str, ut: &Value) -> UnitTest {
    let given_formats = ut
        .get("given")
        .and_then(Value::as_array)
        .map(|given| {
            given
                .iter()
                .filter_map(|g| str_field(g, "format"))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();
    UnitTest {
        unique_id: unique_id.to_string(),
        name: string_field(ut, "name"),
        original_file_path: path_field(ut),
        model: string_field(ut, "model"),
        given_formats,
        expect_format: ut
            .pointer("/expect/format")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

fn parse_column_docs(node: &Value) -> Vec<ColumnDoc> {
    node.get("columns")
        .and_then(Value::as_object)
        .map(|columns| {
            columns
                .iter()
                .map(|(name, column)| ColumnDoc {
                    name: name.clone(),
                    description: string_field(column, "description"),
                })
                .collect()
        })
        .unwrap_or_default()
}
