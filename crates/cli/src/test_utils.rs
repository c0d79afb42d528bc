//! Shared unit-test fixtures.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::artifacts::ManifestBundle;
use crate::checks::CheckContext;
use crate::entity::{Access, Model, RunResult, Source, Test, short_name};

/// A model with the fields most checks look at; everything else defaulted.
pub fn model(unique_id: &str, path: &str, description: &str) -> Model {
    Model {
        unique_id: unique_id.to_string(),
        name: short_name(unique_id).to_string(),
        original_file_path: path.to_string(),
        package_name: "pkg".to_string(),
        description: description.to_string(),
        access: Access::Protected,
        materialization: "view".to_string(),
        tags: Vec::new(),
        depends_on_nodes: Vec::new(),
        depends_on_macros: Vec::new(),
        columns: Vec::new(),
    }
}

pub fn source(unique_id: &str, path: &str, description: &str) -> Source {
    Source {
        unique_id: unique_id.to_string(),
        name: unique_id.rsplit('.').next().unwrap_or(unique_id).to_string(),
        source_name: "raw".to_string(),
        original_file_path: path.to_string(),
        description: description.to_string(),
        tags: Vec::new(),
        columns: Vec::new(),
    }
}

pub fn singular_test(unique_id: &str, path: &str) -> Test {
    Test {
        unique_id: unique_id.to_string(),
        name: short_name(unique_id).to_string(),
        original_file_path: path.to_string(),
        attached_node: None,
        singular: true,
        meta: serde_json::Map::new(),
    }
}

pub fn run_result(unique_id: &str, path: &str, execution_time: f64) -> RunResult {
    RunResult {
        unique_id: unique_id.to_string(),
        original_file_path: path.to_string(),
        status: "success".to_string(),
        execution_time,
        adapter_response: serde_json::Map::new(),
    }
}

/// A manifest bundle holding only the given models.
pub fn manifest_with_models(models: Vec<Model>) -> ManifestBundle {
    let mut bundle = ManifestBundle::new("pkg");
    bundle.models = models;
    bundle.rebuild_lookups();
    bundle
}

/// Context over a manifest bundle only.
pub fn ctx(manifest: &ManifestBundle) -> CheckContext<'_> {
    CheckContext {
        manifest,
        catalog: None,
        run_results: None,
    }
}
