//! Typed resource entities parsed from dbt artifacts.
//!
//! One struct per resource kind. Entities are plain data: constructed once
//! by the artifact parsers, never mutated, and only read by checks.
//! Cross-entity relationships are stored as unique-id strings and resolved
//! through the bundle lookup maps at evaluation time.

use serde::{Deserialize, Serialize};

/// Capability set shared by every parsed resource.
///
/// Checks and the resolver only need these two facts about an arbitrary
/// entity: a stable unique identifier and the project-relative path of the
/// file it came from.
pub trait Resource {
    fn unique_id(&self) -> &str;
    fn original_file_path(&self) -> &str;
}

macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {
        $(impl Resource for $ty {
            fn unique_id(&self) -> &str {
                &self.unique_id
            }

            fn original_file_path(&self) -> &str {
                &self.original_file_path
            }
        })+
    };
}

impl_resource!(
    Model,
    Source,
    Test,
    Seed,
    Snapshot,
    Exposure,
    SemanticModel,
    Macro,
    UnitTest,
    CatalogNode,
    CatalogSource,
    RunResult,
);

/// Model access level, as declared in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Private,
    #[default]
    Protected,
    Public,
}

impl Access {
    /// Parse an access string from the manifest, defaulting to `protected`
    /// (dbt's own default for models without an explicit access config).
    pub fn parse(value: &str) -> Self {
        match value {
            "private" => Access::Private,
            "public" => Access::Public,
            _ => Access::Protected,
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Public => "public",
        };
        f.write_str(s)
    }
}

/// A documented column on a model or source.
#[derive(Debug, Clone, Default)]
pub struct ColumnDoc {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Model {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    pub package_name: String,
    pub description: String,
    pub access: Access,
    pub materialization: String,
    pub tags: Vec<String>,
    /// Upstream node unique ids (`model.*`, `source.*`, `seed.*`, ...).
    pub depends_on_nodes: Vec<String>,
    /// Macro unique ids this model calls.
    pub depends_on_macros: Vec<String>,
    pub columns: Vec<ColumnDoc>,
}

#[derive(Debug, Clone)]
pub struct Source {
    pub unique_id: String,
    pub name: String,
    /// Name of the source group this table belongs to.
    pub source_name: String,
    pub original_file_path: String,
    pub description: String,
    pub tags: Vec<String>,
    pub columns: Vec<ColumnDoc>,
}

#[derive(Debug, Clone)]
pub struct Test {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    /// Unique id of the node the test is attached to, when known.
    pub attached_node: Option<String>,
    /// True for singular (one-off SQL) tests, false for generic tests.
    pub singular: bool,
    pub meta: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct Seed {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Exposure {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    pub depends_on_nodes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SemanticModel {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    pub depends_on_nodes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Macro {
    pub unique_id: String,
    pub name: String,
    pub package_name: String,
    pub original_file_path: String,
    pub description: String,
    /// Raw macro body, used by line-count checks.
    pub macro_sql: String,
}

#[derive(Debug, Clone)]
pub struct UnitTest {
    pub unique_id: String,
    pub name: String,
    pub original_file_path: String,
    /// Name of the model under test.
    pub model: String,
    /// Fixture formats of the `given` inputs (`csv`, `dict`, `sql`).
    pub given_formats: Vec<String>,
    /// Fixture format of the `expect` block, when declared.
    pub expect_format: Option<String>,
}

/// A column as observed in the warehouse catalog.
#[derive(Debug, Clone)]
pub struct CatalogColumn {
    pub name: String,
    pub data_type: String,
}

#[derive(Debug, Clone)]
pub struct CatalogNode {
    pub unique_id: String,
    /// Path of the manifest node this catalog entry describes.
    pub original_file_path: String,
    pub columns: Vec<CatalogColumn>,
}

#[derive(Debug, Clone)]
pub struct CatalogSource {
    pub unique_id: String,
    pub original_file_path: String,
    pub columns: Vec<CatalogColumn>,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub unique_id: String,
    /// Path of the manifest node this result ran, resolved at parse time.
    pub original_file_path: String,
    pub status: String,
    /// Wall-clock execution time in seconds.
    pub execution_time: f64,
    /// Adapter-specific response payload (e.g. `bytes_billed` on BigQuery).
    pub adapter_response: serde_json::Map<String, serde_json::Value>,
}

impl Model {
    /// Short display name used in failure messages (`model.pkg.name` -> `name`).
    pub fn short_name(&self) -> &str {
        short_name(&self.unique_id)
    }
}

/// Third dot-segment of a unique id, falling back to the full id.
///
/// dbt unique ids look like `model.my_project.stg_orders`; messages and run
/// ids use the trailing resource name.
pub fn short_name(unique_id: &str) -> &str {
    unique_id.splitn(3, '.').nth(2).unwrap_or(unique_id)
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
