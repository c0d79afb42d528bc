//! `catalog.json` parsing.
//!
//! Catalog entries carry no file path of their own; each entry resolves its
//! path through the manifest, which also scopes the catalog to the project's
//! own resources. Entries for nodes the manifest does not know are skipped.

use std::path::Path;

use serde_json::Value;

use super::ManifestBundle;
use super::string_field;
use crate::entity::{CatalogColumn, CatalogNode, CatalogSource};
use crate::error::{Error, Result};

/// Catalog-derived collections.
#[derive(Debug)]
pub struct CatalogBundle {
    pub nodes: Vec<CatalogNode>,
    pub sources: Vec<CatalogSource>,
}

pub(super) fn parse_catalog(
    raw: &Value,
    path: &Path,
    manifest: &ManifestBundle,
) -> Result<CatalogBundle> {
    if raw.get("metadata").is_none() {
        return Err(Error::artifact(
            "`metadata` missing, is this a catalog.json?",
            path,
        ));
    }

    let empty = serde_json::Map::new();
    let mut nodes = Vec::new();
    for (unique_id, node) in raw.get("nodes").and_then(Value::as_object).unwrap_or(&empty) {
        let Some(node_path) = manifest.node_path(unique_id) else {
            tracing::debug!("skipping catalog node `{unique_id}`: not in manifest");
            continue;
        };
        nodes.push(CatalogNode {
            unique_id: unique_id.clone(),
            original_file_path: node_path.to_string(),
            columns: parse_columns(node),
        });
    }

    let mut sources = Vec::new();
    for (unique_id, source) in raw
        .get("sources")
        .and_then(Value::as_object)
        .unwrap_or(&empty)
    {
        let Some(manifest_source) = manifest.source(unique_id) else {
            tracing::debug!("skipping catalog source `{unique_id}`: not in manifest");
            continue;
        };
        sources.push(CatalogSource {
            unique_id: unique_id.clone(),
            original_file_path: manifest_source.original_file_path.clone(),
            columns: parse_columns(source),
        });
    }

    Ok(CatalogBundle { nodes, sources })
}

/// Columns in warehouse order (the catalog records each column's ordinal).
fn parse_columns(entry: &Value) -> Vec<CatalogColumn> {
    let mut columns: Vec<(u64, CatalogColumn)> = entry
        .get("columns")
        .and_then(Value::as_object)
        .map(|columns| {
            columns
                .iter()
                .map(|(name, column)| {
                    let ordinal = column.get("index").and_then(Value::as_u64).unwrap_or(0);
                    (
                        ordinal,
                        CatalogColumn {
                            name: name.clone(),
                            data_type: string_field(column, "type"),
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    columns.sort_by_key(|(ordinal, _)| *ordinal);
    columns.into_iter().map(|(_, column)| column).collect()
}
