//! Resolution of configured checks into executable instances.
//!
//! Resolution order is load-bearing: configuration order (manifest, then
//! catalog, then run-results, each group in load order) outer, entity parse
//! order inner. The report and exit code are deterministic because this
//! order is.

use crate::checks::{Binding, CheckCommon, CheckConfig, CheckContext, ScopeCategory};
use crate::config::Config;
use crate::entity::{Model, Resource, short_name};

/// One executable unit: a configured check bound to its entities.
#[derive(Debug)]
pub struct CheckInstance<'a> {
    pub check: &'a CheckConfig,
    pub binding: Binding<'a>,
    /// Stable id: `name:index`, plus the entity short name for per-entity
    /// scopes.
    pub run_id: String,
}

/// Resolve every configured check against the applicable entities.
pub fn resolve<'a>(config: &'a Config, ctx: &CheckContext<'a>) -> Vec<CheckInstance<'a>> {
    let mut instances = Vec::new();
    for check in config.all_checks() {
        resolve_one(check, ctx, &mut instances);
    }
    instances
}

fn resolve_one<'a>(
    check: &'a CheckConfig,
    ctx: &CheckContext<'a>,
    out: &mut Vec<CheckInstance<'a>>,
) {
    let manifest = ctx.manifest;
    match check.scope() {
        ScopeCategory::PerModel => per_entity(check, &manifest.models, Binding::Model, out),
        ScopeCategory::PerSource => per_entity(check, &manifest.sources, Binding::Source, out),
        ScopeCategory::PerTest => per_entity(check, &manifest.tests, Binding::Test, out),
        ScopeCategory::PerMacro => per_entity(check, &manifest.macros, Binding::Macro, out),
        ScopeCategory::PerExposure => {
            per_entity(check, &manifest.exposures, Binding::Exposure, out)
        }
        ScopeCategory::PerSeed => per_entity(check, &manifest.seeds, Binding::Seed, out),
        ScopeCategory::PerSnapshot => {
            per_entity(check, &manifest.snapshots, Binding::Snapshot, out)
        }
        ScopeCategory::PerSemanticModel => per_entity(
            check,
            &manifest.semantic_models,
            Binding::SemanticModel,
            out,
        ),
        ScopeCategory::PerUnitTest => {
            per_entity(check, &manifest.unit_tests, Binding::UnitTest, out)
        }
        ScopeCategory::PerCatalogNode => {
            if let Some(catalog) = ctx.catalog {
                per_entity(check, &catalog.nodes, Binding::CatalogNode, out);
            }
        }
        ScopeCategory::PerCatalogSource => {
            if let Some(catalog) = ctx.catalog {
                per_entity(check, &catalog.sources, Binding::CatalogSource, out);
            }
        }
        ScopeCategory::PerRunResult => {
            if let Some(run_results) = ctx.run_results {
                per_entity(check, &run_results.results, Binding::RunResult, out);
            }
        }
        ScopeCategory::WholeCollection => {
            let models: Vec<&Model> = manifest
                .models
                .iter()
                .filter(|m| passes_filters(check.common(), m.original_file_path()))
                .collect();
            out.push(CheckInstance {
                check,
                binding: Binding::Models(models),
                run_id: format!("{}:{}", check.name(), check.common().index),
            });
        }
    }
}

fn per_entity<'a, T: Resource>(
    check: &'a CheckConfig,
    entities: &'a [T],
    bind: impl Fn(&'a T) -> Binding<'a>,
    out: &mut Vec<CheckInstance<'a>>,
) {
    for entity in entities {
        if !passes_filters(check.common(), entity.original_file_path()) {
            continue;
        }
        out.push(CheckInstance {
            check,
            run_id: format!(
                "{}:{}:{}",
                check.name(),
                check.common().index,
                short_name(entity.unique_id())
            ),
            binding: bind(entity),
        });
    }
}

/// Exclude wins over include when both match.
pub(crate) fn passes_filters(common: &CheckCommon, path: &str) -> bool {
    if let Some(exclude) = &common.exclude
        && exclude.is_match(path)
    {
        return false;
    }
    match &common.include {
        Some(include) => include.is_match(path),
        None => true,
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
