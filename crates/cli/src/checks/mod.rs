//! Check registry and shared check infrastructure.
//!
//! Every check is registered in exactly one place: the `check_registry!`
//! invocation below, which generates the `CheckConfig` enum (the typed,
//! validated form of one config entry) and the static `REGISTRY` table
//! mapping check name to artifact group, scope category, and permitted
//! parameter fields. Config validation and the resolver both read the
//! table, so a check cannot be half-registered.

pub mod catalog;
pub mod common;
pub mod manifest;
pub mod run_results;

use serde::{Deserialize, Serialize};

use crate::artifacts::{CatalogBundle, ManifestBundle, RunResultsBundle};
use crate::entity::{
    CatalogNode, CatalogSource, Exposure, Macro, Model, Resource, RunResult, Seed, SemanticModel,
    Snapshot, Source, Test, UnitTest,
};
use crate::pattern::Pattern;

pub use common::{CheckIssue, CheckResult};

/// Whether a check failure blocks the run (`error`) or is advisory (`warn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warn,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        })
    }
}

/// Fields every check accepts, alongside its own parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckCommon {
    /// Free-form note on why the check is configured.
    pub description: Option<String>,
    /// Only entities whose path matches are evaluated.
    pub include: Option<Pattern>,
    /// Entities whose path matches are skipped. Takes precedence over
    /// `include` when both match.
    pub exclude: Option<Pattern>,
    pub severity: Option<Severity>,
    /// Position among configs sharing this check's name, assigned at load
    /// time to keep otherwise-identical checks distinguishable.
    #[serde(skip)]
    pub index: usize,
}

/// Which artifact file a check's entities come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckGroup {
    Manifest,
    Catalog,
    RunResults,
}

impl CheckGroup {
    /// The config key this group is configured under.
    pub fn key(self) -> &'static str {
        match self {
            CheckGroup::Manifest => "manifest_checks",
            CheckGroup::Catalog => "catalog_checks",
            CheckGroup::RunResults => "run_results_checks",
        }
    }
}

impl std::fmt::Display for CheckGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// How a check consumes entities: one instance per entity of a kind, or a
/// single instance over the whole (filtered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeCategory {
    PerModel,
    PerSource,
    PerTest,
    PerMacro,
    PerExposure,
    PerSeed,
    PerSnapshot,
    PerSemanticModel,
    PerUnitTest,
    PerCatalogNode,
    PerCatalogSource,
    PerRunResult,
    WholeCollection,
}

/// One row of the static registration table.
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub name: &'static str,
    pub group: CheckGroup,
    pub scope: ScopeCategory,
    /// Check-specific parameter fields permitted in the config entry, in
    /// addition to the common fields. The strict-schema pass rejects
    /// anything else.
    pub params: &'static [&'static str],
}

/// Fields accepted by every check entry.
pub const COMMON_FIELDS: &[&str] = &["name", "description", "include", "exclude", "severity"];

/// Look up a check by its registered name.
pub fn spec_for(name: &str) -> Option<&'static CheckSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Read-only run context shared by every check instance.
///
/// Built once after artifact parsing and passed by reference; checks use it
/// to resolve cross-entity relationships (e.g. a test's parent model).
pub struct CheckContext<'a> {
    pub manifest: &'a ManifestBundle,
    pub catalog: Option<&'a CatalogBundle>,
    pub run_results: Option<&'a RunResultsBundle>,
}

/// The entities a resolved check instance is bound to.
///
/// Per-entity scopes bind exactly one entity; whole-collection scopes bind
/// the filtered collection. The accessors mirror what a check declares it
/// consumes: asking for the wrong kind is a check error, not a panic.
#[derive(Debug, Clone)]
pub enum Binding<'a> {
    Model(&'a Model),
    Source(&'a Source),
    Test(&'a Test),
    Macro(&'a Macro),
    Exposure(&'a Exposure),
    Seed(&'a Seed),
    Snapshot(&'a Snapshot),
    SemanticModel(&'a SemanticModel),
    UnitTest(&'a UnitTest),
    CatalogNode(&'a CatalogNode),
    CatalogSource(&'a CatalogSource),
    RunResult(&'a RunResult),
    /// Filtered model collection for whole-collection checks.
    Models(Vec<&'a Model>),
}

macro_rules! require_binding {
    ($fn_name:ident, $variant:ident, $ty:ty, $what:literal) => {
        pub fn $fn_name(&self) -> CheckResult<&'a $ty> {
            match self {
                Binding::$variant(e) => Ok(*e),
                _ => Err(CheckIssue::error(concat!(
                    "check instance is not bound to ",
                    $what
                ))),
            }
        }
    };
}

impl<'a> Binding<'a> {
    require_binding!(model, Model, Model, "a model");
    require_binding!(source, Source, Source, "a source");
    require_binding!(test, Test, Test, "a test");
    require_binding!(macro_, Macro, Macro, "a macro");
    require_binding!(exposure, Exposure, Exposure, "an exposure");
    require_binding!(seed, Seed, Seed, "a seed");
    require_binding!(snapshot, Snapshot, Snapshot, "a snapshot");
    require_binding!(
        semantic_model,
        SemanticModel,
        SemanticModel,
        "a semantic model"
    );
    require_binding!(unit_test, UnitTest, UnitTest, "a unit test");
    require_binding!(catalog_node, CatalogNode, CatalogNode, "a catalog node");
    require_binding!(
        catalog_source,
        CatalogSource,
        CatalogSource,
        "a catalog source"
    );
    require_binding!(run_result, RunResult, RunResult, "a run result");

    /// The whole-collection model binding.
    pub fn models(&self) -> CheckResult<&[&'a Model]> {
        match self {
            Binding::Models(models) => Ok(models),
            _ => Err(CheckIssue::error(
                "check instance is not bound to the model collection",
            )),
        }
    }

    /// Unique ids of the bound entities, for reporting.
    pub fn entity_ids(&self) -> Vec<String> {
        match self {
            Binding::Model(e) => vec![e.unique_id.clone()],
            Binding::Source(e) => vec![e.unique_id.clone()],
            Binding::Test(e) => vec![e.unique_id.clone()],
            Binding::Macro(e) => vec![e.unique_id.clone()],
            Binding::Exposure(e) => vec![e.unique_id.clone()],
            Binding::Seed(e) => vec![e.unique_id.clone()],
            Binding::Snapshot(e) => vec![e.unique_id.clone()],
            Binding::SemanticModel(e) => vec![e.unique_id.clone()],
            Binding::UnitTest(e) => vec![e.unique_id.clone()],
            Binding::CatalogNode(e) => vec![e.unique_id.clone()],
            Binding::CatalogSource(e) => vec![e.unique_id.clone()],
            Binding::RunResult(e) => vec![e.unique_id.clone()],
            Binding::Models(models) => models.iter().map(|m| m.unique_id.clone()).collect(),
        }
    }

    /// Unique id of the single bound entity, if this is a per-entity binding.
    pub fn single_unique_id(&self) -> Option<&str> {
        match self {
            Binding::Models(_) => None,
            Binding::Model(e) => Some(e.unique_id()),
            Binding::Source(e) => Some(e.unique_id()),
            Binding::Test(e) => Some(e.unique_id()),
            Binding::Macro(e) => Some(e.unique_id()),
            Binding::Exposure(e) => Some(e.unique_id()),
            Binding::Seed(e) => Some(e.unique_id()),
            Binding::Snapshot(e) => Some(e.unique_id()),
            Binding::SemanticModel(e) => Some(e.unique_id()),
            Binding::UnitTest(e) => Some(e.unique_id()),
            Binding::CatalogNode(e) => Some(e.unique_id()),
            Binding::CatalogSource(e) => Some(e.unique_id()),
            Binding::RunResult(e) => Some(e.unique_id()),
        }
    }
}

macro_rules! check_registry {
    ($(
        $name:literal => $variant:ident($ty:ty), $group:ident, $scope:ident, [$($param:literal),* $(,)?];
    )+) => {
        /// A validated check configuration entry, tagged by check name.
        #[derive(Debug, Clone, Deserialize)]
        #[serde(tag = "name")]
        pub enum CheckConfig {
            $(
                #[serde(rename = $name)]
                $variant($ty),
            )+
        }

        /// The registration table: every known check, its group, its scope
        /// category, and its parameter schema.
        pub const REGISTRY: &[CheckSpec] = &[
            $(
                CheckSpec {
                    name: $name,
                    group: CheckGroup::$group,
                    scope: ScopeCategory::$scope,
                    params: &[$($param),*],
                },
            )+
        ];

        impl CheckConfig {
            /// Registered name of this check.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $name,)+
                }
            }

            /// Artifact group this check belongs to.
            pub fn group(&self) -> CheckGroup {
                match self {
                    $(Self::$variant(_) => CheckGroup::$group,)+
                }
            }

            /// Scope category this check resolves with.
            pub fn scope(&self) -> ScopeCategory {
                match self {
                    $(Self::$variant(_) => ScopeCategory::$scope,)+
                }
            }

            /// Shared fields (filters, severity, index).
            pub fn common(&self) -> &CheckCommon {
                match self {
                    $(Self::$variant(c) => &c.common,)+
                }
            }

            pub(crate) fn common_mut(&mut self) -> &mut CheckCommon {
                match self {
                    $(Self::$variant(c) => &mut c.common,)+
                }
            }

            /// Evaluate this check against its bound entities.
            pub fn execute(&self, binding: &Binding, ctx: &CheckContext) -> CheckResult {
                match self {
                    $(Self::$variant(c) => c.run(binding, ctx),)+
                }
            }
        }
    };
}

check_registry! {
    "check_model_access" =>
        ModelAccess(manifest::models::ModelAccess), Manifest, PerModel, ["access"];
    "check_model_description_populated" =>
        ModelDescriptionPopulated(manifest::models::ModelDescriptionPopulated),
        Manifest, PerModel, ["min_description_length"];
    "check_model_directories" =>
        ModelDirectories(manifest::models::ModelDirectories),
        Manifest, PerModel, ["permitted_sub_directories"];
    "check_model_has_tags" =>
        ModelHasTags(manifest::models::ModelHasTags), Manifest, PerModel, ["tags"];
    "check_model_max_upstream_dependencies" =>
        ModelMaxUpstreamDependencies(manifest::models::ModelMaxUpstreamDependencies),
        Manifest, PerModel,
        ["max_upstream_models", "max_upstream_sources", "max_upstream_macros"];
    "check_model_names" =>
        ModelNames(manifest::models::ModelNames), Manifest, PerModel, ["model_name_pattern"];
    "check_model_documentation_coverage" =>
        ModelDocumentationCoverage(manifest::project::ModelDocumentationCoverage),
        Manifest, WholeCollection, ["min_model_documentation_coverage_pct"];
    "check_model_test_coverage" =>
        ModelTestCoverage(manifest::project::ModelTestCoverage),
        Manifest, WholeCollection, ["min_model_test_coverage_pct"];
    "check_top_level_directories" =>
        TopLevelDirectories(manifest::project::TopLevelDirectories),
        Manifest, WholeCollection, ["permitted_directories"];
    "check_source_description_populated" =>
        SourceDescriptionPopulated(manifest::sources::SourceDescriptionPopulated),
        Manifest, PerSource, ["min_description_length"];
    "check_source_has_tags" =>
        SourceHasTags(manifest::sources::SourceHasTags), Manifest, PerSource, ["tags"];
    "check_source_not_orphaned" =>
        SourceNotOrphaned(manifest::sources::SourceNotOrphaned), Manifest, PerSource, [];
    "check_singular_test_has_meta_keys" =>
        SingularTestHasMetaKeys(manifest::tests::SingularTestHasMetaKeys),
        Manifest, PerTest, ["keys"];
    "check_macro_description_populated" =>
        MacroDescriptionPopulated(manifest::macros::MacroDescriptionPopulated),
        Manifest, PerMacro, ["min_description_length"];
    "check_macro_name_matches_file_name" =>
        MacroNameMatchesFileName(manifest::macros::MacroNameMatchesFileName),
        Manifest, PerMacro, [];
    "check_macro_max_number_of_lines" =>
        MacroMaxNumberOfLines(manifest::macros::MacroMaxNumberOfLines),
        Manifest, PerMacro, ["max_number_of_lines"];
    "check_exposure_on_non_public_models" =>
        ExposureOnNonPublicModels(manifest::exposures::ExposureOnNonPublicModels),
        Manifest, PerExposure, [];
    "check_seed_description_populated" =>
        SeedDescriptionPopulated(manifest::seeds::SeedDescriptionPopulated),
        Manifest, PerSeed, ["min_description_length"];
    "check_snapshot_has_tags" =>
        SnapshotHasTags(manifest::snapshots::SnapshotHasTags), Manifest, PerSnapshot, ["tags"];
    "check_semantic_model_on_non_public_models" =>
        SemanticModelOnNonPublicModels(manifest::semantic_models::SemanticModelOnNonPublicModels),
        Manifest, PerSemanticModel, [];
    "check_unit_test_expect_format" =>
        UnitTestExpectFormat(manifest::unit_tests::UnitTestExpectFormat),
        Manifest, PerUnitTest, ["permitted_formats"];
    "check_columns_are_all_documented" =>
        ColumnsAreAllDocumented(catalog::columns::ColumnsAreAllDocumented),
        Catalog, PerCatalogNode, [];
    "check_column_name_complies_to_column_type" =>
        ColumnNameCompliesToColumnType(catalog::columns::ColumnNameCompliesToColumnType),
        Catalog, PerCatalogNode, ["column_name_pattern", "types"];
    "check_source_columns_are_all_documented" =>
        SourceColumnsAreAllDocumented(catalog::sources::SourceColumnsAreAllDocumented),
        Catalog, PerCatalogSource, [];
    "check_run_results_max_execution_time" =>
        RunResultsMaxExecutionTime(run_results::RunResultsMaxExecutionTime),
        RunResults, PerRunResult, ["max_execution_time_seconds"];
    "check_run_results_max_gigabytes_billed" =>
        RunResultsMaxGigabytesBilled(run_results::RunResultsMaxGigabytesBilled),
        RunResults, PerRunResult, ["max_gigabytes_billed"];
}

impl CheckConfig {
    /// Cross-field requirements the serde schema cannot express.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::ModelDirectories(c) if c.common.include.is_none() => {
                Err("`include` is required for check_model_directories".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Effective severity, after global defaults have been applied.
    pub fn severity(&self) -> Severity {
        self.common().severity.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
