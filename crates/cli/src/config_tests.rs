#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;

use serde_json::json;

use super::*;
use crate::checks::Severity;

fn parse(value: serde_json::Value) -> Result<Config> {
    from_value(&value, Path::new("gatecheck.yml"))
}

#[test]
fn empty_config_has_no_checks() {
    let config = parse(json!({})).unwrap();
    assert_eq!(config.total_checks(), 0);
    assert!(!config.needs_catalog());
    assert!(!config.needs_run_results());
    assert_eq!(config.dbt_artifacts_dir, PathBuf::from("./target"));
}

#[test]
fn parses_checks_in_all_groups() {
    let config = parse(json!({
        "manifest_checks": [
            { "name": "check_model_description_populated" },
        ],
        "catalog_checks": [
            { "name": "check_columns_are_all_documented" },
        ],
        "run_results_checks": [
            { "name": "check_run_results_max_execution_time",
              "max_execution_time_seconds": 60.0 },
        ],
    }))
    .unwrap();
    assert_eq!(config.manifest_checks.len(), 1);
    assert_eq!(config.catalog_checks.len(), 1);
    assert_eq!(config.run_results_checks.len(), 1);
    assert!(config.needs_catalog());
    assert!(config.needs_run_results());
}

#[test]
fn unknown_check_name_is_fatal_with_position() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_description_populated" },
            { "name": "check_does_not_exist" },
        ],
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("manifest_checks[1]"));
    assert!(message.contains("unknown check `check_does_not_exist`"));
}

#[test]
fn unknown_field_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_has_tags", "tags": ["x"], "tagz": ["y"] },
        ],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("unknown field `tagz`"));
}

#[test]
fn missing_required_parameter_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_has_tags" },
        ],
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("manifest_checks[0]"));
    assert!(message.contains("check_model_has_tags"));
}

#[test]
fn check_in_wrong_group_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_columns_are_all_documented" },
        ],
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("catalog_checks check"));
    assert!(message.contains("not valid in manifest_checks"));
}

#[test]
fn invalid_filter_regex_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_description_populated", "include": "staging[" },
        ],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("manifest_checks[0]"));
}

#[test]
fn invalid_severity_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_description_populated", "severity": "fatal" },
        ],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("manifest_checks[0]"));
}

#[test]
fn unknown_top_level_key_is_fatal() {
    let err = parse(json!({ "manifest_cheks": [] })).unwrap_err();
    assert!(err.to_string().contains("unknown top-level key `manifest_cheks`"));
}

#[test]
fn index_is_per_name_occurrence_in_load_order() {
    let config = parse(json!({
        "manifest_checks": [
            { "name": "check_model_has_tags", "tags": ["a"] },
            { "name": "check_model_description_populated" },
            { "name": "check_model_has_tags", "tags": ["b"] },
            { "name": "check_model_has_tags", "tags": ["c"] },
        ],
    }))
    .unwrap();
    let indices: Vec<(&str, usize)> = config
        .all_checks()
        .map(|c| (c.name(), c.common().index))
        .collect();
    assert_eq!(
        indices,
        vec![
            ("check_model_has_tags", 0),
            ("check_model_description_populated", 0),
            ("check_model_has_tags", 1),
            ("check_model_has_tags", 2),
        ]
    );
}

#[test]
fn index_counts_across_groups() {
    // The same check name in two groups still gets dense per-name indices.
    let config = parse(json!({
        "manifest_checks": [
            { "name": "check_model_description_populated" },
            { "name": "check_model_description_populated", "min_description_length": 25 },
        ],
        "run_results_checks": [
            { "name": "check_run_results_max_execution_time",
              "max_execution_time_seconds": 10.0 },
            { "name": "check_run_results_max_execution_time",
              "max_execution_time_seconds": 60.0 },
        ],
    }))
    .unwrap();
    let indices: Vec<usize> = config.all_checks().map(|c| c.common().index).collect();
    assert_eq!(indices, vec![0, 1, 0, 1]);
}

#[test]
fn global_defaults_fill_unset_fields_only() {
    let config = parse(json!({
        "include": "^models",
        "severity": "warn",
        "manifest_checks": [
            { "name": "check_model_description_populated" },
            { "name": "check_model_description_populated",
              "include": "^marts", "severity": "error" },
        ],
    }))
    .unwrap();
    let checks: Vec<_> = config.all_checks().collect();

    let first = checks[0].common();
    assert_eq!(first.include.as_ref().unwrap().as_str(), "^models");
    assert_eq!(first.severity, Some(Severity::Warn));

    let second = checks[1].common();
    assert_eq!(second.include.as_ref().unwrap().as_str(), "^marts");
    assert_eq!(second.severity, Some(Severity::Error));
}

#[test]
fn global_include_satisfies_model_directories_requirement() {
    let config = parse(json!({
        "include": "^models",
        "manifest_checks": [
            { "name": "check_model_directories",
              "permitted_sub_directories": ["staging"] },
        ],
    }))
    .unwrap();
    assert_eq!(config.manifest_checks.len(), 1);
}

#[test]
fn model_directories_without_any_include_is_fatal() {
    let err = parse(json!({
        "manifest_checks": [
            { "name": "check_model_directories",
              "permitted_sub_directories": ["staging"] },
        ],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("`include` is required"));
}

#[test]
fn null_group_is_empty() {
    let config = parse(json!({ "manifest_checks": null })).unwrap();
    assert_eq!(config.total_checks(), 0);
}

#[test]
fn group_must_be_a_list() {
    let err = parse(json!({ "manifest_checks": {} })).unwrap_err();
    assert!(err.to_string().contains("`manifest_checks` must be a list"));
}

#[test]
fn loads_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gatecheck.yml");
    std::fs::write(
        &path,
        "manifest_checks:\n  - name: check_model_description_populated\n",
    )
    .unwrap();
    let config = load(&path).unwrap();
    assert_eq!(config.manifest_checks.len(), 1);
}

#[test]
fn loads_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gatecheck.toml");
    std::fs::write(
        &path,
        "[[manifest_checks]]\nname = \"check_model_has_tags\"\ntags = [\"finance\"]\n",
    )
    .unwrap();
    let config = load(&path).unwrap();
    assert_eq!(config.manifest_checks.len(), 1);
}

#[test]
fn missing_config_file_is_a_config_error() {
    let err = load(Path::new("/nonexistent/gatecheck.yml")).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gatecheck.yml");
    std::fs::write(&path, "manifest_checks: [unclosed\n").unwrap();
    let err = load(&path).unwrap_err();
    assert!(err.to_string().contains("invalid YAML"));
}
