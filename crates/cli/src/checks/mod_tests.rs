#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use super::*;
use crate::test_utils;

#[test]
fn registry_names_are_unique() {
    let names: HashSet<_> = REGISTRY.iter().map(|spec| spec.name).collect();
    assert_eq!(names.len(), REGISTRY.len());
}

#[test]
fn registry_names_follow_convention() {
    for spec in REGISTRY {
        assert!(
            spec.name.starts_with("check_"),
            "`{}` does not start with check_",
            spec.name
        );
    }
}

#[test]
fn spec_for_known_and_unknown_names() {
    let spec = spec_for("check_model_access").unwrap();
    assert_eq!(spec.group, CheckGroup::Manifest);
    assert_eq!(spec.scope, ScopeCategory::PerModel);
    assert!(spec_for("check_does_not_exist").is_none());
}

#[test]
fn every_group_has_registered_checks() {
    for group in [
        CheckGroup::Manifest,
        CheckGroup::Catalog,
        CheckGroup::RunResults,
    ] {
        assert!(REGISTRY.iter().any(|spec| spec.group == group));
    }
}

#[test]
fn config_accessors_agree_with_registry() {
    let check: CheckConfig = serde_json::from_value(serde_json::json!({
        "name": "check_model_description_populated",
    }))
    .unwrap();
    assert_eq!(check.name(), "check_model_description_populated");
    assert_eq!(check.group(), CheckGroup::Manifest);
    assert_eq!(check.scope(), ScopeCategory::PerModel);

    let spec = spec_for(check.name()).unwrap();
    assert_eq!(spec.group, check.group());
    assert_eq!(spec.scope, check.scope());
}

#[test]
fn severity_defaults_to_error() {
    let check: CheckConfig = serde_json::from_value(serde_json::json!({
        "name": "check_model_description_populated",
    }))
    .unwrap();
    assert_eq!(check.severity(), Severity::Error);
}

#[test]
fn severity_can_be_warn() {
    let check: CheckConfig = serde_json::from_value(serde_json::json!({
        "name": "check_model_description_populated",
        "severity": "warn",
    }))
    .unwrap();
    assert_eq!(check.severity(), Severity::Warn);
}

#[test]
fn missing_required_parameter_is_a_deserialization_error() {
    // check_model_has_tags requires `tags`.
    let result: Result<CheckConfig, _> = serde_json::from_value(serde_json::json!({
        "name": "check_model_has_tags",
    }));
    assert!(result.is_err());
}

#[test]
fn model_directories_requires_include() {
    let check: CheckConfig = serde_json::from_value(serde_json::json!({
        "name": "check_model_directories",
        "permitted_sub_directories": ["staging"],
    }))
    .unwrap();
    assert!(check.validate().is_err());

    let check: CheckConfig = serde_json::from_value(serde_json::json!({
        "name": "check_model_directories",
        "include": "^models",
        "permitted_sub_directories": ["staging"],
    }))
    .unwrap();
    assert!(check.validate().is_ok());
}

#[test]
fn binding_accessor_of_wrong_kind_is_a_check_error() {
    let model = test_utils::model("model.pkg.a", "staging/a.sql", "A model.");
    let binding = Binding::Model(&model);
    assert!(binding.model().is_ok());
    assert!(matches!(binding.source(), Err(CheckIssue::Error(_))));
    assert!(matches!(binding.models(), Err(CheckIssue::Error(_))));
}

#[test]
fn binding_entity_ids() {
    let a = test_utils::model("model.pkg.a", "staging/a.sql", "A model.");
    let b = test_utils::model("model.pkg.b", "marts/b.sql", "B model.");
    assert_eq!(Binding::Model(&a).entity_ids(), vec!["model.pkg.a"]);
    assert_eq!(
        Binding::Models(vec![&a, &b]).entity_ids(),
        vec!["model.pkg.a", "model.pkg.b"]
    );
    assert_eq!(Binding::Model(&a).single_unique_id(), Some("model.pkg.a"));
    assert_eq!(Binding::Models(vec![&a]).single_unique_id(), None);
}
