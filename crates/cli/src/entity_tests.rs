#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::test_utils;

#[test]
fn short_name_takes_third_segment() {
    assert_eq!(short_name("model.pkg.stg_orders"), "stg_orders");
    assert_eq!(short_name("source.pkg.raw.orders"), "raw.orders");
}

#[test]
fn short_name_falls_back_to_full_id() {
    assert_eq!(short_name("not-a-dbt-id"), "not-a-dbt-id");
    assert_eq!(short_name("model.pkg"), "model.pkg");
}

#[test]
fn access_parse_defaults_to_protected() {
    assert_eq!(Access::parse("private"), Access::Private);
    assert_eq!(Access::parse("public"), Access::Public);
    assert_eq!(Access::parse("protected"), Access::Protected);
    assert_eq!(Access::parse("whatever"), Access::Protected);
}

#[test]
fn access_displays_lowercase() {
    assert_eq!(Access::Public.to_string(), "public");
    assert_eq!(Access::Protected.to_string(), "protected");
}

#[test]
fn access_deserializes_from_lowercase() {
    let access: Access = serde_json::from_value(serde_json::json!("public")).unwrap();
    assert_eq!(access, Access::Public);
}

#[test]
fn resource_capability_set() {
    let model = test_utils::model("model.pkg.a", "staging/a.sql", "A model.");
    let resource: &dyn Resource = &model;
    assert_eq!(resource.unique_id(), "model.pkg.a");
    assert_eq!(resource.original_file_path(), "staging/a.sql");
}
