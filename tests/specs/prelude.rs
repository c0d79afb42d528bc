//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the gatecheck binary.
pub fn gatecheck_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gatecheck"))
}

/// Temporary dbt project directory: a config file plus a `target/`
/// directory holding artifact JSON files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A project with the two-model manifest most specs use:
    /// `model.pkg.a` (documented, under `staging/`) and `model.pkg.b`
    /// (undocumented, under `marts/`).
    pub fn two_models() -> Self {
        let project = Self::empty();
        project.manifest(&two_model_manifest());
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `gatecheck.yml`.
    pub fn config(&self, content: &str) {
        self.file("gatecheck.yml", content);
    }

    /// Write `target/manifest.json`.
    pub fn manifest(&self, value: &serde_json::Value) {
        self.file("target/manifest.json", &value.to_string());
    }

    /// Write `target/run_results.json`.
    pub fn run_results(&self, value: &serde_json::Value) {
        self.file("target/run_results.json", &value.to_string());
    }

    /// Write `target/catalog.json`.
    pub fn catalog(&self, value: &serde_json::Value) {
        self.file("target/catalog.json", &value.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Run gatecheck in this project and return the raw output.
    pub fn run(&self, args: &[&str]) -> std::process::Output {
        gatecheck_cmd()
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("gatecheck should run")
    }
}

/// The manifest behind the two-model scenarios.
pub fn two_model_manifest() -> serde_json::Value {
    serde_json::json!({
        "metadata": { "project_name": "pkg" },
        "nodes": {
            "model.pkg.a": {
                "resource_type": "model",
                "package_name": "pkg",
                "name": "a",
                "original_file_path": "staging/a.sql",
                "description": "A thing."
            },
            "model.pkg.b": {
                "resource_type": "model",
                "package_name": "pkg",
                "name": "b",
                "original_file_path": "marts/b.sql",
                "description": ""
            }
        },
        "sources": {},
        "macros": {}
    })
}

pub fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse stdout as JSON.
pub fn json_output(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({e}):\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

pub fn assert_exit_code(output: &std::process::Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {code}\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}
