//! Shared fixtures for Verdict tests: sample object types, small client rules,
//! object-graph builders, and JSON record loading.

pub mod objects;
pub mod rules;

use std::path::PathBuf;

use verdict_core::{ObjectRef, Record, Value};

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load a fixture file as raw JSON.
///
/// # Panics
/// Panics if the file doesn't exist or isn't valid JSON.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a JSON object fixture as a [`Record`] of the given type.
///
/// Fields appear in the JSON map's order (alphabetical).
pub fn load_record(relative_path: &str, type_name: &str) -> ObjectRef {
    match load_fixture_value(relative_path) {
        serde_json::Value::Object(map) => {
            let mut record = Record::new(type_name);
            for (name, field) in map {
                record.insert(name, Value::from(field));
            }
            record.into_ref()
        }
        other => panic!("Fixture {relative_path} is not a JSON object: {other}"),
    }
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
