use hbsbake::data::{compile_data, load_data_file};
use hbsbake::error::Error;
use indexmap::IndexMap;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_json(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_later_files_win() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_json(temp_dir.path(), "a.json", r#"{"a": 1, "b": 1}"#);
    let second = write_json(temp_dir.path(), "b.json", r#"{"b": 2}"#);

    let data = compile_data(&[first, second], None, no_env(), &IndexMap::new()).unwrap();
    assert_eq!(data, json!({"a": 1, "b": 2}));
}

#[test]
fn test_nested_objects_are_replaced_not_merged() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_json(temp_dir.path(), "a.json", r#"{"site": {"name": "x", "url": "u"}}"#);
    let second = write_json(temp_dir.path(), "b.json", r#"{"site": {"name": "y"}}"#);

    let data = compile_data(&[first, second], None, no_env(), &IndexMap::new()).unwrap();
    assert_eq!(data, json!({"site": {"name": "y"}}));
}

#[test]
fn test_no_sources_gives_empty_object() {
    let data = compile_data(&[], None, env(&[("FOO", "bar")]), &IndexMap::new()).unwrap();
    assert_eq!(data, json!({}));
}

#[test]
fn test_env_default_field() {
    let data = compile_data(&[], Some("env"), env(&[("FOO", "bar")]), &IndexMap::new()).unwrap();
    assert_eq!(data["env"]["FOO"], json!("bar"));
}

#[test]
fn test_env_merges_into_existing_field() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_json(
        temp_dir.path(),
        "a.json",
        r#"{"vars": {"KEEP": "file", "FOO": "file"}, "other": true}"#,
    );

    let data = compile_data(
        &[file],
        Some("vars"),
        env(&[("FOO", "env")]),
        &IndexMap::new(),
    )
    .unwrap();
    assert_eq!(
        data,
        json!({"vars": {"KEEP": "file", "FOO": "env"}, "other": true})
    );
}

#[test]
fn test_overrides_take_final_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_json(temp_dir.path(), "a.json", r#"{"title": "file", "env": 3}"#);
    let mut overrides = IndexMap::new();
    overrides.insert("title".to_string(), Some("cli".to_string()));
    overrides.insert("env".to_string(), Some("flat".to_string()));

    let data = compile_data(&[file], Some("env"), env(&[("FOO", "bar")]), &overrides).unwrap();
    assert_eq!(data, json!({"title": "cli", "env": "flat"}));
}

#[test]
fn test_empty_override_is_null() {
    let mut overrides = IndexMap::new();
    overrides.insert("title".to_string(), None);

    let data = compile_data(&[], None, no_env(), &overrides).unwrap();
    assert_eq!(data, json!({"title": null}));
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_json(temp_dir.path(), "a.json", "{}");
    let missing = temp_dir.path().join("missing.json");

    let result = compile_data(&[good, missing.clone()], None, no_env(), &IndexMap::new());
    match result {
        Err(Error::DataFileRead { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected DataFileRead, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let broken = write_json(temp_dir.path(), "broken.json", r#"{"key": "value""#);

    let err = load_data_file(&broken).unwrap_err();
    assert!(matches!(err, Error::DataFileParse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_non_object_json_fails() {
    let temp_dir = TempDir::new().unwrap();
    let array = write_json(temp_dir.path(), "list.json", "[1, 2]");

    match load_data_file(&array) {
        Err(Error::DataFileNotObject { found, .. }) => assert_eq!(found, "an array"),
        other => panic!("Expected DataFileNotObject, got {other:?}"),
    }
}
