//! Data object compilation.
//! Merges JSON data files, environment variables and command-line overrides
//! into the single object every template is rendered with.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Reads the process environment, skipping variables that are not valid UTF-8.
pub fn process_environment() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                debug!("Skipping non UTF-8 environment variable {key:?}");
                None
            }
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loads a data file that must hold a JSON object.
///
/// # Errors
/// * `Error::DataFileRead` if the file cannot be read
/// * `Error::DataFileParse` if the contents are not valid JSON
/// * `Error::DataFileNotObject` if the top-level value is not an object
pub fn load_data_file<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    debug!("Loading data from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| Error::DataFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| Error::DataFileParse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::DataFileNotObject {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

/// Merges environment variables into the object at `field`, creating it if needed.
///
/// Existing entries under `field` survive unless an environment variable has the same name.
pub fn merge_environment<I>(data: &mut Map<String, Value>, field: &str, environment: I)
where
    I: IntoIterator<Item = (String, String)>,
{
    let target = data
        .entry(field.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !target.is_object() {
        warn!(
            "Replacing {} at '{}' with environment variables",
            json_type_name(target),
            field
        );
        *target = Value::Object(Map::new());
    }

    if let Value::Object(vars) = target {
        for (key, value) in environment {
            vars.insert(key, Value::String(value));
        }
    }
}

/// Builds the data object for a run.
///
/// Sources are applied in increasing precedence:
/// 1. data files, left to right, shallow-merged by top-level key
/// 2. environment variables under `env_field`, if set
/// 3. overrides, each replacing the top-level key it names
///
/// # Errors
/// Fails on the first data file that cannot be loaded; no partial object is returned.
pub fn compile_data<I>(
    files: &[PathBuf],
    env_field: Option<&str>,
    environment: I,
    overrides: &IndexMap<String, Option<String>>,
) -> Result<Value>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut data = Map::new();

    for file in files {
        for (key, value) in load_data_file(file)? {
            data.insert(key, value);
        }
    }

    if let Some(field) = env_field {
        debug!("Adding environment variables under '{field}'");
        merge_environment(&mut data, field, environment);
    }

    for (name, value) in overrides {
        debug!("Setting '{name}' from command line");
        let value = value.clone().map(Value::String).unwrap_or(Value::Null);
        data.insert(name.clone(), value);
    }

    Ok(Value::Object(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_environment_creates_field() {
        let mut data = Map::new();
        merge_environment(&mut data, "env", vec![("FOO".to_string(), "bar".to_string())]);
        assert_eq!(Value::Object(data), json!({"env": {"FOO": "bar"}}));
    }

    #[test]
    fn test_merge_environment_replaces_non_object() {
        let mut data = Map::new();
        data.insert("env".to_string(), json!("production"));
        merge_environment(&mut data, "env", vec![("FOO".to_string(), "bar".to_string())]);
        assert_eq!(Value::Object(data), json!({"env": {"FOO": "bar"}}));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(&json!([1])), "an array");
        assert_eq!(json_type_name(&json!(null)), "null");
    }
}
