//! The on-disk secrets file and its load-once cache.

use crate::config::loader::{LoadError, LoadPolicy, read_yaml_file};
use crate::traits::{FileSystem, Output};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::Path;

/// Cached state of the secrets file for one resolver instance.
///
/// `Absent` covers both "no file" and "file could not be loaded", so neither
/// case triggers a second filesystem access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SecretsFileState {
    #[default]
    Unloaded,
    Loaded(HashMap<String, String>),
    Absent,
}

impl SecretsFileState {
    /// Populate the cache on first use and return the parsed entries, if any.
    pub fn get_or_load(
        &mut self,
        fs: &dyn FileSystem,
        output: &dyn Output,
        path: &Path,
    ) -> Option<&HashMap<String, String>> {
        if *self == SecretsFileState::Unloaded {
            let loaded = read_secrets_file(fs, path);
            *self = match LoadPolicy::WarnAndContinue.recover(loaded, output, "secrets file") {
                Ok(Some(entries)) => SecretsFileState::Loaded(entries),
                _ => SecretsFileState::Absent,
            };
        }

        match self {
            SecretsFileState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Read the secrets file into a flat key/value map.
fn read_secrets_file(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<HashMap<String, String>, LoadError> {
    let document: Value = read_yaml_file(fs, path)?;
    secrets_from_document(document).map_err(|reason| LoadError::Shape {
        path: path.to_path_buf(),
        reason,
    })
}

/// Flatten a parsed secrets document.
///
/// An empty document has no entries. Entries whose value is null, empty or
/// not a scalar are skipped, so they count as missing keys.
fn secrets_from_document(document: Value) -> Result<HashMap<String, String>, String> {
    let mapping = match document {
        Value::Null => return Ok(HashMap::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(format!(
                "expected a mapping of secret names to values, found {}",
                value_kind(&other)
            ));
        }
    };

    let mut entries = HashMap::new();
    for (key, value) in mapping {
        let Some(key) = scalar_to_string(&key) else {
            continue;
        };
        match scalar_to_string(&value) {
            Some(value) if !value.is_empty() => {
                entries.insert(key, value);
            }
            _ => tracing::debug!(key = %key, "skipping secrets file entry without a usable value"),
        }
    }

    Ok(entries)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
