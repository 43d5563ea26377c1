//! Bring an older configuration file up to the current set of keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys written by the current version, with their default values.
fn current_keys() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!("{} is not a YAML mapping", path.display()))),
    }
}

/// Keys the file at `path` is missing.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let existing = read_mapping(path)?;
    Ok(current_keys()?
        .into_iter()
        .filter(|(k, _)| !existing.contains_key(k))
        .filter_map(|(k, _)| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, leaving the others alone.
/// Returns the keys that were added.
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut existing = read_mapping(path)?;
    let mut added = Vec::new();

    for (k, v) in current_keys()? {
        if !existing.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            existing.insert(k, v);
        }
    }

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(existing))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
