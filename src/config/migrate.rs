//! Configuration file upgrades: detect and add keys introduced after the
//! file was written, keeping the user's values untouched.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the current configuration, in file order, with default values.
fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    match serde_yaml::from_str::<Value>(content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration file is not a YAML mapping".into())),
    }
}

/// Names of the configuration keys absent from `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys with their default values. Returns the added keys;
/// the file is rewritten only when something was added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "configuration file not found: {} (run `rotaview init`)",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let mut current = parse_mapping(&content)?;
    let mut added = Vec::new();

    for (key, value) in default_mapping()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        info("Configuration is up to date.");
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))?;

    // Inject documentation right after the `overnight_policy` line
    let mut new_content = String::new();
    for line in serialized.lines() {
        new_content.push_str(line);
        new_content.push('\n');

        if line.starts_with("overnight_policy:") && added.iter().any(|k| k == "overnight_policy") {
            new_content.push_str(
                "# overnight_policy options:\n\
                 #   next_day → a shift ending before it starts ends the following day\n\
                 #   reject   → such shifts are reported as errors\n",
            );
        }
    }

    fs::write(path, new_content).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}",
        added.join(", ")
    ));

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_misses_every_key() {
        let missing = missing_keys("").unwrap();
        assert!(missing.contains(&"data_dir".to_string()));
        assert!(missing.contains(&"overnight_policy".to_string()));
    }

    #[test]
    fn complete_file_misses_nothing() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(missing_keys(&yaml).unwrap().is_empty());
    }

    #[test]
    fn non_mapping_is_rejected() {
        assert!(missing_keys("- a\n- b\n").is_err());
    }
}
