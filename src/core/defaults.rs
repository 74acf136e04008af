use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::{array, path, text};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DotkitConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Settings applied by the convenience methods on [`Defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_path_delimiter")]
    pub path_delimiter: String,

    #[serde(default = "default_identity_field")]
    pub identity_field: String,

    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            path_delimiter: default_path_delimiter(),
            identity_field: default_identity_field(),
            case_sensitive: false,
        }
    }
}

impl Defaults {
    pub fn resolve<'a>(&self, root: &'a Value, path: &str) -> Option<&'a Value> {
        path::resolve_with(root, path, &self.path_delimiter)
    }

    pub fn position<T: array::Identifiable>(&self, items: &[T], template: &T) -> Option<usize> {
        array::position_by(items, template, &self.identity_field)
    }

    pub fn remove<T: array::Identifiable>(&self, items: &mut Vec<T>, template: &T) -> bool {
        array::remove_by(items, template, &self.identity_field)
    }

    pub fn replace<T: array::Identifiable>(&self, items: &mut Vec<T>, item: T) -> array::Upsert {
        array::replace_by(items, item, &self.identity_field)
    }

    pub fn contains(&self, subject: &str, query: &str) -> bool {
        text::contains(subject, query, self.case_sensitive)
    }

    pub fn filter<'a, T: array::TextSearchable>(&self, items: &'a [T], query: &str) -> Vec<&'a T> {
        array::filter_containing(items, query, self.case_sensitive)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_path_delimiter() -> String {
    path::DEFAULT_DELIMITER.to_string()
}

fn default_identity_field() -> String {
    array::DEFAULT_IDENTITY_FIELD.to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Parse configuration from a JSON document.
///
/// Missing keys fall back to their defaults. Empty strings for the
/// delimiter or identity field are rejected.
pub fn load_from_str(json: &str) -> Result<DotkitConfig> {
    let config: DotkitConfig = serde_json::from_str(json)
        .map_err(|e| Error::config_invalid_json(e, Some("parse dotkit config".to_string())))?;
    validate(&config.defaults)?;
    Ok(config)
}

/// Parse configuration if present, falling back to defaults on any error.
pub fn load_or_default(json: Option<&str>) -> DotkitConfig {
    let Some(json) = json else {
        return DotkitConfig::default();
    };

    match load_from_str(json) {
        Ok(config) => config,
        Err(err) => {
            crate::log_status!("config", "Using default settings: {}", describe(&err));
            DotkitConfig::default()
        }
    }
}

fn validate(defaults: &Defaults) -> Result<()> {
    if defaults.path_delimiter.is_empty() {
        return Err(Error::config_invalid_value(
            "defaults.path_delimiter",
            Some(String::new()),
            "Path delimiter cannot be empty",
        ));
    }

    if defaults.identity_field.trim().is_empty() {
        return Err(Error::config_invalid_value(
            "defaults.identity_field",
            Some(defaults.identity_field.clone()),
            "Identity field cannot be empty",
        ));
    }

    Ok(())
}

fn describe(err: &Error) -> String {
    match err.details.get("problem").and_then(Value::as_str) {
        Some(problem) => format!("{} ({})", err.message, problem),
        None => err.message.clone(),
    }
}
