//! Dotted-path resolution against nested JSON values.
//!
//! A dotted path such as `"server.ports.0"` is split on the delimiter and
//! evaluated left to right. Objects are indexed by key and arrays by decimal
//! index. Resolution stops with `None` the moment a segment is missing or the
//! current value cannot be descended into.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

pub const DEFAULT_DELIMITER: &str = ".";

/// Method-form path lookup for mapping-like values.
pub trait PathLookup {
    fn get_path_with(&self, path: &str, delimiter: &str) -> Option<&Value>;

    fn get_path(&self, path: &str) -> Option<&Value> {
        self.get_path_with(path, DEFAULT_DELIMITER)
    }
}

impl PathLookup for Value {
    fn get_path_with(&self, path: &str, delimiter: &str) -> Option<&Value> {
        resolve_with(self, path, delimiter)
    }
}

impl PathLookup for Map<String, Value> {
    fn get_path_with(&self, path: &str, delimiter: &str) -> Option<&Value> {
        let mut segments = split_path(path, delimiter);
        let first = segments.next()?;
        segments.try_fold(self.get(first)?, |current, segment| {
            child(current, segment)
        })
    }
}

/// Resolve a `.`-delimited path against `root`.
///
/// ```
/// use dotkit::path::resolve;
/// let config = serde_json::json!({"db": {"host": "localhost"}});
/// assert_eq!(resolve(&config, "db.host"), Some(&serde_json::json!("localhost")));
/// assert_eq!(resolve(&config, "db.port"), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_with(root, path, DEFAULT_DELIMITER)
}

/// Resolve a path split on a custom delimiter.
pub fn resolve_with<'a>(root: &'a Value, path: &str, delimiter: &str) -> Option<&'a Value> {
    split_path(path, delimiter).try_fold(root, child)
}

/// Resolve a path, reporting which segment could not be found.
pub fn require_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    for segment in split_path(path, DEFAULT_DELIMITER) {
        current = match child(current, segment) {
            Some(next) => next,
            None if is_container(current) => return Err(Error::path_not_found(path, segment)),
            None => {
                return Err(Error::path_not_container(
                    path,
                    segment,
                    value_type_name(current),
                ))
            }
        };
    }
    Ok(current)
}

/// Set the value at a dotted path, creating intermediate objects as needed.
///
/// A `null` intermediate is replaced by an object. Array segments must
/// address an existing index. Scalars along the path are an error.
pub fn set_path(root: &mut Value, path: &str, new_value: Value) -> Result<()> {
    if path.is_empty() {
        return Err(Error::validation_invalid_argument(
            "path",
            "Path cannot be empty",
            None,
        ));
    }

    let segments: Vec<&str> = split_path(path, DEFAULT_DELIMITER).collect();
    let Some((last, parents)) = segments.split_last() else {
        return Err(Error::validation_invalid_argument(
            "path",
            "Path cannot be empty",
            None,
        ));
    };

    let mut current = root;
    for segment in parents {
        current = ensure_container(current, path, segment)?;
    }

    if current.is_null() {
        *current = Value::Object(Map::new());
    }

    match current {
        Value::Object(map) => {
            map.insert((*last).to_string(), new_value);
            Ok(())
        }
        Value::Array(arr) => {
            let slot = parse_index(last)
                .and_then(|index| arr.get_mut(index))
                .ok_or_else(|| Error::path_not_found(path, *last))?;
            *slot = new_value;
            Ok(())
        }
        other => Err(Error::path_not_container(
            path,
            *last,
            value_type_name(other),
        )),
    }
}

/// Remove and return the value at a dotted path.
pub fn remove_path(root: &mut Value, path: &str) -> Option<Value> {
    let segments: Vec<&str> = split_path(path, DEFAULT_DELIMITER).collect();
    let (last, parents) = segments.split_last()?;

    let mut current = root;
    for segment in parents {
        current = child_mut(current, segment)?;
    }

    match current {
        Value::Object(map) => map.remove(*last),
        Value::Array(arr) => {
            let index = parse_index(last).filter(|index| *index < arr.len())?;
            Some(arr.remove(index))
        }
        _ => None,
    }
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn split_path<'a>(path: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> {
    // An empty delimiter would split between every character.
    let delimiter = if delimiter.is_empty() {
        DEFAULT_DELIMITER
    } else {
        delimiter
    };
    path.split(delimiter)
}

fn child<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(segment),
        Value::Array(arr) => parse_index(segment).and_then(|index| arr.get(index)),
        _ => None,
    }
}

fn child_mut<'a>(current: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match current {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(arr) => parse_index(segment).and_then(move |index| arr.get_mut(index)),
        _ => None,
    }
}

fn ensure_container<'a>(current: &'a mut Value, path: &str, segment: &str) -> Result<&'a mut Value> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }

    match current {
        Value::Object(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        Value::Array(arr) => parse_index(segment)
            .and_then(move |index| arr.get_mut(index))
            .ok_or_else(|| Error::path_not_found(path, segment)),
        other => Err(Error::path_not_container(
            path,
            segment,
            value_type_name(other),
        )),
    }
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
