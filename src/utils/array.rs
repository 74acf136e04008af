//! Sequence helpers keyed by an identity field.
//!
//! Elements are located by comparing one named field (default `"id"`)
//! against the same field on a template value. The field may be a dotted
//! path such as `"meta.id"`. "Not found" is always
//! `None`, never an index, so position 0 is unambiguous.

use crate::int::to_number;
use crate::path::{self, PathLookup};
use crate::text;
use serde_json::{Map, Value};

pub const DEFAULT_IDENTITY_FIELD: &str = "id";

/// Values that expose named fields usable as identities.
pub trait Identifiable {
    fn identity(&self, field: &str) -> Option<Value>;
}

// A `null` identity counts as absent.
impl Identifiable for Value {
    fn identity(&self, field: &str) -> Option<Value> {
        path::resolve(self, field)
            .filter(|value| !value.is_null())
            .cloned()
    }
}

impl Identifiable for Map<String, Value> {
    fn identity(&self, field: &str) -> Option<Value> {
        self.get_path(field)
            .filter(|value| !value.is_null())
            .cloned()
    }
}

/// Values that can take part in substring filtering.
pub trait TextSearchable {
    fn search_text(&self) -> Option<&str>;
}

impl TextSearchable for Value {
    fn search_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl TextSearchable for String {
    fn search_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl TextSearchable for &str {
    fn search_text(&self) -> Option<&str> {
        Some(*self)
    }
}

/// Outcome of [`replace_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Replaced(usize),
    Appended(usize),
}

impl Upsert {
    pub fn index(&self) -> usize {
        match self {
            Upsert::Replaced(index) | Upsert::Appended(index) => *index,
        }
    }
}

/// Strict equality between identity values.
///
/// Values must share a JSON type. Numbers compare numerically so `1` and
/// `1.0` are the same identity.
pub fn identity_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => x.as_f64() == y.as_f64(),
        },
        _ => a == b,
    }
}

/// Position of the first element whose `field` matches the template's.
///
/// Returns `None` when the template has no identity or nothing matches.
pub fn position_by<T: Identifiable>(items: &[T], template: &T, field: &str) -> Option<usize> {
    let wanted = template.identity(field)?;
    items.iter().position(|item| {
        item.identity(field)
            .is_some_and(|candidate| identity_eq(&candidate, &wanted))
    })
}

/// [`position_by`] using the `"id"` field.
pub fn position<T: Identifiable>(items: &[T], template: &T) -> Option<usize> {
    position_by(items, template, DEFAULT_IDENTITY_FIELD)
}

/// Remove the first element matching the template's identity.
pub fn remove_by<T: Identifiable>(items: &mut Vec<T>, template: &T, field: &str) -> bool {
    match position_by(items, template, field) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

/// Overwrite the element matching `item`'s identity, or append `item`.
pub fn replace_by<T: Identifiable>(items: &mut Vec<T>, item: T, field: &str) -> Upsert {
    match position_by(items, &item, field) {
        Some(index) => {
            items[index] = item;
            Upsert::Replaced(index)
        }
        None => {
            items.push(item);
            Upsert::Appended(items.len() - 1)
        }
    }
}

/// Elements whose text contains `query`. Elements without text are skipped.
pub fn filter_containing<'a, T: TextSearchable>(
    items: &'a [T],
    query: &str,
    case_sensitive: bool,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            item.search_text()
                .is_some_and(|subject| text::contains(subject, query, case_sensitive))
        })
        .collect()
}

/// [`filter_containing`] with the default case-insensitive comparison.
pub fn filter_ignore_case<'a, T: TextSearchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter_containing(items, query, false)
}

/// Smallest number in `values`.
///
/// An empty slice yields `f64::INFINITY`. Any NaN in the input yields NaN.
pub fn min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.min(value)
        }
    })
}

/// Largest number in `values`.
///
/// An empty slice yields `f64::NEG_INFINITY`. Any NaN in the input yields NaN.
pub fn max(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.max(value)
        }
    })
}

/// [`min`] over JSON values after numeric coercion. Non-numeric values yield NaN.
pub fn min_value(values: &[Value]) -> f64 {
    min(&values.iter().map(to_number).collect::<Vec<_>>())
}

/// [`max`] over JSON values after numeric coercion. Non-numeric values yield NaN.
pub fn max_value(values: &[Value]) -> f64 {
    max(&values.iter().map(to_number).collect::<Vec<_>>())
}

pub fn last<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// Last element of a JSON array. Any non-array value yields `None`.
pub fn last_of(value: &Value) -> Option<&Value> {
    value.as_array().and_then(|items| items.last())
}

/// Method forms of the sequence helpers.
pub trait SliceExt<T> {
    fn position_by(&self, template: &T, field: &str) -> Option<usize>;
    fn position_of(&self, template: &T) -> Option<usize>;
    fn last_item(&self) -> Option<&T>;
}

impl<T: Identifiable> SliceExt<T> for [T] {
    fn position_by(&self, template: &T, field: &str) -> Option<usize> {
        position_by(self, template, field)
    }

    fn position_of(&self, template: &T) -> Option<usize> {
        position(self, template)
    }

    fn last_item(&self) -> Option<&T> {
        last(self)
    }
}

/// Mutating method forms for owned sequences.
pub trait VecExt<T> {
    fn remove_by(&mut self, template: &T, field: &str) -> bool;
    fn replace_by(&mut self, item: T, field: &str) -> Upsert;
}

impl<T: Identifiable> VecExt<T> for Vec<T> {
    fn remove_by(&mut self, template: &T, field: &str) -> bool {
        remove_by(self, template, field)
    }

    fn replace_by(&mut self, item: T, field: &str) -> Upsert {
        replace_by(self, item, field)
    }
}
