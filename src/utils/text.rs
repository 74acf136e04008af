//! String helpers: substring containment, JSON validity, positional templates.

use regex::{Captures, Regex};
use serde::de::IgnoredAny;
use std::fmt;
use std::sync::LazyLock;

static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\{(0|[1-9][0-9]*)\}").unwrap());

/// Whether `query` occurs anywhere in `subject`.
///
/// Case-insensitive mode lowercases both sides before comparing.
pub fn contains(subject: &str, query: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        subject.contains(query)
    } else {
        subject.to_lowercase().contains(&query.to_lowercase())
    }
}

/// [`contains`] with the default case-insensitive comparison.
pub fn contains_ignore_case(subject: &str, query: &str) -> bool {
    contains(subject, query, false)
}

/// Whether `text` is a syntactically valid JSON document.
///
/// Bare scalars such as `true`, `123`, and `"x"` are valid documents. Only
/// syntax is checked, so out-of-range numbers, lone surrogate escapes, and
/// deep nesting are accepted.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Substitute `{0}`, `{1}`, ... with the matching positional argument.
///
/// Every occurrence of a placeholder is replaced. Indexes are written without
/// leading zeros, so `{01}` is not a placeholder. Placeholders without a
/// corresponding argument are left as written. Substituted text is not
/// scanned again.
///
/// ```
/// use dotkit::text::format_positional;
/// assert_eq!(format_positional("{0}-{1}", &[&"a", &"b"]), "a-b");
/// assert_eq!(format_positional("{0}-{2}", &[&"a", &"b"]), "a-{2}");
/// ```
pub fn format_positional(template: &str, args: &[&dyn fmt::Display]) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            let full = caps.get(0).map(|m| m.as_str()).unwrap_or("");
            caps.get(1)
                .and_then(|m| m.as_str().parse::<usize>().ok())
                .and_then(|index| args.get(index))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| full.to_string())
        })
        .into_owned()
}

/// Positional formatting with inline arguments.
///
/// ```
/// use dotkit::positional;
/// assert_eq!(positional!("{1}/{0}", "a", 2), "2/a");
/// ```
#[macro_export]
macro_rules! positional {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::utils::text::format_positional($template, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Method forms of the string helpers.
pub trait StrExt {
    fn contains_query(&self, query: &str, case_sensitive: bool) -> bool;
    fn is_json(&self) -> bool;
    fn format_with(&self, args: &[&dyn fmt::Display]) -> String;
}

impl StrExt for str {
    fn contains_query(&self, query: &str, case_sensitive: bool) -> bool {
        contains(self, query, case_sensitive)
    }

    fn is_json(&self) -> bool {
        is_json(self)
    }

    fn format_with(&self, args: &[&dyn fmt::Display]) -> String {
        format_positional(self, args)
    }
}

impl StrExt for String {
    fn contains_query(&self, query: &str, case_sensitive: bool) -> bool {
        self.as_str().contains_query(query, case_sensitive)
    }

    fn is_json(&self) -> bool {
        is_json(self)
    }

    fn format_with(&self, args: &[&dyn fmt::Display]) -> String {
        format_positional(self, args)
    }
}
