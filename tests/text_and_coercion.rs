use dotkit::array;
use dotkit::int::{self, IntConvertible};
use dotkit::text::{self, StrExt};
use dotkit::{load_or_default, positional};
use serde_json::json;
use std::fmt;

#[test]
fn containment_ignores_case_only_when_insensitive() {
    let subject = "The Quick Brown Fox";
    let query = "the quick brown fox";

    assert!(text::contains(subject, query, false));
    assert!(!text::contains(subject, query, true));
    assert!(text::contains(subject, "Quick", true));
}

#[test]
fn filter_keeps_only_matching_text_elements() {
    let items = vec![json!("Mango"), json!(7), json!({"name": "mango"}), json!("tango")];
    let hits = array::filter_containing(&items, "ANGO", false);
    assert_eq!(hits, vec![&json!("Mango"), &json!("tango")]);
}

#[test]
fn structured_text_validity() {
    for valid in ["true", "123", "\"x\"", "{}", "[1,2]"] {
        assert!(text::is_json(valid), "{} should be valid", valid);
    }
    for invalid in ["{", "undefined"] {
        assert!(!invalid.is_json(), "{} should be invalid", invalid);
    }
}

#[test]
fn positional_substitution() {
    assert_eq!(positional!("{0}-{1}", "a", "b"), "a-b");
    assert_eq!(positional!("{0}-{2}", "a", "b"), "a-{2}");
    assert_eq!("{0} of {1}".format_with(&[&3, &"four"]), "3 of four");
}

#[test]
fn integer_coercion_of_text() {
    assert_eq!(int::parse_int("3xx"), 3);
    assert_eq!(int::parse_int("xx"), 0);
    assert_eq!(int::to_int("3xx"), 3);
    assert_eq!(int::to_int(&json!("xx")), 0);
    assert_eq!(int::to_int(&-8.6_f64), -8);
}

struct Temperature {
    kelvin: f64,
}

impl IntConvertible for Temperature {
    fn to_int(&self) -> i64 {
        (self.kelvin - 273.15).to_int()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}K", self.kelvin)
    }
}

#[test]
fn custom_coercion_wins_over_generic_parsing() {
    let reading = Temperature { kelvin: 300.0 };
    assert_eq!(int::to_int(&reading), 26);
    assert_eq!(int::to_int_fallback(&reading), 300);
}

#[test]
fn min_max_and_last() {
    assert_eq!(array::min(&[4.0, 2.0, 9.0]), 2.0);
    assert_eq!(array::max(&[4.0, 2.0, 9.0]), 9.0);
    assert!(array::max_value(&[json!(1), json!([1, 2])]).is_nan());
    assert_eq!(array::last_of(&json!(["a", "b"])), Some(&json!("b")));
    assert_eq!(array::last_of(&json!("ab")), None);
}

#[test]
fn configured_defaults_drive_helpers() {
    let config = load_or_default(Some(
        r#"{"defaults": {"path_delimiter": ":", "identity_field": "sku", "case_sensitive": true}}"#,
    ));
    let defaults = config.defaults;

    let root = json!({"a": {"b": true}});
    assert_eq!(defaults.resolve(&root, "a:b"), Some(&json!(true)));

    let items = vec![json!({"sku": "A1"}), json!({"sku": "B2"})];
    assert_eq!(defaults.position(&items, &json!({"sku": "B2"})), Some(1));
    assert!(!defaults.contains("ABC", "abc"));
}

#[test]
fn glob_import_leaves_one_to_int_method() {
    use dotkit::*;

    assert_eq!("12px".to_int(), 12);
    assert_eq!("7 days".to_string().to_int(), 7);
    assert!("Twelve".contains_query("twelve", false));
}

#[test]
fn insensitive_wrappers_match_the_default_flag() {
    assert!(text::contains_ignore_case("Quick Brown", "quick"));
    let items = vec![json!("Berry"), json!("cherry"), json!(3)];
    assert_eq!(
        array::filter_ignore_case(&items, "ERRY"),
        vec![&json!("Berry"), &json!("cherry")]
    );
}
