//! Integer and numeric coercion.
//!
//! Types opt into integer coercion by implementing [`IntConvertible`].
//! Anything that only implements `Display` goes through [`to_int_fallback`],
//! which renders the value and parses its leading integer prefix.

use serde_json::Value;
use std::fmt;

/// Capability for values that know how to become an integer.
pub trait IntConvertible {
    fn to_int(&self) -> i64;
}

/// Coerce a value through its own [`IntConvertible`] implementation.
pub fn to_int<T: IntConvertible + ?Sized>(value: &T) -> i64 {
    value.to_int()
}

/// Coerce a value that does not implement [`IntConvertible`] by parsing its
/// rendered text.
pub fn to_int_fallback<T: fmt::Display + ?Sized>(value: &T) -> i64 {
    parse_int(&value.to_string())
}

/// Parse the leading integer prefix of `text`.
///
/// Leading whitespace is skipped and a single `+` or `-` sign is accepted.
/// Parsing stops at the first non-digit. Returns 0 when no digits are found
/// and saturates at the `i64` bounds on overflow.
///
/// ```
/// use dotkit::int::parse_int;
/// assert_eq!(parse_int("3xx"), 3);
/// assert_eq!(parse_int("  -12.9kg"), -12);
/// assert_eq!(parse_int("xx"), 0);
/// ```
pub fn parse_int(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        let digit = i64::from(byte - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }

    result
}

/// Convert a JSON value to a float the way a loosely typed runtime would.
///
/// Numbers map directly, booleans become 0/1, `null` becomes 0, and strings
/// are parsed after trimming (an empty string is 0). Strings that are not
/// entirely numeric, arrays, and objects produce NaN.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

macro_rules! impl_int_convertible_for_int {
    ($($t:ty),*) => {
        $(
            impl IntConvertible for $t {
                fn to_int(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_int_convertible_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

// Float-to-int `as` casts truncate toward zero, map NaN to 0, and saturate.
impl IntConvertible for f64 {
    fn to_int(&self) -> i64 {
        *self as i64
    }
}

impl IntConvertible for f32 {
    fn to_int(&self) -> i64 {
        *self as i64
    }
}

impl IntConvertible for str {
    fn to_int(&self) -> i64 {
        parse_int(self)
    }
}

impl IntConvertible for String {
    fn to_int(&self) -> i64 {
        parse_int(self)
    }
}

impl IntConvertible for Value {
    fn to_int(&self) -> i64 {
        match self {
            Value::Number(n) => match n.as_i64() {
                Some(i) => i,
                None => n.as_f64().map(|f| f.to_int()).unwrap_or(0),
            },
            Value::String(s) => parse_int(s),
            other => to_int_fallback(other),
        }
    }
}

impl<T: IntConvertible + ?Sized> IntConvertible for &T {
    fn to_int(&self) -> i64 {
        (**self).to_int()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed {
        value: i64,
        label: &'static str,
    }

    impl IntConvertible for Fixed {
        fn to_int(&self) -> i64 {
            self.value
        }
    }

    impl fmt::Display for Fixed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.label)
        }
    }

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("3xx"), 3);
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("3.9"), 3);
    }

    #[test]
    fn parse_int_returns_zero_without_prefix() {
        assert_eq!(parse_int("xx"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("-"), 0);
        assert_eq!(parse_int(" x1"), 0);
    }

    #[test]
    fn parse_int_handles_sign_and_whitespace() {
        assert_eq!(parse_int("  -17 apples"), -17);
        assert_eq!(parse_int("\t+8"), 8);
    }

    #[test]
    fn parse_int_saturates_on_overflow() {
        assert_eq!(parse_int("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(3.99_f64.to_int(), 3);
        assert_eq!((-3.99_f64).to_int(), -3);
        assert_eq!(f64::NAN.to_int(), 0);
        assert_eq!(f64::INFINITY.to_int(), i64::MAX);
    }

    #[test]
    fn unsigned_overflow_saturates() {
        assert_eq!(u64::MAX.to_int(), i64::MAX);
        assert_eq!(7_u8.to_int(), 7);
    }

    #[test]
    fn json_values_dispatch_by_type() {
        assert_eq!(json!(12).to_int(), 12);
        assert_eq!(json!(-2.7).to_int(), -2);
        assert_eq!(json!("5 items").to_int(), 5);
        assert_eq!(json!(true).to_int(), 0);
        assert_eq!(json!(null).to_int(), 0);
    }

    #[test]
    fn dispatcher_defers_to_own_conversion() {
        let custom = Fixed {
            value: 42,
            label: "7",
        };
        assert_eq!(to_int(&custom), 42);
        assert_eq!(to_int_fallback(&custom), 7);
    }

    #[test]
    fn fallback_parses_rendered_text() {
        assert_eq!(to_int_fallback(&'9'), 9);
        assert_eq!(to_int_fallback("abc"), 0);
    }

    #[test]
    fn to_number_follows_loose_coercion() {
        assert_eq!(to_number(&json!(2.5)), 2.5);
        assert_eq!(to_number(&json!(" 4 ")), 4.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert!(to_number(&json!("4x")).is_nan());
        assert!(to_number(&json!({})).is_nan());
    }
}
