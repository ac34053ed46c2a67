//! Runtime kinds of JSON values and literal rendering.
//!
//! Numbers keep their source text (`arbitrary_precision`), so the kind of a
//! number is read from how it was written. Literal comparison (`const`,
//! `enum`, `uniqueItems`) goes through [`literal_eq`]: kind-strict for numbers
//! (`1 != 1.0`), numeric within a kind (`1e2 == 100.0`) and insensitive to
//! object key order.

use std::fmt;

use serde_json::{Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(n) if is_integral(n) => JsonKind::Integer,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The schema `type` keyword for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }

    /// "element should be ..." wording.
    pub fn expectation(self) -> &'static str {
        match self {
            JsonKind::Null => "element should be null",
            JsonKind::Boolean => "element should be a boolean",
            JsonKind::Integer => "element should be an integer",
            JsonKind::Number => "element should be a number",
            JsonKind::String => "element should be a string",
            JsonKind::Array => "element should be an array",
            JsonKind::Object => "element should be an object",
        }
    }
}

/// Integer-kind numbers are those written without fraction or exponent.
pub fn is_integral(n: &Number) -> bool {
    !n.as_str().contains(['.', 'e', 'E'])
}

/// The exact value of an integer-kind number; `None` for float-kind numbers
/// and for integers outside the `i128` range.
pub fn as_i128(n: &Number) -> Option<i128> {
    if !is_integral(n) {
        return None;
    }
    n.as_i128()
}

/// The value of a float-kind number; `None` for integer-kind numbers.
pub fn as_float(n: &Number) -> Option<f64> {
    if is_integral(n) {
        return None;
    }
    n.as_f64()
}

/// Deep equality of two literals.
pub fn literal_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| literal_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| literal_eq(a, b)))
        }
        _ => a == b,
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    match (is_integral(a), is_integral(b)) {
        (true, true) => match (a.as_i128(), b.as_i128()) {
            (Some(a), Some(b)) => a == b,
            _ => a.as_str() == b.as_str(),
        },
        (false, false) => a.as_f64().is_some_and(|a| b.as_f64() == Some(a)),
        _ => false,
    }
}

/// Renders a literal the way `const` messages quote it: strings bare,
/// arrays as `[a, b]`, objects as `{k=v, k2=v2}`.
pub struct Literal<'a>(pub &'a Value);

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Literal(item))?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={}", Literal(item))?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_kinds() {
        assert_eq!(JsonKind::of(&json!(1)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(-1)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(u64::MAX)), JsonKind::Integer);
        assert_eq!(JsonKind::of(&json!(1.0)), JsonKind::Number);

        let parsed: Value = serde_json::from_str("1e2").unwrap();
        assert_eq!(JsonKind::of(&parsed), JsonKind::Number);
    }

    #[test]
    fn test_equality_is_kind_strict() {
        assert_ne!(json!(1), json!(1.0));
        assert_eq!(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1}));
    }

    #[test]
    fn test_literal_rendering() {
        assert_eq!(Literal(&json!({"a": 1})).to_string(), "{a=1}");
        assert_eq!(Literal(&json!([1, "x", null])).to_string(), "[1, x, null]");
        assert_eq!(
            Literal(&json!({"a": {"b": [true]}, "c": 1.5})).to_string(),
            "{a={b=[true]}, c=1.5}"
        );
    }

    #[test]
    fn test_integers_beyond_64_bits_stay_integral() {
        let big: Value = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(JsonKind::of(&big), JsonKind::Integer);
        assert_eq!(as_i128(big.as_number().unwrap()), Some(100_000_000_000_000_000_000));

        let huge: Value = serde_json::from_str("1000000000000000000000000000000000000000000").unwrap();
        assert_eq!(JsonKind::of(&huge), JsonKind::Integer);
        assert_eq!(as_i128(huge.as_number().unwrap()), None);
    }

    #[test]
    fn test_literal_eq() {
        let parse = |s: &str| serde_json::from_str::<Value>(s).unwrap();
        assert!(literal_eq(&parse("1e2"), &parse("100.0")));
        assert!(literal_eq(&parse("[1.50, {\"a\": 2}]"), &parse("[1.5, {\"a\": 2}]")));
        assert!(!literal_eq(&parse("1"), &parse("1.0")));
        assert!(!literal_eq(&parse("100000000000000000001"), &parse("100000000000000000000")));
        assert!(literal_eq(&json!({"a": 1, "b": 2}), &json!({"b": 2, "a": 1})));
        assert!(!literal_eq(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_numeric_accessors() {
        let big = json!(u64::MAX);
        assert_eq!(as_i128(big.as_number().unwrap()), Some(u64::MAX as i128));
        assert_eq!(as_float(json!(2).as_number().unwrap()), None);
        assert_eq!(as_float(json!(2.5).as_number().unwrap()), Some(2.5));
    }
}
