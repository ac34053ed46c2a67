//! Runtime validator: walks a value against a [`SchemaNode`] tree.
//!
//! Errors are collected in pre-order. A kind mismatch stops the checks of
//! that node; every other failing check adds its own error and the walk
//! goes on.

use json_schema_pointer::JsonPointer;
use serde_json::{Map, Value};

use crate::literal::{as_float, as_i128, is_integral, literal_eq, JsonKind, Literal};
use crate::model::{Interval, Multiplier};
use crate::node::*;
use crate::result::{ValidationError, ValidationResult};

/// Validate a JSON value against a schema tree.
pub fn validate(node: &SchemaNode, value: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    validate_inner(node, value, &JsonPointer::root(), &mut errors);
    tracing::debug!(errors = errors.len(), "validation finished");
    ValidationResult::new(errors)
}

/// True when `value` produces no error against `node`.
fn conforms(node: &SchemaNode, value: &Value, pointer: &JsonPointer) -> bool {
    let mut scratch = Vec::new();
    validate_inner(node, value, pointer, &mut scratch);
    scratch.is_empty()
}

fn push(errors: &mut Vec<ValidationError>, pointer: &JsonPointer, message: impl Into<String>) {
    errors.push(ValidationError::new(pointer.clone(), message));
}

fn validate_inner(node: &SchemaNode, value: &Value, pointer: &JsonPointer, errors: &mut Vec<ValidationError>) {
    match node {
        SchemaNode::AlwaysValid => {}

        SchemaNode::NeverValid => push(errors, pointer, "element is not valid"),

        SchemaNode::Boolean => {
            if !value.is_boolean() {
                push(errors, pointer, JsonKind::Boolean.expectation());
            }
        }

        SchemaNode::Null => {
            if !value.is_null() {
                push(errors, pointer, JsonKind::Null.expectation());
            }
        }

        SchemaNode::Integer(t) => match value {
            Value::Number(n) if is_integral(n) => match as_i128(n) {
                Some(n) => validate_numeric(t.multiple_of(), t.range(), n, pointer, errors),
                None => push(errors, pointer, "integer is outside the supported range"),
            },
            _ => push(errors, pointer, JsonKind::Integer.expectation()),
        },

        SchemaNode::Number(t) => match value {
            Value::Number(n) => match as_float(n) {
                Some(n) => validate_numeric(t.multiple_of(), t.range(), n, pointer, errors),
                None => push(errors, pointer, JsonKind::Number.expectation()),
            },
            _ => push(errors, pointer, JsonKind::Number.expectation()),
        },

        SchemaNode::String(t) => match value {
            Value::String(s) => validate_str(s, t, pointer, errors),
            _ => push(errors, pointer, JsonKind::String.expectation()),
        },

        SchemaNode::Array(t) => match value {
            Value::Array(items) => validate_arr(items, t, pointer, errors),
            _ => push(errors, pointer, JsonKind::Array.expectation()),
        },

        SchemaNode::Object(t) => match value {
            Value::Object(map) => validate_obj(map, t, pointer, errors),
            _ => push(errors, pointer, JsonKind::Object.expectation()),
        },

        SchemaNode::Const(t) => {
            if JsonKind::of(value) != t.kind() {
                push(errors, pointer, t.kind().expectation());
            } else if !t.equals(value) {
                let literal = t.to_value();
                push(
                    errors,
                    pointer,
                    format!("element should be equal to {}", Literal(&literal)),
                );
            }
        }

        SchemaNode::Enum(t) => {
            if !t.contains(value) {
                push(errors, pointer, "element not found in enum");
            }
        }

        SchemaNode::Not(inner) => {
            if conforms(inner, value, pointer) {
                push(errors, pointer, "element should not be valid");
            }
        }

        SchemaNode::OneOf(branches) => match count_matches(branches, value, pointer) {
            1 => {}
            0 => push(errors, pointer, "element does not match any of the nested schema"),
            _ => push(errors, pointer, "element matches more than one of the nested schema"),
        },

        SchemaNode::AnyOf(branches) => {
            if count_matches(branches, value, pointer) == 0 {
                push(errors, pointer, "element does not match any of the nested schema");
            }
        }
    }
}

fn count_matches(branches: &Branches, value: &Value, pointer: &JsonPointer) -> usize {
    branches
        .iter()
        .filter(|branch| conforms(branch, value, pointer))
        .count()
}

/// Shared by integer (`i128`) and number (`f64`) schemas.
trait NumericDomain: Copy + PartialOrd + std::fmt::Display {
    fn divisible(multiplier: Multiplier<Self>, n: Self) -> bool;
}

impl NumericDomain for i128 {
    fn divisible(multiplier: Multiplier<Self>, n: Self) -> bool {
        multiplier.divides(n)
    }
}

impl NumericDomain for f64 {
    fn divisible(multiplier: Multiplier<Self>, n: Self) -> bool {
        multiplier.divides(n)
    }
}

fn validate_numeric<T: NumericDomain>(
    multiple_of: Option<Multiplier<T>>,
    range: &Interval<T>,
    n: T,
    pointer: &JsonPointer,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(m) = multiple_of {
        if !T::divisible(m, n) {
            push(errors, pointer, format!("element should be a multiple of {m}"));
        }
    }
    if let Some(lower) = range.lower() {
        if !lower.accepts(n) {
            let message = if lower.exclusive {
                format!("element should be greater than {}", lower.value)
            } else {
                format!("element should be greater than or equal to {}", lower.value)
            };
            push(errors, pointer, message);
        }
    }
    if let Some(upper) = range.upper() {
        if !upper.accepts(n) {
            let message = if upper.exclusive {
                format!("element should be less than {}", upper.value)
            } else {
                format!("element should be less than or equal to {}", upper.value)
            };
            push(errors, pointer, message);
        }
    }
}

fn validate_str(s: &str, t: &StringNode, pointer: &JsonPointer, errors: &mut Vec<ValidationError>) {
    let length = s.chars().count();
    if !t.min_length().le_count(length) {
        push(
            errors,
            pointer,
            format!("string should be at least {} characters long", t.min_length()),
        );
    }
    if let Some(max) = t.max_length() {
        if !max.ge_count(length) {
            push(errors, pointer, format!("string should be at most {max} characters long"));
        }
    }
    if let Some(pattern) = t.pattern() {
        if !pattern.matches(s) {
            push(errors, pointer, "element does not match pattern");
        }
    }
    if let Some(format) = t.format() {
        if !format.is_valid(s) {
            push(errors, pointer, format.expectation());
        }
    }
}

fn validate_arr(items: &[Value], t: &ArrayNode, pointer: &JsonPointer, errors: &mut Vec<ValidationError>) {
    if !t.min_items().le_count(items.len()) {
        push(
            errors,
            pointer,
            format!("array should contain at least {} items", t.min_items()),
        );
    }
    if let Some(max) = t.max_items() {
        if !max.ge_count(items.len()) {
            push(errors, pointer, format!("array should contain at most {max} items"));
        }
    }

    if t.unique_items() {
        let mut seen: Vec<&Value> = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if seen.iter().any(|other| literal_eq(other, item)) {
                push(errors, &pointer.index(i), "duplicated element");
            } else {
                seen.push(item);
            }
        }
    }

    if let Some(schema) = t.items() {
        for (i, item) in items.iter().enumerate() {
            validate_inner(schema, item, &pointer.index(i), errors);
        }
    }

    if let Some(schema) = t.contains() {
        let found = items
            .iter()
            .enumerate()
            .any(|(i, item)| conforms(schema, item, &pointer.index(i)));
        if !found {
            push(errors, pointer, "no item matching 'contains' schema found");
        }
    }
}

fn validate_obj(
    map: &Map<String, Value>,
    t: &ObjectNode,
    pointer: &JsonPointer,
    errors: &mut Vec<ValidationError>,
) {
    for (key, item) in map {
        match t.property(key) {
            Some(schema) => validate_inner(schema, item, &pointer.key(key.as_str()), errors),
            None if !t.additional_properties() => {
                push(errors, &pointer.key(key.as_str()), "additional properties not allowed");
            }
            None => {}
        }
    }

    if !t.min_properties().le_count(map.len()) {
        push(
            errors,
            pointer,
            format!("object should have at least {} properties", t.min_properties()),
        );
    }
    if let Some(max) = t.max_properties() {
        if !max.ge_count(map.len()) {
            push(errors, pointer, format!("object should have at most {max} properties"));
        }
    }

    for name in t.required() {
        if !map.contains_key(name.as_str()) {
            push(errors, &pointer.key(name.as_str()), "property is missing");
        }
    }
}
