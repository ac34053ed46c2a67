//! End-to-end validation through the factory facade.

use json_schema_validator::{JsonSchemaFactory, ValidationResult};
use serde_json::{json, Value};

fn validate(schema: &str, value: Value) -> ValidationResult {
    JsonSchemaFactory::new()
        .from(schema)
        .unwrap_or_else(|e| panic!("schema {schema} failed to load: {e}"))
        .validate(&value)
}

fn errors(schema: &str, value: Value) -> Vec<(String, String)> {
    validate(schema, value)
        .iter()
        .map(|e| (e.pointer().to_string(), e.message().to_string()))
        .collect()
}

fn at(pointer: &str, message: &str) -> (String, String) {
    (pointer.to_string(), message.to_string())
}

// ------------------------------------------------------------------ Scenarios

#[test]
fn test_pointer_into_nested_array() {
    let schema = r#"{"type":"object","properties":{"a":{"type":"array","items":{"type":"integer"}}}}"#;
    assert_eq!(
        errors(schema, json!({"a": [1, "x", 3]})),
        vec![at("/a/1", "element should be an integer")]
    );
}

#[test]
fn test_exclusive_minimum_flag() {
    let schema = r#"{"type":"integer","minimum":5,"exclusiveMinimum":true}"#;
    assert_eq!(errors(schema, json!(5)), vec![at("/", "element should be greater than 5")]);
    assert!(validate(schema, json!(6)).is_successful());
}

#[test]
fn test_inclusive_bounds_by_default() {
    let schema = r#"{"type":"integer","minimum":5,"maximum":7}"#;
    assert!(validate(schema, json!(5)).is_successful());
    assert!(validate(schema, json!(7)).is_successful());
    assert_eq!(
        errors(schema, json!(8)),
        vec![at("/", "element should be less than or equal to 7")]
    );
    assert_eq!(
        errors(schema, json!(4)),
        vec![at("/", "element should be greater than or equal to 5")]
    );
}

#[test]
fn test_numeric_exclusive_bounds() {
    let schema = r#"{"type":"number","exclusiveMinimum":0,"exclusiveMaximum":1}"#;
    assert!(validate(schema, json!(0.5)).is_successful());
    assert_eq!(errors(schema, json!(0.0)), vec![at("/", "element should be greater than 0")]);
    assert_eq!(errors(schema, json!(1.0)), vec![at("/", "element should be less than 1")]);
}

#[test]
fn test_const_object() {
    let schema = r#"{"const":{"a":1}}"#;
    assert!(validate(schema, json!({"a": 1})).is_successful());
    assert_eq!(
        errors(schema, json!({"a": 2})),
        vec![at("/", "element should be equal to {a=1}")]
    );
    assert_eq!(errors(schema, json!([1])), vec![at("/", "element should be an object")]);
}

#[test]
fn test_not() {
    let schema = r#"{"not":{"type":"integer"}}"#;
    assert!(validate(schema, json!("x")).is_successful());
    assert_eq!(errors(schema, json!(42)), vec![at("/", "element should not be valid")]);
}

#[test]
fn test_one_of_matches_both_branches() {
    let schema = r#"{"oneOf":[{"type":"string","minLength":2},{"type":"string","maxLength":4}]}"#;
    assert_eq!(
        errors(schema, json!("TEST")),
        vec![at("/", "element matches more than one of the nested schema")]
    );
    assert!(validate(schema, json!("LONGER")).is_successful());
    assert!(validate(schema, json!("T")).is_successful());
    assert_eq!(
        errors(schema, json!(3)),
        vec![at("/", "element does not match any of the nested schema")]
    );
}

#[test]
fn test_multiple_of_decimal() {
    let schema = r#"{"type":"number","multipleOf":0.01}"#;
    assert!(validate(schema, json!(19.99)).is_successful());
    assert!(validate(schema, json!(0.07)).is_successful());
    assert_eq!(
        errors(schema, json!(0.075)),
        vec![at("/", "element should be a multiple of 0.01")]
    );
}

#[test]
fn test_integer_above_u64_range() {
    let schema = JsonSchemaFactory::new()
        .from(r#"{"type": "integer", "multipleOf": 10}"#)
        .unwrap();
    assert!(schema.validate_str("100000000000000000000").unwrap().is_successful());
    let result = schema.validate_str("100000000000000000001").unwrap();
    assert_eq!(result.errors()[0].message(), "element should be a multiple of 10");
}

// --------------------------------------------------------------- Deep trees

const PRODUCTS: &str = r#"{
    "type": "object",
    "properties": {
        "products": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string"},
                    "price": {"type": "number"},
                    "returned": {"type": "boolean"}
                }
            }
        },
        "date": {"type": "null"}
    }
}"#;

#[test]
fn test_array_index_in_property_pointer() {
    let value = json!({
        "products": [
            {"id": null, "name": "product1", "price": 1.5, "returned": false},
            {"id": 1, "name": null, "price": 1.5, "returned": false},
            {"id": 1, "name": "product1", "price": null, "returned": false},
            {"id": 1, "name": "product1", "price": 1.5, "returned": null}
        ],
        "date": "this is not null"
    });
    assert_eq!(
        errors(PRODUCTS, value),
        vec![
            at("/products/0/id", "element should be an integer"),
            at("/products/1/name", "element should be a string"),
            at("/products/2/price", "element should be a number"),
            at("/products/3/returned", "element should be a boolean"),
            at("/date", "element should be null"),
        ]
    );
}

#[test]
fn test_errors_from_any_depth() {
    let schema = r#"{
        "type": "object",
        "properties": {
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": {"type": "integer"},
                        "categories": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "name": {"type": "string"},
                                    "tags": {"type": "array", "items": {"type": "string"}, "minItems": 1}
                                }
                            }
                        }
                    }
                }
            }
        }
    }"#;
    let value = json!({
        "products": [
            {"id": null, "categories": []},
            {"id": 1, "categories": [{"name": null, "tags": ["red"]}]},
            {"id": 1, "categories": [
                {"name": "something", "tags": ["red"]},
                {"name": "another", "tags": [true]}
            ]},
            {"id": 1, "categories": [{"name": "something", "tags": []}]}
        ]
    });
    assert_eq!(
        errors(schema, value),
        vec![
            at("/products/0/id", "element should be an integer"),
            at("/products/1/categories/0/name", "element should be a string"),
            at("/products/2/categories/1/tags/0", "element should be a string"),
            at("/products/3/categories/0/tags", "array should contain at least 1 items"),
        ]
    );
}

#[test]
fn test_pointer_escaping_in_keys() {
    let schema = r#"{"properties": {"a/b": {"type": "null"}, "m~n": {"type": "null"}}}"#;
    assert_eq!(
        errors(schema, json!({"a/b": 1, "m~n": 2})),
        vec![
            at("/a~1b", "element should be null"),
            at("/m~0n", "element should be null"),
        ]
    );
}

// --------------------------------------------------------------- Objects

#[test]
fn test_additional_properties_are_reported_once_each() {
    let schema = r#"{
        "properties": {"a": {"type": "integer"}},
        "additionalProperties": false
    }"#;
    assert_eq!(
        errors(schema, json!({"a": "x", "b": 1, "c": 2})),
        vec![
            at("/a", "element should be an integer"),
            at("/b", "additional properties not allowed"),
            at("/c", "additional properties not allowed"),
        ]
    );
}

#[test]
fn test_required_and_counts() {
    let schema = r#"{"required": ["id", "name"], "minProperties": 3}"#;
    assert_eq!(
        errors(schema, json!({"id": 1})),
        vec![
            at("/", "object should have at least 3 properties"),
            at("/name", "property is missing"),
        ]
    );
}

// --------------------------------------------------------------- Strings

#[test]
fn test_formats() {
    let cases = [
        ("date", "2018-03-10+01:00", "THIS IS NOT A VALID DATE", "element should be a date"),
        ("time", "17:54:20+01:00", "THIS IS NOT A VALID TIME", "element should be a time"),
        (
            "date-time",
            "2018-03-10T17:54:20+01:00",
            "THIS IS NOT A VALID DATE-TIME",
            "element should be a date-time",
        ),
        ("email", "user@example.com", "THIS IS NOT A VALID EMAIL ADDRESS", "element should be an email address"),
        ("hostname", "www.example.com", "THIS IS NOT A VALID HOSTNAME", "element should be a host name"),
        ("ipv4", "10.0.0.1", "10.0.0", "element should be an IPv4 address"),
        ("ipv6", "fe80::1", "fe80:::1", "element should be an IPv6 address"),
        ("uri", "https://example.com/a?b#c", "not a uri", "element should be a URI"),
    ];
    for (format, good, bad, message) in cases {
        let schema = format!(r#"{{"type": "string", "format": "{format}"}}"#);
        assert!(validate(&schema, json!(good)).is_successful(), "{format}: {good}");
        assert_eq!(errors(&schema, json!(bad)), vec![at("/", message)], "{format}: {bad}");
    }
}

#[test]
fn test_pattern_literal_flags() {
    let schema = r#"{"pattern": "/^[a-z]+$/i"}"#;
    assert!(validate(schema, json!("Hello")).is_successful());
    assert_eq!(errors(schema, json!("Hello!")), vec![at("/", "element does not match pattern")]);
}

// --------------------------------------------------------------- Facade

#[test]
fn test_validate_str() {
    let schema = JsonSchemaFactory::new().from(r#"{"type": "array", "maxItems": 1}"#).unwrap();
    let result = schema.validate_str("[1, 2]").unwrap();
    assert_eq!(result.len(), 1);
    assert!(schema.validate_str("[1,").is_err());
}

#[test]
fn test_schema_is_shareable_across_threads() {
    let schema = std::sync::Arc::new(JsonSchemaFactory::new().from(PRODUCTS).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let schema = std::sync::Arc::clone(&schema);
            std::thread::spawn(move || schema.validate(&json!({"date": i})).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
