//! Schema shape inference and the re-serialization round trip.

use json_schema_validator::{infer, JsonSchemaFactory, SchemaError, SchemaNode};
use serde_json::{json, Value};

fn kind(schema: Value) -> &'static str {
    infer(&schema)
        .unwrap_or_else(|e| panic!("{schema} failed: {e}"))
        .kind()
}

#[test]
fn test_structural_inference_matrix() {
    let cases = [
        (json!({}), "object"),
        (json!({"properties": {}}), "object"),
        (json!({"additionalProperties": false}), "object"),
        (json!({"items": {}}), "array"),
        (json!({"uniqueItems": true, "contains": {"type": "null"}}), "array"),
        (json!({"multipleOf": 2}), "number"),
        (json!({"exclusiveMaximum": 3}), "number"),
        (json!({"format": "email"}), "string"),
        (json!({"pattern": "^a", "maxLength": 3}), "string"),
        (json!({"const": "x", "minLength": 10}), "const"),
        (json!({"enum": [], "minLength": 10}), "enum"),
    ];
    for (schema, expected) in cases {
        assert_eq!(kind(schema.clone()), expected, "{schema}");
    }
}

#[test]
fn test_typed_inference_matrix() {
    for name in ["integer", "number", "string", "boolean", "null", "object", "array"] {
        assert_eq!(kind(json!({ "type": name })), name);
    }
}

#[test]
fn test_mixed_keywords_are_unrecognizable() {
    for schema in [
        json!({"minLength": 1, "minimum": 1}),
        json!({"items": {}, "properties": {}}),
        json!({"title": "no constraints"}),
    ] {
        assert!(
            matches!(infer(&schema), Err(SchemaError::UnrecognizableSchema(_))),
            "{schema}"
        );
    }
}

#[test]
fn test_round_trip() {
    let schemas = [
        json!(true),
        json!(false),
        json!({"type": "boolean"}),
        json!({"type": "null"}),
        json!({"type": "integer", "multipleOf": 3, "minimum": -10, "exclusiveMaximum": 99}),
        json!({"type": "integer", "maximum": u64::MAX}),
        json!({"type": "number", "multipleOf": 0.5, "exclusiveMinimum": 0.0, "maximum": 12.75}),
        json!({"type": "string", "minLength": 1, "maxLength": 8, "pattern": "/^[a-z]+$/i", "format": "hostname"}),
        json!({"type": "array", "items": {"type": "string"}, "minItems": 1, "maxItems": 3, "uniqueItems": true, "contains": {"const": "x"}}),
        json!({
            "type": "object",
            "properties": {"a": {"type": "integer"}, "b": {"enum": [1, "two", null]}},
            "required": ["a"],
            "additionalProperties": false,
            "minProperties": 1,
            "maxProperties": 2
        }),
        json!({"const": {"nested": [1, 2.5, "x"]}}),
        json!({"not": {"anyOf": [{"type": "string"}, {"oneOf": [true, false]}]}}),
    ];
    for schema in schemas {
        let node = infer(&schema).unwrap();
        let serialized = node.to_value();
        assert_eq!(serialized, schema, "canonical form of {schema}");
        assert_eq!(infer(&serialized).unwrap(), node, "re-inference of {schema}");
    }
}

#[test]
fn test_round_trip_canonicalizes_defaults() {
    let node = infer(&json!({
        "minItems": 0,
        "uniqueItems": false,
        "items": {"minimum": 1, "exclusiveMinimum": false}
    }))
    .unwrap();
    let canonical = node.to_value();
    assert_eq!(
        canonical,
        json!({"type": "array", "items": {"type": "number", "minimum": 1.0}})
    );
    assert_eq!(infer(&canonical).unwrap(), node);
}

#[test]
fn test_schema_serializes_with_namespace() {
    let schema = JsonSchemaFactory::new()
        .from(r#"{"$schema": "http://json-schema.org/draft-07/schema#", "type": "null"}"#)
        .unwrap();
    assert_eq!(
        schema.to_string(),
        r#"{"$schema":"http://json-schema.org/draft-07/schema#","type":"null"}"#
    );

    let reloaded = JsonSchemaFactory::new().from_value(schema.to_value()).unwrap();
    assert_eq!(reloaded, schema);
}

#[test]
fn test_node_accessors() {
    let node = infer(&json!({"oneOf": [{"type": "null"}, true]})).unwrap();
    let SchemaNode::OneOf(branches) = node else {
        panic!("expected oneOf");
    };
    let kinds: Vec<_> = branches.iter().map(SchemaNode::kind).collect();
    assert_eq!(kinds, ["null", "always"]);
}
