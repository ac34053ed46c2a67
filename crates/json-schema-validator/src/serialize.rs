//! Schema tree back to JSON Schema text form.
//!
//! Output is canonical: every typed node carries an explicit `type`,
//! default-valued keywords are omitted, and exclusive bounds use the numeric
//! draft-07 form. Inferring the output again yields an equal tree.

use serde_json::{Map, Value};

use crate::model::{Interval, Multiplier};
use crate::node::constant::integer_value;
use crate::node::*;

impl SchemaNode {
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::AlwaysValid => Value::Bool(true),
            SchemaNode::NeverValid => Value::Bool(false),
            SchemaNode::Boolean => typed("boolean").into(),
            SchemaNode::Null => typed("null").into(),
            SchemaNode::Integer(t) => {
                let mut out = typed("integer");
                numeric_fields(&mut out, t.multiple_of(), t.range(), integer_value);
                out.into()
            }
            SchemaNode::Number(t) => {
                let mut out = typed("number");
                numeric_fields(&mut out, t.multiple_of(), t.range(), Value::from);
                out.into()
            }
            SchemaNode::String(t) => {
                let mut out = typed("string");
                if t.min_length().value() > 0 {
                    out.insert("minLength".into(), t.min_length().value().into());
                }
                if let Some(max) = t.max_length() {
                    out.insert("maxLength".into(), max.value().into());
                }
                if let Some(pattern) = t.pattern() {
                    out.insert("pattern".into(), pattern.as_str().into());
                }
                if let Some(format) = t.format() {
                    out.insert("format".into(), format.name().into());
                }
                out.into()
            }
            SchemaNode::Array(t) => {
                let mut out = typed("array");
                if let Some(items) = t.items() {
                    out.insert("items".into(), items.to_value());
                }
                if t.min_items().value() > 0 {
                    out.insert("minItems".into(), t.min_items().value().into());
                }
                if let Some(max) = t.max_items() {
                    out.insert("maxItems".into(), max.value().into());
                }
                if t.unique_items() {
                    out.insert("uniqueItems".into(), true.into());
                }
                if let Some(contains) = t.contains() {
                    out.insert("contains".into(), contains.to_value());
                }
                out.into()
            }
            SchemaNode::Object(t) => {
                let mut out = typed("object");
                if let Some(properties) = t.properties() {
                    let properties: Map<String, Value> = properties
                        .iter()
                        .map(|(name, node)| (name.to_string(), node.to_value()))
                        .collect();
                    out.insert("properties".into(), properties.into());
                }
                if !t.required().is_empty() {
                    let required: Vec<Value> = t.required().iter().map(|n| n.as_str().into()).collect();
                    out.insert("required".into(), required.into());
                }
                if !t.additional_properties() {
                    out.insert("additionalProperties".into(), false.into());
                }
                if t.min_properties().value() > 0 {
                    out.insert("minProperties".into(), t.min_properties().value().into());
                }
                if let Some(max) = t.max_properties() {
                    out.insert("maxProperties".into(), max.value().into());
                }
                out.into()
            }
            SchemaNode::Const(t) => keyword("const", t.to_value()),
            SchemaNode::Enum(t) => keyword("enum", t.values().to_vec().into()),
            SchemaNode::Not(inner) => keyword("not", inner.to_value()),
            SchemaNode::OneOf(branches) => keyword("oneOf", branch_values(branches)),
            SchemaNode::AnyOf(branches) => keyword("anyOf", branch_values(branches)),
        }
    }
}

fn typed(name: &str) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("type".into(), name.into());
    out
}

fn keyword(name: &str, value: Value) -> Value {
    let mut out = Map::new();
    out.insert(name.into(), value);
    out.into()
}

fn branch_values(branches: &Branches) -> Value {
    branches.iter().map(SchemaNode::to_value).collect::<Vec<_>>().into()
}

fn numeric_fields<T: PartialOrd + Copy>(
    out: &mut Map<String, Value>,
    multiple_of: Option<Multiplier<T>>,
    range: &Interval<T>,
    to_json: fn(T) -> Value,
) {
    if let Some(m) = multiple_of {
        out.insert("multipleOf".into(), to_json(m.value()));
    }
    if let Some(lower) = range.lower() {
        let key = if lower.exclusive { "exclusiveMinimum" } else { "minimum" };
        out.insert(key.into(), to_json(lower.value));
    }
    if let Some(upper) = range.upper() {
        let key = if upper.exclusive { "exclusiveMaximum" } else { "maximum" };
        out.insert(key.into(), to_json(upper.value));
    }
}
