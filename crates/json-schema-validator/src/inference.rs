//! Schema inference: untyped JSON fragment to [`SchemaNode`].
//!
//! Explicit keywords decide first, in this order: `const`, `enum`, `not`,
//! `oneOf`, `anyOf`, `type`. A fragment carrying none of them is classified
//! by its key set: the first of object, array, number and string whose known
//! keywords include every key of the fragment wins. The empty fragment `{}`
//! is therefore an unconstrained object schema.
//!
//! Once a variant is chosen, keys it does not know are ignored.

use indexmap::IndexSet;
use serde_json::{Map, Value};

use crate::error::{SchemaError, SchemaResult};
use crate::format::StringFormat;
use crate::literal::{as_i128, is_integral};
use crate::model::{CompiledPattern, Interval, LowerBound, Multiplier, PositiveInt, PropertyName, UpperBound};
use crate::node::*;

/// Nesting limit used by [`infer`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Infers a schema tree with the default nesting limit.
pub fn infer(schema: &Value) -> SchemaResult<SchemaNode> {
    Inference::new(DEFAULT_MAX_DEPTH).infer(schema)
}

/// The inference engine. Holds only its configuration.
#[derive(Debug, Clone, Copy)]
pub struct Inference {
    max_depth: usize,
}

type Fields = Map<String, Value>;

impl Inference {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn infer(&self, schema: &Value) -> SchemaResult<SchemaNode> {
        self.node(schema, 0)
    }

    fn node(&self, schema: &Value, depth: usize) -> SchemaResult<SchemaNode> {
        if depth > self.max_depth {
            return Err(SchemaError::TooDeep {
                limit: self.max_depth,
            });
        }
        let fields = match schema {
            Value::Bool(true) => return Ok(SchemaNode::AlwaysValid),
            Value::Bool(false) => return Ok(SchemaNode::NeverValid),
            Value::Object(fields) => fields,
            _ => return Err(SchemaError::UnrecognizableSchema(schema.clone())),
        };

        if let Some(literal) = fields.get("const") {
            tracing::trace!(depth, rule = "const", "classified schema fragment");
            let node = ConstNode::from_literal(literal)
                .ok_or_else(|| SchemaError::invalid(format!("const {literal} is outside the supported integer range")))?;
            return Ok(SchemaNode::Const(node));
        }
        if let Some(values) = fields.get("enum") {
            tracing::trace!(depth, rule = "enum", "classified schema fragment");
            let Value::Array(values) = values else {
                return Err(SchemaError::invalid("enum must be an array"));
            };
            return Ok(SchemaNode::Enum(EnumNode::new(values.clone())));
        }
        if let Some(inner) = fields.get("not") {
            tracing::trace!(depth, rule = "not", "classified schema fragment");
            return Ok(SchemaNode::not(self.node(inner, depth + 1)?));
        }
        if let Some(branches) = fields.get("oneOf") {
            tracing::trace!(depth, rule = "oneOf", "classified schema fragment");
            return Ok(SchemaNode::OneOf(self.branches("oneOf", branches, depth)?));
        }
        if let Some(branches) = fields.get("anyOf") {
            tracing::trace!(depth, rule = "anyOf", "classified schema fragment");
            return Ok(SchemaNode::AnyOf(self.branches("anyOf", branches, depth)?));
        }
        if let Some(type_) = field(fields, "type") {
            let Value::String(type_) = type_ else {
                return Err(SchemaError::UnsupportedSchemaType(type_.to_string()));
            };
            tracing::trace!(depth, rule = "type", schema_type = %type_, "classified schema fragment");
            return match type_.as_str() {
                "integer" => Ok(SchemaNode::Integer(integer_node(fields)?)),
                "number" => Ok(SchemaNode::Number(number_node(fields)?)),
                "string" => Ok(SchemaNode::String(string_node(fields)?)),
                "boolean" => Ok(SchemaNode::Boolean),
                "null" => Ok(SchemaNode::Null),
                "object" => Ok(SchemaNode::Object(self.object_node(fields, depth)?)),
                "array" => Ok(SchemaNode::Array(self.array_node(fields, depth)?)),
                other => Err(SchemaError::UnsupportedSchemaType(other.to_string())),
            };
        }

        if is_subset(fields, OBJECT_FIELDS) {
            tracing::trace!(depth, rule = "structural", kind = "object", "classified schema fragment");
            Ok(SchemaNode::Object(self.object_node(fields, depth)?))
        } else if is_subset(fields, ARRAY_FIELDS) {
            tracing::trace!(depth, rule = "structural", kind = "array", "classified schema fragment");
            Ok(SchemaNode::Array(self.array_node(fields, depth)?))
        } else if is_subset(fields, NUMBER_FIELDS) {
            tracing::trace!(depth, rule = "structural", kind = "number", "classified schema fragment");
            Ok(SchemaNode::Number(number_node(fields)?))
        } else if is_subset(fields, STRING_FIELDS) {
            tracing::trace!(depth, rule = "structural", kind = "string", "classified schema fragment");
            Ok(SchemaNode::String(string_node(fields)?))
        } else {
            Err(SchemaError::UnrecognizableSchema(schema.clone()))
        }
    }

    fn branches(&self, keyword: &str, value: &Value, depth: usize) -> SchemaResult<Branches> {
        let Value::Array(items) = value else {
            return Err(SchemaError::invalid(format!("{keyword} must be an array")));
        };
        let nodes = items
            .iter()
            .map(|item| self.node(item, depth + 1))
            .collect::<SchemaResult<Vec<_>>>()?;
        Branches::new(nodes)
    }

    fn array_node(&self, fields: &Fields, depth: usize) -> SchemaResult<ArrayNode> {
        let items = field(fields, "items")
            .map(|v| self.node(v, depth + 1))
            .transpose()?;
        let contains = field(fields, "contains")
            .map(|v| self.node(v, depth + 1))
            .transpose()?;
        ArrayNode::new(
            items,
            positive_int(fields, "minItems")?.unwrap_or_default(),
            positive_int(fields, "maxItems")?,
            boolean(fields, "uniqueItems")?.unwrap_or(false),
            contains,
        )
    }

    fn object_node(&self, fields: &Fields, depth: usize) -> SchemaResult<ObjectNode> {
        let properties = match field(fields, "properties") {
            None => None,
            Some(Value::Object(map)) => {
                let mut properties = Properties::with_capacity(map.len());
                for (name, schema) in map {
                    properties.insert(PropertyName::new(name.as_str())?, self.node(schema, depth + 1)?);
                }
                Some(properties)
            }
            Some(_) => return Err(SchemaError::invalid("properties must be an object")),
        };

        let mut required = IndexSet::new();
        match field(fields, "required") {
            None => {}
            Some(Value::Array(names)) => {
                for name in names {
                    let Value::String(name) = name else {
                        return Err(SchemaError::invalid("required must be an array of strings"));
                    };
                    required.insert(PropertyName::new(name.as_str())?);
                }
            }
            Some(_) => return Err(SchemaError::invalid("required must be an array of strings")),
        }

        ObjectNode::new(
            properties,
            required,
            boolean(fields, "additionalProperties")?.unwrap_or(true),
            positive_int(fields, "minProperties")?.unwrap_or_default(),
            positive_int(fields, "maxProperties")?,
        )
    }
}

fn is_subset(fields: &Fields, known: &[&str]) -> bool {
    fields
        .iter()
        .all(|(key, value)| value.is_null() || known.contains(&key.as_str()))
}

/// A keyword's value; explicit `null` counts as absent.
fn field<'a>(fields: &'a Fields, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn positive_int(fields: &Fields, key: &str) -> SchemaResult<Option<PositiveInt>> {
    field(fields, key)
        .map(|v| PositiveInt::new(integer_literal(key, v)?))
        .transpose()
}

fn boolean(fields: &Fields, key: &str) -> SchemaResult<Option<bool>> {
    field(fields, key)
        .map(|v| {
            v.as_bool()
                .ok_or_else(|| SchemaError::invalid(format!("{key} must be a boolean")))
        })
        .transpose()
}

fn integer_literal(key: &str, v: &Value) -> SchemaResult<i128> {
    match v {
        Value::Number(n) if is_integral(n) => as_i128(n)
            .ok_or_else(|| SchemaError::invalid(format!("{key} is outside the supported integer range"))),
        _ => Err(SchemaError::invalid(format!("{key} must be an integer"))),
    }
}

fn number_literal(key: &str, v: &Value) -> SchemaResult<f64> {
    v.as_f64()
        .ok_or_else(|| SchemaError::invalid(format!("{key} must be a number")))
}

fn integer_node(fields: &Fields) -> SchemaResult<IntegerNode> {
    let multiple_of = field(fields, "multipleOf")
        .map(|v| Multiplier::<i128>::new(integer_literal("multipleOf", v)?))
        .transpose()?;
    Ok(IntegerNode::new(multiple_of, interval(fields, integer_literal)?))
}

fn number_node(fields: &Fields) -> SchemaResult<NumberNode> {
    let multiple_of = field(fields, "multipleOf")
        .map(|v| Multiplier::<f64>::new(number_literal("multipleOf", v)?))
        .transpose()?;
    Ok(NumberNode::new(multiple_of, interval(fields, number_literal)?))
}

/// Reads `minimum`/`maximum` and both forms of `exclusiveMinimum` /
/// `exclusiveMaximum`: a boolean modifies the matching bound, a number is an
/// exclusive bound of its own and the tighter of the two is kept.
fn interval<T: PartialOrd + Copy>(
    fields: &Fields,
    read: fn(&str, &Value) -> SchemaResult<T>,
) -> SchemaResult<Interval<T>> {
    let mut lower = field(fields, "minimum")
        .map(|v| read("minimum", v).map(LowerBound::inclusive))
        .transpose()?;
    let mut upper = field(fields, "maximum")
        .map(|v| read("maximum", v).map(UpperBound::inclusive))
        .transpose()?;

    match field(fields, "exclusiveMinimum") {
        None | Some(Value::Bool(false)) => {}
        Some(Value::Bool(true)) => lower = lower.map(|b| LowerBound::exclusive(b.value)),
        Some(v @ Value::Number(_)) => {
            let bound = LowerBound::exclusive(read("exclusiveMinimum", v)?);
            lower = Some(lower.map_or(bound, |b| b.tighter(bound)));
        }
        Some(_) => {
            return Err(SchemaError::invalid(
                "exclusiveMinimum must be a boolean or a number",
            ))
        }
    }
    match field(fields, "exclusiveMaximum") {
        None | Some(Value::Bool(false)) => {}
        Some(Value::Bool(true)) => upper = upper.map(|b| UpperBound::exclusive(b.value)),
        Some(v @ Value::Number(_)) => {
            let bound = UpperBound::exclusive(read("exclusiveMaximum", v)?);
            upper = Some(upper.map_or(bound, |b| b.tighter(bound)));
        }
        Some(_) => {
            return Err(SchemaError::invalid(
                "exclusiveMaximum must be a boolean or a number",
            ))
        }
    }

    Interval::new(lower, upper)
}

fn string_node(fields: &Fields) -> SchemaResult<StringNode> {
    let pattern = match field(fields, "pattern") {
        None => None,
        Some(Value::String(source)) => Some(CompiledPattern::compile(source)?),
        Some(_) => return Err(SchemaError::invalid("pattern must be a string")),
    };
    let format = match field(fields, "format") {
        None => None,
        Some(Value::String(name)) => Some(StringFormat::from_name(name)?),
        Some(_) => return Err(SchemaError::invalid("format must be a string")),
    };
    StringNode::new(
        positive_int(fields, "minLength")?.unwrap_or_default(),
        positive_int(fields, "maxLength")?,
        pattern,
        format,
    )
}
