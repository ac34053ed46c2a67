use serde_json::{Map, Number, Value};

use crate::literal::{as_float, as_i128, literal_eq, JsonKind};

/// A `const` literal, tagged with the runtime kind it requires.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstNode {
    Integer(i128),
    Number(f64),
    String(String),
    Boolean(bool),
    Array(Vec<Value>),
    Object(Map<String, Value>),
    Null,
}

impl ConstNode {
    /// Classifies a literal by its runtime kind. Returns `None` only for
    /// integers outside the `i128` range.
    pub fn from_literal(literal: &Value) -> Option<Self> {
        Some(match literal {
            Value::Null => ConstNode::Null,
            Value::Bool(b) => ConstNode::Boolean(*b),
            Value::Number(n) => match as_float(n) {
                Some(f) => ConstNode::Number(f),
                None => ConstNode::Integer(as_i128(n)?),
            },
            Value::String(s) => ConstNode::String(s.clone()),
            Value::Array(items) => ConstNode::Array(items.clone()),
            Value::Object(map) => ConstNode::Object(map.clone()),
        })
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            ConstNode::Integer(_) => JsonKind::Integer,
            ConstNode::Number(_) => JsonKind::Number,
            ConstNode::String(_) => JsonKind::String,
            ConstNode::Boolean(_) => JsonKind::Boolean,
            ConstNode::Array(_) => JsonKind::Array,
            ConstNode::Object(_) => JsonKind::Object,
            ConstNode::Null => JsonKind::Null,
        }
    }

    /// The literal as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            ConstNode::Integer(n) => integer_value(*n),
            ConstNode::Number(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            ConstNode::String(s) => Value::String(s.clone()),
            ConstNode::Boolean(b) => Value::Bool(*b),
            ConstNode::Array(items) => Value::Array(items.clone()),
            ConstNode::Object(map) => Value::Object(map.clone()),
            ConstNode::Null => Value::Null,
        }
    }

    /// Deep equality against a value already known to be of [`Self::kind`].
    pub fn equals(&self, value: &Value) -> bool {
        match (self, value) {
            (ConstNode::Integer(n), Value::Number(v)) => as_i128(v) == Some(*n),
            (ConstNode::Number(f), Value::Number(v)) => as_float(v) == Some(*f),
            (ConstNode::String(s), Value::String(v)) => s == v,
            (ConstNode::Boolean(b), Value::Bool(v)) => b == v,
            (ConstNode::Array(items), Value::Array(v)) => {
                items.len() == v.len() && items.iter().zip(v).all(|(a, b)| literal_eq(a, b))
            }
            (ConstNode::Object(map), Value::Object(v)) => {
                map.len() == v.len()
                    && map
                        .iter()
                        .all(|(key, a)| v.get(key).is_some_and(|b| literal_eq(a, b)))
            }
            (ConstNode::Null, Value::Null) => true,
            _ => false,
        }
    }
}

/// An `enum` literal list, compared by deep equality.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumNode {
    values: Vec<Value>,
}

impl EnumNode {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.iter().any(|v| literal_eq(v, value))
    }
}

pub(crate) fn integer_value(n: i128) -> Value {
    Number::from_i128(n).map_or(Value::Null, Value::Number)
}
