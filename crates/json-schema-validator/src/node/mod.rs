//! The closed set of schema shapes.
//!
//! A [`SchemaNode`] tree is built once by [`infer`](crate::infer) and is
//! read-only afterwards. Every constructor that can break an invariant
//! returns [`SchemaResult`](crate::SchemaResult), so holding a node means
//! holding a well-formed schema.

pub mod array;
pub mod constant;
pub mod numeric;
pub mod object;
pub mod string;

pub use array::{ArrayNode, ARRAY_FIELDS};
pub use constant::{ConstNode, EnumNode};
pub use numeric::{IntegerNode, NumberNode, NumericNode, NUMBER_FIELDS};
pub use object::{ObjectNode, Properties, OBJECT_FIELDS};
pub use string::{StringNode, STRING_FIELDS};

use crate::error::{SchemaError, SchemaResult};

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `true`
    AlwaysValid,
    /// `false`
    NeverValid,
    Boolean,
    Null,
    Integer(IntegerNode),
    Number(NumberNode),
    String(StringNode),
    Array(ArrayNode),
    Object(ObjectNode),
    Const(ConstNode),
    Enum(EnumNode),
    Not(Box<SchemaNode>),
    OneOf(Branches),
    AnyOf(Branches),
}

impl SchemaNode {
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::AlwaysValid => "always",
            SchemaNode::NeverValid => "never",
            SchemaNode::Boolean => "boolean",
            SchemaNode::Null => "null",
            SchemaNode::Integer(_) => "integer",
            SchemaNode::Number(_) => "number",
            SchemaNode::String(_) => "string",
            SchemaNode::Array(_) => "array",
            SchemaNode::Object(_) => "object",
            SchemaNode::Const(_) => "const",
            SchemaNode::Enum(_) => "enum",
            SchemaNode::Not(_) => "not",
            SchemaNode::OneOf(_) => "oneOf",
            SchemaNode::AnyOf(_) => "anyOf",
        }
    }

    pub fn not(inner: SchemaNode) -> Self {
        SchemaNode::Not(Box::new(inner))
    }
}

/// The non-empty branch list of `oneOf` / `anyOf`.
#[derive(Debug, Clone, PartialEq)]
pub struct Branches(Vec<SchemaNode>);

impl Branches {
    pub fn new(branches: Vec<SchemaNode>) -> SchemaResult<Self> {
        if branches.is_empty() {
            return Err(SchemaError::invalid("at least one nested schema is required"));
        }
        Ok(Branches(branches))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaNode> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SchemaNode] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Branches {
    type Item = &'a SchemaNode;
    type IntoIter = std::slice::Iter<'a, SchemaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
