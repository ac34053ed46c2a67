use super::SchemaNode;
use crate::error::{SchemaError, SchemaResult};
use crate::model::PositiveInt;

pub const ARRAY_FIELDS: &[&str] = &["items", "minItems", "maxItems", "uniqueItems", "contains"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayNode {
    items: Option<Box<SchemaNode>>,
    min_items: PositiveInt,
    max_items: Option<PositiveInt>,
    unique_items: bool,
    contains: Option<Box<SchemaNode>>,
}

impl ArrayNode {
    pub fn new(
        items: Option<SchemaNode>,
        min_items: PositiveInt,
        max_items: Option<PositiveInt>,
        unique_items: bool,
        contains: Option<SchemaNode>,
    ) -> SchemaResult<Self> {
        if max_items.is_some_and(|max| max < min_items) {
            return Err(SchemaError::invalid(
                "maxItems must be greater or equal to minItems",
            ));
        }
        Ok(Self {
            items: items.map(Box::new),
            min_items,
            max_items,
            unique_items,
            contains: contains.map(Box::new),
        })
    }

    pub fn items(&self) -> Option<&SchemaNode> {
        self.items.as_deref()
    }

    pub fn min_items(&self) -> PositiveInt {
        self.min_items
    }

    pub fn max_items(&self) -> Option<PositiveInt> {
        self.max_items
    }

    pub fn unique_items(&self) -> bool {
        self.unique_items
    }

    pub fn contains(&self) -> Option<&SchemaNode> {
        self.contains.as_deref()
    }
}
