use indexmap::{IndexMap, IndexSet};

use super::SchemaNode;
use crate::error::{SchemaError, SchemaResult};
use crate::model::{PositiveInt, PropertyName};

pub const OBJECT_FIELDS: &[&str] = &[
    "properties",
    "required",
    "additionalProperties",
    "minProperties",
    "maxProperties",
];

/// Declared properties, in schema order.
pub type Properties = IndexMap<PropertyName, SchemaNode>;

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectNode {
    properties: Option<Properties>,
    required: IndexSet<PropertyName>,
    additional_properties: bool,
    min_properties: PositiveInt,
    max_properties: Option<PositiveInt>,
}

impl Default for ObjectNode {
    fn default() -> Self {
        Self {
            properties: None,
            required: IndexSet::new(),
            additional_properties: true,
            min_properties: PositiveInt::ZERO,
            max_properties: None,
        }
    }
}

impl ObjectNode {
    pub fn new(
        properties: Option<Properties>,
        required: IndexSet<PropertyName>,
        additional_properties: bool,
        min_properties: PositiveInt,
        max_properties: Option<PositiveInt>,
    ) -> SchemaResult<Self> {
        let declared = properties.as_ref().map_or(0, IndexMap::len);
        if !additional_properties && !min_properties.le_count(declared) {
            return Err(SchemaError::invalid(
                "minProperties cannot be greater the defined properties if additionalProperties are not allowed",
            ));
        }
        if let Some(max) = max_properties {
            if min_properties > max {
                return Err(SchemaError::invalid(
                    "maxProperties must be greater or equal to minProperties",
                ));
            }
            if !max.ge_count(required.len()) {
                return Err(SchemaError::invalid(
                    "required properties cannot be greater than maxProperties",
                ));
            }
        }
        Ok(Self {
            properties,
            required,
            additional_properties,
            min_properties,
            max_properties,
        })
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref()?.get(name)
    }

    pub fn required(&self) -> &IndexSet<PropertyName> {
        &self.required
    }

    pub fn additional_properties(&self) -> bool {
        self.additional_properties
    }

    pub fn min_properties(&self) -> PositiveInt {
        self.min_properties
    }

    pub fn max_properties(&self) -> Option<PositiveInt> {
        self.max_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> IndexSet<PropertyName> {
        list.iter().map(|n| PropertyName::new(*n).unwrap()).collect()
    }

    fn props(list: &[&str]) -> Properties {
        list.iter()
            .map(|n| (PropertyName::new(*n).unwrap(), SchemaNode::AlwaysValid))
            .collect()
    }

    #[test]
    fn test_min_properties_beyond_closed_property_set() {
        let err = ObjectNode::new(Some(props(&["a"])), IndexSet::new(), false, PositiveInt::from(2), None);
        assert!(err.is_err());

        let ok = ObjectNode::new(Some(props(&["a", "b"])), IndexSet::new(), false, PositiveInt::from(2), None);
        assert!(ok.is_ok());

        let open = ObjectNode::new(Some(props(&["a"])), IndexSet::new(), true, PositiveInt::from(2), None);
        assert!(open.is_ok());
    }

    #[test]
    fn test_max_properties_invariants() {
        let err = ObjectNode::new(None, IndexSet::new(), true, PositiveInt::from(3), Some(PositiveInt::from(2)));
        assert!(err.is_err());

        let err = ObjectNode::new(None, names(&["a", "b", "c"]), true, PositiveInt::ZERO, Some(PositiveInt::from(2)));
        assert!(err.is_err());

        let ok = ObjectNode::new(None, names(&["a", "b"]), true, PositiveInt::ZERO, Some(PositiveInt::from(2)));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_property_lookup_by_str() {
        let node = ObjectNode::new(Some(props(&["a"])), IndexSet::new(), true, PositiveInt::ZERO, None).unwrap();
        assert_eq!(node.property("a"), Some(&SchemaNode::AlwaysValid));
        assert_eq!(node.property("b"), None);
    }
}
