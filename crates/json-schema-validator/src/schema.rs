use std::fmt;

use serde_json::Value;
use url::Url;

use crate::error::SchemaResult;
use crate::node::SchemaNode;
use crate::result::ValidationResult;
use crate::validator::validate;

/// A loaded schema: the root node plus its `$schema` namespace.
///
/// Built by [`JsonSchemaFactory`](crate::JsonSchemaFactory) and immutable
/// afterwards, so one instance can validate from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSchema {
    root: SchemaNode,
    namespace: Url,
}

impl JsonSchema {
    pub fn new(root: SchemaNode, namespace: Url) -> Self {
        Self { root, namespace }
    }

    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    pub fn namespace(&self) -> &Url {
        &self.namespace
    }

    pub fn validate(&self, value: &Value) -> ValidationResult {
        validate(&self.root, value)
    }

    /// Parses `text` as JSON and validates it.
    pub fn validate_str(&self, text: &str) -> SchemaResult<ValidationResult> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.validate(&value))
    }

    /// The schema document, `$schema` first. Boolean root schemas have no
    /// place for the namespace and serialize as the bare boolean.
    pub fn to_value(&self) -> Value {
        match self.root.to_value() {
            Value::Object(fields) => {
                let mut out = serde_json::Map::with_capacity(fields.len() + 1);
                out.insert("$schema".into(), self.namespace.as_str().into());
                out.extend(fields);
                Value::Object(out)
            }
            other => other,
        }
    }
}

impl fmt::Display for JsonSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
