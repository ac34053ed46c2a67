//! Schema loading: text → JSON tree → `$schema` extraction → inference.

use serde_json::{Map, Value};
use url::Url;

use crate::error::{SchemaError, SchemaResult};
use crate::inference::{Inference, DEFAULT_MAX_DEPTH};
use crate::schema::JsonSchema;

/// Namespace assumed when a document has no usable `$schema`.
pub const DEFAULT_NAMESPACE: &str = "http://json-schema.org/schema#";

#[derive(Debug, Clone)]
pub struct FactoryOptions {
    default_namespace: Option<Url>,
    max_depth: usize,
}

impl Default for FactoryOptions {
    fn default() -> Self {
        Self {
            default_namespace: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FactoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_namespace(mut self, namespace: Url) -> Self {
        self.default_namespace = Some(namespace);
        self
    }

    /// Deepest accepted nesting of schema fragments; the root is depth 0.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn resolve_default_namespace(&self) -> SchemaResult<Url> {
        match &self.default_namespace {
            Some(url) => Ok(url.clone()),
            None => parse_namespace(DEFAULT_NAMESPACE),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JsonSchemaFactory {
    options: FactoryOptions,
}

impl JsonSchemaFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FactoryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FactoryOptions {
        &self.options
    }

    /// Loads a schema from JSON text.
    pub fn from(&self, text: &str) -> SchemaResult<JsonSchema> {
        let value: Value = serde_json::from_str(text)?;
        self.from_value(value)
    }

    /// Loads a schema from an already parsed document.
    pub fn from_value(&self, document: Value) -> SchemaResult<JsonSchema> {
        let (namespace, body) = match document {
            Value::Object(fields) => {
                let namespace = match fields.get("$schema") {
                    Some(Value::String(ns)) => parse_namespace(ns)?,
                    _ => self.options.resolve_default_namespace()?,
                };
                let body: Map<String, Value> = fields
                    .into_iter()
                    .filter(|(key, _)| key != "$schema")
                    .collect();
                (namespace, Value::Object(body))
            }
            other => (self.options.resolve_default_namespace()?, other),
        };

        let root = Inference::new(self.options.max_depth).infer(&body)?;
        tracing::debug!(namespace = %namespace, root = root.kind(), "schema loaded");
        Ok(JsonSchema::new(root, namespace))
    }
}

fn parse_namespace(namespace: &str) -> SchemaResult<Url> {
    Url::parse(namespace).map_err(|e| SchemaError::InvalidNamespace {
        namespace: namespace.to_string(),
        reason: e.to_string(),
    })
}
