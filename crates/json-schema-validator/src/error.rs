//! Schema-construction errors.
//!
//! Everything that can go wrong while turning schema text into a
//! [`SchemaNode`](crate::SchemaNode) tree lands here. Validation mismatches
//! are not errors; they are reported as [`ValidationError`](crate::ValidationError)
//! entries of a [`ValidationResult`](crate::ValidationResult).

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// A keyword carries a value that breaks a construction invariant.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid property name {name:?}: {reason}")]
    InvalidPropertyName { name: String, reason: &'static str },

    #[error("{pattern} is not a valid EcmaScript regular expression: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("invalid $schema namespace {namespace:?}: {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    #[error("unsupported JSON Schema type: {0}")]
    UnsupportedSchemaType(String),

    #[error("unrecognizable JSON Schema: {0}")]
    UnrecognizableSchema(Value),

    #[error("schema nesting exceeds the limit of {limit} levels")]
    TooDeep { limit: usize },

    /// The text handed to the factory is not JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SchemaError::InvalidArgument(message.into())
    }

    /// True for every failure caused by the schema document's content, as
    /// opposed to the text not being JSON.
    pub fn is_invalid_schema(&self) -> bool {
        !matches!(self, SchemaError::Json(_))
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
