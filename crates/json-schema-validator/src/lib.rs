//! `json-schema-validator`: JSON Schema validation with schema shape
//! inference and pointer-tagged errors.
//!
//! A schema document is loaded once by [`JsonSchemaFactory`] into an
//! immutable [`SchemaNode`] tree, then any number of values are checked
//! against it. Each mismatch becomes a [`ValidationError`] carrying the
//! [`JsonPointer`] of the offending element.
//!
//! The keyword set is the draft-07 one without references: `type`, `const`,
//! `enum`, `not`, `oneOf`, `anyOf`, the numeric, string, array and object
//! constraints, and the `date`, `time`, `date-time`, `email`, `hostname`,
//! `ipv4`, `ipv6` and `uri` formats. A fragment without `type` is classified
//! from the keywords it carries, so `{"minLength": 3}` is a string schema.
//!
//! # Example
//!
//! ```
//! use json_schema_validator::JsonSchemaFactory;
//! use serde_json::json;
//!
//! let schema = JsonSchemaFactory::new()
//!     .from(r#"{"properties": {"a": {"items": {"type": "integer"}}}}"#)
//!     .unwrap();
//!
//! let result = schema.validate(&json!({"a": [1, "x", 3]}));
//! assert!(!result.is_successful());
//! assert_eq!(result.errors()[0].pointer().to_string(), "/a/1");
//! assert_eq!(result.errors()[0].message(), "element should be an integer");
//! ```

pub mod cli;
pub mod error;
pub mod factory;
pub mod format;
pub mod inference;
pub mod literal;
pub mod model;
pub mod node;
pub mod result;
pub mod schema;
mod serialize;
pub mod validator;

pub use error::{SchemaError, SchemaResult};
pub use factory::{FactoryOptions, JsonSchemaFactory, DEFAULT_NAMESPACE};
pub use format::StringFormat;
pub use inference::{infer, Inference, DEFAULT_MAX_DEPTH};
pub use node::SchemaNode;
pub use result::{ValidationError, ValidationResult};
pub use schema::JsonSchema;
pub use validator::validate;

pub use json_schema_pointer::{JsonPointer, PathSegment};
