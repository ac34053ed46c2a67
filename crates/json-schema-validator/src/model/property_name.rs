use std::borrow::Borrow;
use std::fmt;

use crate::error::{SchemaError, SchemaResult};

/// An object property name declared by a schema (`properties`, `required`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(name: impl Into<String>) -> SchemaResult<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("a property name cannot be empty")
        } else if name.trim().is_empty() {
            Some("a property name cannot be blank")
        } else if name.trim() != name {
            Some("a property name cannot start or end with blank characters")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(SchemaError::InvalidPropertyName { name, reason }),
            None => Ok(PropertyName(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PropertyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
