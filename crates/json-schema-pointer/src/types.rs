//! Path value types.

use std::fmt;

use serde_json::Value;

use crate::escape_component;

/// A step in a pointer path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(&escape_component(key)),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// An immutable location inside a JSON value.
///
/// `Display` renders the root as `/`, the way validation reports address
/// the whole document, and every other pointer in RFC 6901 form.
/// [`JsonPointer::to_rfc6901`] gives the strict form (empty string for the
/// root).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<PathSegment>,
}

impl JsonPointer {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// A new pointer one object key below this one.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// A new pointer one array element below this one.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }

    pub fn to_rfc6901(&self) -> String {
        self.segments
            .iter()
            .map(|segment| format!("/{segment}"))
            .collect()
    }

    /// Resolve the pointer inside `doc`.
    pub fn get<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        crate::get(doc, &self.segments)
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
