//! JSON Pointer (RFC 6901) paths.
//!
//! Every validation error produced by `json-schema-validator` carries a
//! [`JsonPointer`] naming the offending location inside the validated value.
//! Pointers are built top-down while a value is walked and can be resolved
//! back against that value to show what was found there.
//!
//! # Example
//!
//! ```
//! use json_schema_pointer::JsonPointer;
//!
//! let pointer = JsonPointer::root().key("a").index(1);
//! assert_eq!(pointer.to_string(), "/a/1");
//!
//! let doc = serde_json::json!({"a": [1, "x", 3]});
//! assert_eq!(pointer.get(&doc), Some(&serde_json::json!("x")));
//! ```

pub mod get;
pub mod types;

pub use get::get;
pub use types::{JsonPointer, PathSegment};

/// Escapes an object key for use as a pointer component: `~` becomes `~0`
/// and `/` becomes `~1`.
///
/// ```
/// use json_schema_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_component() {
        assert_eq!(escape_component("foo"), "foo");
        assert_eq!(escape_component(""), "");
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
        assert_eq!(escape_component("~1"), "~01");
        assert_eq!(escape_component("ü/ß"), "ü~1ß");
    }
}
