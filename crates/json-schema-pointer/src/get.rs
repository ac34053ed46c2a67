use serde_json::Value;

use crate::PathSegment;

/// Follows `path` down from `val`. Keys only step into objects and indices
/// only into arrays.
pub fn get<'a>(val: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    path.iter().try_fold(val, |current, segment| match (current, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map.get(key),
        (Value::Array(items), PathSegment::Index(index)) => items.get(*index),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(k: &str) -> PathSegment {
        PathSegment::Key(k.to_string())
    }

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [10, 20]}});
        assert_eq!(
            get(&doc, &[key("a"), key("b"), PathSegment::Index(1)]),
            Some(&json!(20))
        );
    }

    #[test]
    fn test_get_missing() {
        let doc = json!({"a": [1], "0": "zero"});
        assert_eq!(get(&doc, &[key("b")]), None);
        assert_eq!(get(&doc, &[key("a"), PathSegment::Index(4)]), None);
        assert_eq!(get(&doc, &[key("a"), key("0")]), None);
        assert_eq!(get(&doc, &[PathSegment::Index(0)]), None);
    }
}
