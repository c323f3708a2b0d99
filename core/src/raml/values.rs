//! Accessors over the loosely typed document tree.

use serde_json::{Map, Value};

/// Views a node as a mapping. `null` and scalars read as absent.
pub(crate) fn as_mapping(value: &Value) -> Option<&Map<String, Value>> {
    value.as_object()
}

/// Renders a scalar as a string (`version: 1` reads as `"1"`).
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Reads an optional scalar field from a mapping.
pub(crate) fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(scalar_string)
}
