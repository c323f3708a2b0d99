#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for reading JSON Schema `$ref` values that point into the schema's
//! own `definitions` map. Remote references and other pointer roots are never
//! followed.

use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

/// Pointer prefix of a local definition reference.
pub(crate) const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Extracts the raw definition segment from a `#/definitions/{name}` reference.
///
/// Returns `None` for any other reference form or an empty name.
pub(crate) fn definition_segment(ref_str: &str) -> Option<&str> {
    let segment = ref_str.strip_prefix(DEFINITIONS_PREFIX)?;
    // Deeper pointers (`#/definitions/A/properties/b`) are not definition references.
    if segment.is_empty() || segment.contains('/') {
        None
    } else {
        Some(segment)
    }
}

/// Keys to try, in order, when looking up the definition a node's `$ref`
/// points at: the segment exactly as written, then its pointer-decoded form
/// when that differs. Empty when the node has no definition reference.
pub(crate) fn reference_keys(node: &Map<String, Value>) -> Vec<String> {
    let Some(segment) = node
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(definition_segment)
    else {
        return Vec::new();
    };

    let mut keys = vec![segment.to_string()];
    let decoded = decode_pointer_segment(segment);
    if !decoded.is_empty() && decoded != segment {
        keys.push(decoded);
    }
    keys
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
