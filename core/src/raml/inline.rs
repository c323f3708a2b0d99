#![deny(missing_docs)]

//! # Definition Inlining
//!
//! Replaces `#/definitions/{name}` references inside a JSON Schema `properties`
//! map with a copy of the referenced definition.
//!
//! Rules, applied to each property independently:
//! - a property carrying `$ref` is replaced wholesale by the target definition
//!   (left untouched when the target is missing);
//! - an `object` property with `properties` is recursed into;
//! - an `array` property whose `items` carries `$ref` gets `items` replaced.
//!   Items without a `$ref` are not descended into.
//!
//! Inlined content is a copy, never a view into `definitions`, so later edits
//! to one schema cannot leak into another.

use crate::raml::models::MethodFailureKind;
use crate::raml::ref_utils::reference_keys;
use serde_json::{Map, Value};
use tracing::trace;

/// Object recursion went past the configured depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineDepthExceeded {
    /// The configured limit.
    pub limit: usize,
}

impl From<InlineDepthExceeded> for MethodFailureKind {
    fn from(e: InlineDepthExceeded) -> Self {
        MethodFailureKind::InlineDepthExceeded { limit: e.limit }
    }
}

/// Supplies the content a `$ref` is replaced with.
pub(crate) trait DefinitionSource {
    /// Returns a copy of the definition stored under `key`, if any.
    fn lookup(&mut self, key: &str) -> Result<Option<Value>, InlineDepthExceeded>;
}

impl DefinitionSource for &Map<String, Value> {
    fn lookup(&mut self, key: &str) -> Result<Option<Value>, InlineDepthExceeded> {
        Ok(self.get(key).cloned())
    }
}

/// Inlines definition references in `properties`, in place.
///
/// `max_depth` bounds recursion through nested `object` properties; the top
/// level is depth 0.
pub fn inline_definitions(
    properties: &mut Map<String, Value>,
    definitions: &Map<String, Value>,
    max_depth: usize,
) -> Result<(), InlineDepthExceeded> {
    let mut source = definitions;
    inline_with(properties, &mut source, max_depth)
}

/// [`inline_definitions`] over any [`DefinitionSource`].
pub(crate) fn inline_with<S: DefinitionSource>(
    properties: &mut Map<String, Value>,
    source: &mut S,
    max_depth: usize,
) -> Result<(), InlineDepthExceeded> {
    inline_at_depth(properties, source, 0, max_depth)
}

fn inline_at_depth<S: DefinitionSource>(
    properties: &mut Map<String, Value>,
    source: &mut S,
    depth: usize,
    max_depth: usize,
) -> Result<(), InlineDepthExceeded> {
    if depth > max_depth {
        return Err(InlineDepthExceeded { limit: max_depth });
    }

    for (key, node) in properties.iter_mut() {
        let Value::Object(prop) = node else {
            continue;
        };

        if prop.contains_key("$ref") {
            match resolve_reference(prop, source)? {
                Some(target) => *node = target,
                None => trace!(property = %key, "unresolved $ref left in place"),
            }
            continue;
        }

        match prop.get("type").and_then(Value::as_str) {
            Some("object") => {
                if let Some(Value::Object(nested)) = prop.get_mut("properties") {
                    inline_at_depth(nested, source, depth + 1, max_depth)?;
                }
            }
            Some("array") => {
                let target = match prop.get("items") {
                    Some(Value::Object(items)) => resolve_reference(items, source)?,
                    _ => None,
                };
                if let Some(target) = target {
                    prop.insert("items".to_string(), target);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Looks up the target of a node's `$ref`, trying the raw key before the
/// decoded one.
fn resolve_reference<S: DefinitionSource>(
    node: &Map<String, Value>,
    source: &mut S,
) -> Result<Option<Value>, InlineDepthExceeded> {
    for key in reference_keys(node) {
        if let Some(target) = source.lookup(&key)? {
            return Ok(Some(target));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(properties: Value, definitions: Value) -> Value {
        let mut properties = properties.as_object().cloned().unwrap();
        inline_definitions(&mut properties, definitions.as_object().unwrap(), 64).unwrap();
        Value::Object(properties)
    }

    #[test]
    fn test_ref_replaced_with_definition() {
        let out = run(
            json!({ "foo": { "$ref": "#/definitions/Foo" } }),
            json!({ "Foo": { "type": "object", "properties": { "x": { "type": "string" } } } }),
        );
        assert_eq!(
            out,
            json!({ "foo": { "type": "object", "properties": { "x": { "type": "string" } } } })
        );
    }

    #[test]
    fn test_missing_ref_is_noop() {
        let out = run(
            json!({ "foo": { "$ref": "#/definitions/Missing" } }),
            json!({ "Foo": { "type": "string" } }),
        );
        assert_eq!(out, json!({ "foo": { "$ref": "#/definitions/Missing" } }));
    }

    #[test]
    fn test_ref_wins_over_type() {
        // A `$ref` sibling of `type: object` is replaced, not recursed into.
        let out = run(
            json!({ "foo": {
                "$ref": "#/definitions/Missing",
                "type": "object",
                "properties": { "bar": { "$ref": "#/definitions/Foo" } }
            } }),
            json!({ "Foo": { "type": "string" } }),
        );
        assert_eq!(out["foo"]["properties"]["bar"], json!({ "$ref": "#/definitions/Foo" }));
    }

    #[test]
    fn test_nested_object_recursion() {
        let out = run(
            json!({ "outer": {
                "type": "object",
                "properties": {
                    "inner": {
                        "type": "object",
                        "properties": { "leaf": { "$ref": "#/definitions/Leaf" } }
                    }
                }
            } }),
            json!({ "Leaf": { "type": "integer" } }),
        );
        assert_eq!(
            out["outer"]["properties"]["inner"]["properties"]["leaf"],
            json!({ "type": "integer" })
        );
    }

    #[test]
    fn test_array_items_inlined() {
        let out = run(
            json!({ "bars": { "type": "array", "items": { "$ref": "#/definitions/Bar" } } }),
            json!({ "Bar": { "type": "object", "properties": { "id": { "type": "integer" } } } }),
        );
        assert_eq!(
            out["bars"]["items"],
            json!({ "type": "object", "properties": { "id": { "type": "integer" } } })
        );
    }

    #[test]
    fn test_array_items_without_ref_not_descended() {
        let properties = json!({ "bars": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": { "bar": { "$ref": "#/definitions/Bar" } }
            }
        } });
        let out = run(properties.clone(), json!({ "Bar": { "type": "string" } }));
        assert_eq!(out, properties);
    }

    #[test]
    fn test_array_of_arrays_not_descended() {
        let properties = json!({ "grid": {
            "type": "array",
            "items": { "type": "array", "items": { "$ref": "#/definitions/Cell" } }
        } });
        let out = run(properties.clone(), json!({ "Cell": { "type": "string" } }));
        assert_eq!(out, properties);
    }

    #[test]
    fn test_untyped_and_scalar_properties_untouched() {
        let properties = json!({
            "plain": { "description": "no type" },
            "weird": "string value",
            "typed": { "type": "string" }
        });
        let out = run(properties.clone(), json!({}));
        assert_eq!(out, properties);
    }

    #[test]
    fn test_inlined_content_is_a_copy() {
        let definitions = json!({ "Foo": { "type": "object", "properties": {} } });
        let mut properties = json!({ "a": { "$ref": "#/definitions/Foo" } })
            .as_object()
            .cloned()
            .unwrap();
        inline_definitions(&mut properties, definitions.as_object().unwrap(), 64).unwrap();

        properties["a"]["properties"] = json!({ "mutated": true });
        assert_eq!(definitions["Foo"]["properties"], json!({}));
    }

    #[test]
    fn test_depth_limit() {
        let properties = json!({ "a": {
            "type": "object",
            "properties": { "b": {
                "type": "object",
                "properties": { "c": { "type": "string" } }
            } }
        } });
        let mut map = properties.as_object().cloned().unwrap();
        let err = inline_definitions(&mut map, &Map::new(), 1).unwrap_err();
        assert_eq!(err, InlineDepthExceeded { limit: 1 });

        let mut map = properties.as_object().cloned().unwrap();
        assert!(inline_definitions(&mut map, &Map::new(), 2).is_ok());
    }

    #[test]
    fn test_raw_key_preferred_over_decoded() {
        let out = run(
            json!({
                "literal": { "$ref": "#/definitions/Pet%20Tag" },
                "decoded": { "$ref": "#/definitions/Vet%20Note" },
                "slash": { "$ref": "#/definitions/a~1b" }
            }),
            json!({
                "Pet%20Tag": { "type": "string" },
                "Pet Tag": { "type": "integer" },
                "Vet Note": { "type": "boolean" },
                "a/b": { "type": "number" }
            }),
        );
        assert_eq!(out["literal"], json!({ "type": "string" }));
        assert_eq!(out["decoded"], json!({ "type": "boolean" }));
        assert_eq!(out["slash"], json!({ "type": "number" }));
    }
}
