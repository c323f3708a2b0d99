#![deny(missing_docs)]

//! # Schema Normalization
//!
//! Produces the "inlined" form of a request/response schema: every
//! `#/definitions/{name}` reference in the definitions themselves and in the
//! top-level `properties` is replaced by the definition content.

use crate::raml::inline::{inline_with, DefinitionSource, InlineDepthExceeded};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Normalizes a schema by inlining its local definitions.
///
/// Takes the schema by value: callers keep their own copy of the original.
/// Schemas without a `definitions` mapping (including string schemas) are
/// returned unchanged.
///
/// A definition is fully inlined before it is copied anywhere, so the result
/// does not depend on declaration order. A reference back into a definition
/// that is still being inlined (self or mutual recursion) receives that
/// definition as declared, which leaves its own references one level down.
pub fn normalize_schema(mut schema: Value, max_depth: usize) -> Result<Value, InlineDepthExceeded> {
    normalize_in_place(&mut schema, max_depth)?;
    Ok(schema)
}

fn normalize_in_place(schema: &mut Value, max_depth: usize) -> Result<(), InlineDepthExceeded> {
    let Some(root) = schema.as_object_mut() else {
        return Ok(());
    };
    let Some(Value::Object(declared)) = root.get("definitions") else {
        return Ok(());
    };

    let declared = declared.clone();
    let mut resolver = DefinitionResolver::new(&declared, max_depth);

    let mut definitions = Map::with_capacity(declared.len());
    for name in declared.keys() {
        let resolved = resolver.resolve(name)?;
        definitions.insert(name.clone(), resolved);
    }

    if let Some(Value::Object(properties)) = root.get_mut("properties") {
        inline_with(properties, &mut resolver, max_depth)?;
    }
    root.insert("definitions".to_string(), Value::Object(definitions));

    Ok(())
}

/// Inlines definitions on first use and remembers the result.
struct DefinitionResolver<'a> {
    declared: &'a Map<String, Value>,
    resolved: HashMap<String, Value>,
    /// Definitions currently being inlined, outermost first.
    in_progress: Vec<String>,
    max_depth: usize,
}

impl<'a> DefinitionResolver<'a> {
    fn new(declared: &'a Map<String, Value>, max_depth: usize) -> Self {
        Self {
            declared,
            resolved: HashMap::new(),
            in_progress: Vec::new(),
            max_depth,
        }
    }

    /// Returns the inlined form of a declared definition.
    ///
    /// Only the definition's `properties` are rewritten; definitions without
    /// them come back as declared.
    fn resolve(&mut self, name: &str) -> Result<Value, InlineDepthExceeded> {
        if let Some(done) = self.resolved.get(name) {
            return Ok(done.clone());
        }

        let max_depth = self.max_depth;
        let mut definition = self.declared.get(name).cloned().unwrap_or(Value::Null);

        self.in_progress.push(name.to_string());
        let result = match definition.get_mut("properties") {
            Some(Value::Object(properties)) => inline_with(properties, self, max_depth),
            _ => Ok(()),
        };
        self.in_progress.pop();
        result?;

        self.resolved.insert(name.to_string(), definition.clone());
        Ok(definition)
    }
}

impl DefinitionSource for DefinitionResolver<'_> {
    fn lookup(&mut self, key: &str) -> Result<Option<Value>, InlineDepthExceeded> {
        let Some(declared) = self.declared.get(key) else {
            return Ok(None);
        };
        if self.in_progress.iter().any(|name| name == key) {
            return Ok(Some(declared.clone()));
        }
        self.resolve(key).map(Some)
    }
}
