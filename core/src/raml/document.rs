#![deny(missing_docs)]

//! # RAML Document Parsing
//!
//! Entry points that turn a loaded RAML tree into a [`Document`]: the
//! flattened endpoint list plus top-level metadata.

use crate::error::RamlResult;
use crate::loader::load_raml_file;
use crate::options::ParseOptions;
use crate::raml::models::Document;
use crate::raml::values::string_field;
use crate::raml::walker::walk_resources;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::Path;

/// Parses an include-resolved RAML tree with default options.
///
/// Never fails: problems confined to a single method are reported in
/// [`Document::failures`], and a root that is not a mapping yields an empty
/// document.
pub fn parse_document(tree: &Value) -> Document {
    parse_document_with_options(tree, &ParseOptions::default())
}

/// Parses an include-resolved RAML tree.
pub fn parse_document_with_options(tree: &Value, options: &ParseOptions) -> Document {
    let walked = walk_resources(tree, options);

    let empty = Map::new();
    let root = tree.as_object().unwrap_or(&empty);

    Document {
        title: string_field(root, "title"),
        description: string_field(root, "description"),
        version: string_field(root, "version"),
        media_type: string_field(root, "mediaType"),
        documentation: first_entry(root, "documentation"),
        traits: first_entry(root, "traits"),
        security_schemes: first_entry(root, "securitySchemes"),
        endpoints: walked.endpoints,
        failures: walked.failures,
    }
}

/// Loads a RAML file (resolving `!include`s) and parses it.
pub fn parse_raml_file(path: impl AsRef<Path>, options: &ParseOptions) -> RamlResult<Document> {
    let tree = load_raml_file(path)?;
    Ok(parse_document_with_options(&tree, options))
}

/// Copies the first mapping of a top-level sequence (`traits: [{...}]`).
/// A mapping given directly is copied as is.
fn first_entry(root: &Map<String, Value>, key: &str) -> IndexMap<String, Value> {
    let source = match root.get(key) {
        Some(Value::Array(items)) => items.first().and_then(Value::as_object),
        Some(Value::Object(map)) => Some(map),
        _ => None,
    };

    source
        .map(|map| map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}
