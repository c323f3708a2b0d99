#![deny(missing_docs)]

//! # Resource Tree Walker
//!
//! Flattens the nested RAML resource tree into an ordered endpoint list.
//!
//! Child resources are keys starting with `/`. Every node discovered is pushed
//! to the *front* of the work queue, and the queue is drained from the front,
//! so siblings are visited last-declared first and each subtree is exhausted
//! before the previous sibling starts. Renderers depend on this order.

use crate::options::ParseOptions;
use crate::raml::models::{Endpoint, Method, MethodFailure, MethodFailureKind, MethodKind};
use crate::raml::normalization::normalize_schema;
use crate::raml::values::{as_mapping, scalar_string, string_field};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Level assigned to the document root. Its direct children land on `-1`.
pub const ROOT_LEVEL: i32 = -2;

/// Endpoints and method failures collected by one walk.
#[derive(Debug, Default)]
pub struct WalkOutput {
    /// Endpoints in traversal order.
    pub endpoints: Vec<Endpoint>,
    /// Methods that were skipped.
    pub failures: Vec<MethodFailure>,
}

struct PendingNode<'a> {
    node: &'a Map<String, Value>,
    path: String,
    level: i32,
}

/// Walks a loaded RAML tree. One walker per parse call.
pub struct TreeWalker<'o> {
    options: &'o ParseOptions,
    output: WalkOutput,
}

impl<'o> TreeWalker<'o> {
    /// Creates a walker with empty output.
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            output: WalkOutput::default(),
        }
    }

    /// Walks from the document root. The root itself never becomes an endpoint.
    pub fn walk(mut self, root: &Value) -> WalkOutput {
        let Some(root) = as_mapping(root) else {
            return self.output;
        };

        let mut queue = VecDeque::new();
        enqueue_children(&mut queue, root, "", ROOT_LEVEL);

        while let Some(item) = queue.pop_front() {
            enqueue_children(&mut queue, item.node, &item.path, item.level);
            self.visit(item);
        }

        self.output
    }

    fn visit(&mut self, item: PendingNode<'_>) {
        let Some(display_name) = item.node.get("displayName") else {
            return;
        };

        let mut endpoint = Endpoint::new(
            item.path,
            scalar_string(display_name).unwrap_or_default(),
            item.level,
        );
        endpoint.description = string_field(item.node, "description");
        debug!(url = %endpoint.url, level = endpoint.level, "endpoint");

        for kind in MethodKind::ALL {
            let Some(data) = item.node.get(kind.as_str()) else {
                continue;
            };
            match build_method(kind, data, self.options) {
                Ok(method) => endpoint.methods.push(method),
                Err(failure) => {
                    warn!(url = %endpoint.url, method = %kind, "skipping method: {}", failure);
                    self.output.failures.push(MethodFailure {
                        url: endpoint.url.clone(),
                        method: kind,
                        kind: failure,
                    });
                }
            }
        }

        self.output.endpoints.push(endpoint);
    }
}

/// Walks `root` with the given options.
pub fn walk_resources(root: &Value, options: &ParseOptions) -> WalkOutput {
    TreeWalker::new(options).walk(root)
}

fn enqueue_children<'a>(
    queue: &mut VecDeque<PendingNode<'a>>,
    node: &'a Map<String, Value>,
    path: &str,
    level: i32,
) {
    for (key, child) in node {
        if !key.starts_with('/') {
            continue;
        }
        // `/users:` with nothing below it has no children and no name.
        let Some(child) = as_mapping(child) else {
            continue;
        };
        queue.push_front(PendingNode {
            node: child,
            path: format!("{}{}", path, key),
            level: level + 1,
        });
    }
}

fn build_method(
    kind: MethodKind,
    data: &Value,
    options: &ParseOptions,
) -> Result<Method, MethodFailureKind> {
    let mut method = Method::new(kind);
    let Some(data) = as_mapping(data) else {
        return Ok(method);
    };

    method.description = string_field(data, "description");

    if let Some(body) = data.get("body") {
        let parts = read_body(body, options)?;
        method.request_content_type = Some(parts.content_type);
        method.request_schema_original = parts.schema_original;
        method.request_schema = parts.schema;
        method.request_example = parts.example;
    }

    let ok_response = data
        .get("responses")
        .and_then(as_mapping)
        .and_then(|responses| responses.get("200"))
        .and_then(as_mapping);

    if let Some(response) = ok_response {
        method.response_description = string_field(response, "description");
        if let Some(body) = response.get("body") {
            let parts = read_body(body, options)?;
            method.response_content_type = Some(parts.content_type);
            method.response_schema_original = parts.schema_original;
            method.response_schema = parts.schema;
            method.response_example = parts.example;
        }
    }

    Ok(method)
}

struct BodyParts {
    content_type: String,
    schema_original: Option<Value>,
    schema: Option<Value>,
    example: Option<Value>,
}

/// Reads a `body` mapping keyed by a single content type.
fn read_body(body: &Value, options: &ParseOptions) -> Result<BodyParts, MethodFailureKind> {
    let Some(body) = as_mapping(body) else {
        return Err(malformed("`body` must map a content type to its definition"));
    };
    let Some((content_type, entry)) = body.iter().next() else {
        return Err(malformed("`body` declares no content type"));
    };
    if body.len() > 1 {
        if options.strict_content_type {
            return Err(malformed(format!(
                "`body` declares {} content types, expected one",
                body.len()
            )));
        }
        warn!(content_type = %content_type, "several body content types declared, using the first");
    }

    let mut parts = BodyParts {
        content_type: content_type.clone(),
        schema_original: None,
        schema: None,
        example: None,
    };

    let Some(entry) = as_mapping(entry) else {
        return Ok(parts);
    };

    if let Some(schema) = entry.get("schema").filter(|s| !s.is_null()) {
        parts.schema = Some(normalize_schema(schema.clone(), options.max_inline_depth)?);
        parts.schema_original = Some(schema.clone());
    }
    parts.example = entry.get("example").cloned();

    Ok(parts)
}

fn malformed(reason: impl Into<String>) -> MethodFailureKind {
    MethodFailureKind::MalformedBody {
        reason: reason.into(),
    }
}
