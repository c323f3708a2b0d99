#![deny(missing_docs)]

//! # RAML Models
//!
//! Flattened representation of a parsed RAML document.
//!
//! These structs carry the endpoint tree from the loaded YAML into
//! documentation renderers. Everything is built fresh per parse call.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// HTTP verbs recognised under a resource node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// `get`
    Get,
    /// `post`
    Post,
    /// `put`
    Put,
    /// `patch`
    Patch,
    /// `delete`
    Delete,
}

impl MethodKind {
    /// All verbs in output order. Methods of an endpoint always follow this order.
    pub const ALL: [MethodKind; 5] = [
        MethodKind::Get,
        MethodKind::Post,
        MethodKind::Put,
        MethodKind::Patch,
        MethodKind::Delete,
    ];

    /// The RAML key for this verb.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodKind::Get => "get",
            MethodKind::Post => "post",
            MethodKind::Put => "put",
            MethodKind::Patch => "patch",
            MethodKind::Delete => "delete",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP verb handler declared under an endpoint.
///
/// Response fields are only ever populated from the `200` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// The verb.
    pub method_type: MethodKind,
    /// Reserved for method display names. Never populated by the parser.
    pub display_name: Option<String>,
    /// Method description.
    pub description: Option<String>,
    /// The content type keying the request `body` mapping.
    pub request_content_type: Option<String>,
    /// Request schema exactly as declared.
    pub request_schema_original: Option<Value>,
    /// Request schema with `#/definitions/` references inlined.
    pub request_schema: Option<Value>,
    /// Raw request example.
    pub request_example: Option<Value>,
    /// The content type keying the `200` response `body` mapping.
    pub response_content_type: Option<String>,
    /// Response schema exactly as declared.
    pub response_schema_original: Option<Value>,
    /// Response schema with `#/definitions/` references inlined.
    pub response_schema: Option<Value>,
    /// Raw response example.
    pub response_example: Option<Value>,
    /// Description of the `200` response.
    pub response_description: Option<String>,
}

impl Method {
    /// Creates an empty method of the given kind.
    pub fn new(method_type: MethodKind) -> Self {
        Self {
            method_type,
            display_name: None,
            description: None,
            request_content_type: None,
            request_schema_original: None,
            request_schema: None,
            request_example: None,
            response_content_type: None,
            response_schema_original: None,
            response_schema: None,
            response_example: None,
            response_description: None,
        }
    }
}

/// A resource node that declares a `displayName`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Concatenation of every ancestor segment plus this node's own (e.g. `/users/{id}`).
    pub url: String,
    /// Endpoint description.
    pub description: Option<String>,
    /// Human readable name.
    pub display_name: String,
    /// Nesting depth. Top-level resources sit at `-1`.
    pub level: i32,
    /// Declared methods, in `get, post, put, patch, delete` order.
    pub methods: Vec<Method>,
}

impl Endpoint {
    /// Creates an endpoint with no description and no methods.
    pub fn new(url: impl Into<String>, display_name: impl Into<String>, level: i32) -> Self {
        Self {
            url: url.into(),
            description: None,
            display_name: display_name.into(),
            level,
            methods: Vec::new(),
        }
    }

    /// Looks up a method by verb.
    pub fn method(&self, kind: MethodKind) -> Option<&Method> {
        self.methods.iter().find(|m| m.method_type == kind)
    }
}

/// Why a method was left out of its endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MethodFailureKind {
    /// The `body` mapping is empty, not a mapping, or declares several content types in strict mode.
    MalformedBody {
        /// What was wrong with the body.
        reason: String,
    },
    /// Definition inlining nested deeper than the configured limit.
    InlineDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for MethodFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodFailureKind::MalformedBody { reason } => write!(f, "malformed body: {}", reason),
            MethodFailureKind::InlineDepthExceeded { limit } => {
                write!(f, "definition inlining exceeded depth {}", limit)
            }
        }
    }
}

/// A method skipped during parsing, with the endpoint it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodFailure {
    /// URL of the owning endpoint.
    pub url: String,
    /// The verb that failed.
    pub method: MethodKind,
    /// The cause.
    pub kind: MethodFailureKind,
}

impl fmt::Display for MethodFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.method, self.url, self.kind)
    }
}

/// The parsed RAML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// `title`
    pub title: Option<String>,
    /// `description`
    pub description: Option<String>,
    /// `version`
    pub version: Option<String>,
    /// `mediaType`
    pub media_type: Option<String>,
    /// First entry of `documentation`.
    pub documentation: IndexMap<String, Value>,
    /// First entry of `traits`.
    pub traits: IndexMap<String, Value>,
    /// First entry of `securitySchemes`.
    pub security_schemes: IndexMap<String, Value>,
    /// Endpoints in traversal order.
    pub endpoints: Vec<Endpoint>,
    /// Methods that could not be extracted.
    pub failures: Vec<MethodFailure>,
}

impl Document {
    /// Finds an endpoint by exact URL.
    pub fn endpoint(&self, url: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.url == url)
    }

    /// Returns the first recorded method failure as an error, if any.
    pub fn check(&self) -> Result<(), MethodFailure> {
        match self.failures.first() {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}
