#![deny(missing_docs)]

//! # RAMLWrap Core
//!
//! Turns RAML API descriptions into a flat, ordered list of endpoints with
//! their methods and definition-inlined JSON schemas, ready for rendering as
//! documentation.

/// Shared error types.
pub mod error;

/// YAML loading with `!include` resolution.
pub mod loader;

/// Parser configuration.
pub mod options;

/// RAML tree resolution.
pub mod raml;

/// View selection for documentation front ends.
pub mod view;

pub use error::{RamlError, RamlResult};
pub use loader::{load_raml_file, load_raml_str};
pub use options::ParseOptions;
pub use raml::inline::inline_definitions;
pub use raml::normalization::normalize_schema;
pub use raml::{
    parse_document, parse_document_with_options, parse_raml_file, Document, Endpoint, Method,
    MethodFailure, MethodFailureKind, MethodKind,
};
pub use view::{render_view, SchemaDirection, View, ViewRequest};
