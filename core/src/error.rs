#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `RamlError` enum used across the workspace.

use crate::raml::models::MethodFailure;
use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum RamlError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The root document or an included YAML file is not valid YAML.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// An included `.json` file is not valid JSON.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// An `!include` target could not be read.
    #[from(ignore)]
    #[display("Include Error: cannot read '{}': {source}", path.display())]
    Include {
        /// Path of the include target, as resolved against the including file.
        path: PathBuf,
        /// Underlying IO failure.
        source: std::io::Error,
    },

    /// A file includes itself, directly or through other includes.
    #[from(ignore)]
    #[display("Include cycle detected at '{}'", _0.display())]
    IncludeCycle(PathBuf),

    /// A single method could not be extracted.
    #[display("Method Error: {_0}")]
    Method(MethodFailure),

    /// The requested view exists in the API but is not supported yet.
    #[from(ignore)]
    #[display("Not implemented: {_0}")]
    NotImplemented(String),

    /// No endpoint has the requested URL.
    #[from(ignore)]
    #[display("Endpoint not found: {_0}")]
    EndpointNotFound(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for RamlError {}

/// Helper type alias for Result using RamlError.
pub type RamlResult<T> = Result<T, RamlError>;
