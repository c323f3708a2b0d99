#![deny(missing_docs)]

//! # Parser Settings
//!
//! Command line (and environment) switches mapped onto `ParseOptions`.

use ramlwrap_core::options::DEFAULT_MAX_INLINE_DEPTH;
use ramlwrap_core::{Document, ParseOptions, RamlError};
use std::path::PathBuf;
use tracing::info;

use crate::error::CliResult;

/// Input file and parser switches shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct ParseArgs {
    /// Path to the root RAML file.
    #[clap(env = "RAMLWRAP_FILE")]
    pub raml_file: PathBuf,

    /// Maximum nested object depth followed when inlining `#/definitions/` references.
    #[clap(long, env = "RAMLWRAP_MAX_INLINE_DEPTH", default_value_t = DEFAULT_MAX_INLINE_DEPTH)]
    pub max_inline_depth: usize,

    /// Treat a `body` with several content types as malformed.
    ///
    /// The environment variable accepts any value; `0`, `false`, `no`, `off`
    /// and the empty string turn it off.
    #[clap(
        long,
        env = "RAMLWRAP_STRICT_CONTENT_TYPE",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub strict_content_type: bool,

    /// Exit with an error if any method could not be parsed.
    #[clap(long)]
    pub fail_on_error: bool,
}

impl ParseArgs {
    /// Builds the parser options.
    pub fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_max_inline_depth(self.max_inline_depth)
            .with_strict_content_type(self.strict_content_type)
    }

    /// Loads and parses the RAML file.
    pub fn load(&self) -> CliResult<Document> {
        let document = ramlwrap_core::parse_raml_file(&self.raml_file, &self.options())?;
        info!(
            file = %self.raml_file.display(),
            endpoints = document.endpoints.len(),
            failures = document.failures.len(),
            "parsed RAML"
        );
        if self.fail_on_error {
            document.check().map_err(RamlError::from)?;
        }
        Ok(document)
    }
}
