#![deny(missing_docs)]

//! # Parse Options
//!
//! Knobs resolved once by the caller and handed to the parser. The parser
//! never reads environment variables itself.

/// Default bound on nested `object` recursion while inlining definitions.
pub const DEFAULT_MAX_INLINE_DEPTH: usize = 64;

/// Options controlling how a RAML tree is flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of `object` properties followed while inlining.
    /// Methods whose schemas go deeper are reported as failures.
    pub max_inline_depth: usize,
    /// Reject `body` mappings that declare more than one content type.
    /// When off, the first declared content type is used.
    pub strict_content_type: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_inline_depth: DEFAULT_MAX_INLINE_DEPTH,
            strict_content_type: false,
        }
    }
}

impl ParseOptions {
    /// Sets the inlining depth limit.
    pub fn with_max_inline_depth(mut self, depth: usize) -> Self {
        self.max_inline_depth = depth;
        self
    }

    /// Enables or disables strict single content type bodies.
    pub fn with_strict_content_type(mut self, strict: bool) -> Self {
        self.strict_content_type = strict;
        self
    }
}
