#![deny(missing_docs)]

//! # RAML Parsing Module
//!
//! - **models**: The flattened document / endpoint / method structures.
//! - **walker**: Queue-driven descent through the resource tree.
//! - **inline**: `#/definitions/` reference inlining.
//! - **normalization**: Per-schema orchestration of the inliner.
//! - **document**: Top-level parse entry points and metadata.

pub mod document;
pub mod inline;
pub mod models;
pub mod normalization;
pub(crate) mod ref_utils;
pub(crate) mod values;
pub mod walker;

pub use document::{parse_document, parse_document_with_options, parse_raml_file};
pub use models::{Document, Endpoint, Method, MethodFailure, MethodFailureKind, MethodKind};
