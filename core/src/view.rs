#![deny(missing_docs)]

//! # Views
//!
//! Selects what a documentation front end shows for a request: the whole
//! document, a single endpoint, or one endpoint's schema.

use crate::error::{RamlError, RamlResult};
use crate::raml::models::{Document, Endpoint};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Which side of an exchange a schema view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDirection {
    /// The request body schema.
    Request,
    /// The `200` response body schema.
    Response,
}

impl FromStr for SchemaDirection {
    type Err = RamlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request" => Ok(SchemaDirection::Request),
            "response" => Ok(SchemaDirection::Response),
            other => Err(RamlError::General(format!(
                "unknown schema direction '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SchemaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaDirection::Request => f.write_str("request"),
            SchemaDirection::Response => f.write_str("response"),
        }
    }
}

/// A view request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    /// Everything.
    Full,
    /// One endpoint, by exact URL.
    SingleApi {
        /// Endpoint URL.
        entry: String,
    },
    /// One endpoint's normalized schema.
    Schema {
        /// Endpoint URL.
        entry: String,
        /// Request or response.
        direction: SchemaDirection,
    },
}

/// The result of dispatching a [`ViewRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// The whole document.
    Document(Document),
    /// A filtered endpoint list.
    Endpoints(Vec<Endpoint>),
    /// A schema; `None` when the endpoint declares no request schema.
    Schema(Option<Value>),
}

/// Dispatches a view request against a parsed document.
pub fn render_view(document: &Document, request: &ViewRequest) -> RamlResult<View> {
    match request {
        ViewRequest::Full => Ok(View::Document(document.clone())),
        ViewRequest::SingleApi { entry } => {
            let endpoint = find_endpoint(document, entry)?;
            Ok(View::Endpoints(vec![endpoint.clone()]))
        }
        ViewRequest::Schema { entry, direction } => match direction {
            SchemaDirection::Request => {
                let endpoint = find_endpoint(document, entry)?;
                let schema = endpoint
                    .methods
                    .iter()
                    .find_map(|m| m.request_schema.clone());
                Ok(View::Schema(schema))
            }
            SchemaDirection::Response => Err(RamlError::NotImplemented(
                "response schema view".to_string(),
            )),
        },
    }
}

fn find_endpoint<'a>(document: &'a Document, entry: &str) -> RamlResult<&'a Endpoint> {
    document
        .endpoint(entry)
        .ok_or_else(|| RamlError::EndpointNotFound(entry.to_string()))
}
