#![deny(missing_docs)]

//! # Render Command
//!
//! Parses a RAML file and prints the selected view as JSON or YAML.

use ramlwrap_core::{render_view, SchemaDirection, View, ViewRequest};
use serde::Serialize;

use crate::config::ParseArgs;
use crate::error::{CliError, CliResult};

/// What to render.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The whole document.
    Full,
    /// A single endpoint, selected with `--entry`.
    SingleApi,
    /// The schema of the endpoint selected with `--entry`.
    Schema,
}

/// Which schema a `schema` view shows.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Request body schema.
    Request,
    /// `200` response body schema.
    Response,
}

impl From<Direction> for SchemaDirection {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Request => SchemaDirection::Request,
            Direction::Response => SchemaDirection::Response,
        }
    }
}

/// Output serialization.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the render command.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    #[clap(flatten)]
    pub parse: ParseArgs,

    /// The view to produce.
    #[clap(long, value_enum, default_value_t = ViewKind::Full)]
    pub view: ViewKind,

    /// Endpoint URL for the `single-api` and `schema` views (e.g. `/users/{id}`).
    #[clap(long)]
    pub entry: Option<String>,

    /// Schema side for the `schema` view.
    #[clap(long, value_enum, default_value_t = Direction::Request)]
    pub schema_direction: Direction,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl RenderArgs {
    /// Maps the switches onto a view request.
    pub fn view_request(&self) -> CliResult<ViewRequest> {
        let entry = || {
            self.entry.clone().ok_or_else(|| {
                CliError::General("--entry is required for this view".to_string())
            })
        };

        Ok(match self.view {
            ViewKind::Full => ViewRequest::Full,
            ViewKind::SingleApi => ViewRequest::SingleApi { entry: entry()? },
            ViewKind::Schema => ViewRequest::Schema {
                entry: entry()?,
                direction: self.schema_direction.into(),
            },
        })
    }
}

/// Executes the render command.
pub fn execute(args: &RenderArgs) -> CliResult<()> {
    let request = args.view_request()?;
    let document = args.parse.load()?;

    let output = match render_view(&document, &request)? {
        View::Document(document) => serialize(&document, args.format)?,
        View::Endpoints(endpoints) => serialize(&endpoints, args.format)?,
        View::Schema(schema) => serialize(&schema, args.format)?,
    };

    println!("{}", output);
    Ok(())
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}
