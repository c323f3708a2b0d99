#![deny(missing_docs)]

//! # RAMLWrap CLI
//!
//! Command Line Interface for browsing RAML API descriptions.
//!
//! Supported Commands:
//! - `render`: Prints the parsed document, one endpoint, or one schema.
//! - `endpoints`: Lists the endpoint tree.

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliResult;

mod config;
mod endpoints;
mod error;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "RAML documentation toolchain")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a RAML file and print a view of it.
    Render(render::RenderArgs),
    /// List the endpoints of a RAML file.
    Endpoints(endpoints::EndpointsArgs),
}

fn main() -> CliResult<()> {
    // Logs go to stderr; stdout carries the rendered output.
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Render(args) => render::execute(args)?,
        Commands::Endpoints(args) => endpoints::execute(args)?,
    }

    Ok(())
}
