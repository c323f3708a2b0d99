#![deny(missing_docs)]

//! # Endpoints Command
//!
//! Prints the endpoint tree, one line per endpoint, indented by nesting level.

use ramlwrap_core::Endpoint;

use crate::config::ParseArgs;
use crate::error::CliResult;

/// Arguments for the endpoints command.
#[derive(clap::Args, Debug, Clone)]
pub struct EndpointsArgs {
    #[clap(flatten)]
    pub parse: ParseArgs,
}

/// Executes the endpoints command.
pub fn execute(args: &EndpointsArgs) -> CliResult<()> {
    let document = args.parse.load()?;
    for endpoint in &document.endpoints {
        println!("{}", format_endpoint(endpoint));
    }
    for failure in &document.failures {
        eprintln!("skipped: {}", failure);
    }
    Ok(())
}

fn format_endpoint(endpoint: &Endpoint) -> String {
    // Top-level resources sit at level -1.
    let depth = usize::try_from(endpoint.level + 1).unwrap_or(0);
    let verbs: Vec<String> = endpoint
        .methods
        .iter()
        .map(|m| m.method_type.as_str().to_uppercase())
        .collect();

    format!(
        "{}{}  {}  [{}]",
        "  ".repeat(depth),
        endpoint.url,
        endpoint.display_name,
        verbs.join(", ")
    )
}
