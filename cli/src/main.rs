#![deny(missing_docs)]

//! # help2oas CLI
//!
//! Converts an ASP.NET Web API help page into an OpenAPI 3.0 document.
//!
//! ```text
//! help2oas http://host/Help -o openapi.json --fetch-details
//! ```

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use crate::convert::ConvertArgs;
use crate::fetch::{FetchArgs, HttpFetcher};

mod convert;
mod error;
mod fetch;
mod logging;

#[derive(Parser, Debug)]
#[clap(author, version, about = "ASP.NET Web API help page to OpenAPI converter")]
struct Cli {
    #[clap(flatten)]
    convert: ConvertArgs,

    #[clap(flatten)]
    fetch: FetchArgs,

    /// Log filter directives (e.g. `debug` or `help2oas_core=trace`).
    #[clap(long, default_value = "info", env = "HELP2OAS_LOG")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    // Injecting the blocking HTTP transport
    let fetcher = HttpFetcher::new(&cli.fetch);
    match convert::execute(&cli.convert, &fetcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
