//! Kinocheck CLI - conformance checker for the studio content REST API
//!
//! This is the entry point for the `kinocheck` binary: parse arguments,
//! set up logging, resolve configuration, run the requested checks, and
//! turn the outcome into a process exit code.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod render;

use clap::Parser;
use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use std::process;
use tracing::instrument;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let use_color = cli.use_color();

    control::set_override(use_color);
    logging::init(cli.verbosity_level(), cli.quiet);

    match run(cli).await {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, use_color));

            if e.should_show_usage() {
                eprintln!("{}", cli::usage());
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(host = %cli.host, selector = %cli.selector))]
async fn run(cli: Cli) -> Result<()> {
    let config = Config::load().with_cli(&cli);
    tracing::info!(
        host = %config.host,
        timeout_secs = config.timeout_secs,
        "configuration resolved"
    );

    handlers::handle_check(&cli, &config).await
}
