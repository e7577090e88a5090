//! Check command handler
//!
//! Resolves the selector, builds the client and runner, and streams each
//! validated payload to stdout as it arrives. Selector resolution happens
//! before anything touches the network, so a bad selector never issues a
//! request.

use crate::cli::{resolve_selector, Cli, Selector};
use crate::config::Config;
use crate::error::Result;
use crate::render::{render_payload, RUN_DELIMITER};
use colored::Colorize;
use kinocheck_core::{ApiClient, CheckRunner, ClientConfig, ReportSink};
use kinocheck_schemas::Endpoint;
use serde_json::{Map, Value};
use tracing::{info, instrument};

/// Prints each validated payload as its check completes.
struct ConsoleSink {
    quiet: bool,
}

impl ReportSink for ConsoleSink {
    fn report(&mut self, endpoint: Endpoint, _path: &str, payload: &Map<String, Value>) {
        if self.quiet {
            return;
        }
        println!("{}", render_payload(endpoint, payload));
        println!();
        println!("{RUN_DELIMITER}");
        println!();
    }
}

/// Handle the check run for the requested selector.
#[instrument(skip(cli, config), fields(selector = %cli.selector, host = %config.host))]
pub async fn handle_check(cli: &Cli, config: &Config) -> Result<()> {
    let selector = resolve_selector(&cli.selector)?;

    let client = ApiClient::new(
        &config.host,
        ClientConfig {
            timeout_secs: config.timeout_secs,
        },
    )?;
    let runner = CheckRunner::new(client);
    let mut sink = ConsoleSink { quiet: cli.quiet };

    match selector {
        Selector::All => {
            info!("running every endpoint check");
            if !cli.quiet {
                println!("Checking all API endpoints on {}", config.host);
            }
            runner.check_all(&mut sink).await?;
        }
        Selector::One(endpoint) => {
            info!(endpoint = endpoint.name(), "running endpoint check");
            if !cli.quiet {
                println!("Checking {} API endpoint on {}", endpoint, config.host);
            }
            runner.check_endpoint(endpoint, &mut sink).await?;
        }
    }

    if !cli.quiet {
        let banner = "SUCCESS! All checks have passed.";
        if cli.use_color() {
            println!("{}", banner.green().bold());
        } else {
            println!("{banner}");
        }
    }

    Ok(())
}
