//! Command-line argument parsing and definitions
//!
//! The surface is deliberately small: an optional host, an optional
//! endpoint selector, and a handful of output flags.

use crate::error::{Error, Result};
use clap::Parser;
use kinocheck_schemas::Endpoint;
use std::io::IsTerminal;

/// Kinocheck - conformance checker for the studio content REST API
///
/// Issues GET requests against the content endpoints, validates each
/// reply's envelope and payload against the declared schemas, and renders
/// the payloads. The process exits non-zero on the first failure.
#[derive(Parser, Debug)]
#[command(name = "kinocheck", version, author, about, long_about = None)]
pub struct Cli {
    /// API host to check ('.' selects the default host)
    #[arg(value_name = "HOST", default_value = ".")]
    pub host: String,

    /// Endpoint to check, or 'all' for every endpoint
    #[arg(value_name = "SELECTOR", default_value = "all")]
    pub selector: String,

    /// Enable verbose output (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Effective verbosity level, considering the quiet flag.
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used.
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

/// What one invocation checks: every endpoint, or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    All,
    One(Endpoint),
}

/// Resolve the raw selector argument. Fails with a usage error for
/// anything that is neither 'all' nor an endpoint name.
pub fn resolve_selector(raw: &str) -> Result<Selector> {
    if raw == "all" {
        return Ok(Selector::All);
    }
    Endpoint::from_selector(raw)
        .map(Selector::One)
        .ok_or_else(|| Error::InvalidSelector {
            selector: raw.to_string(),
        })
}

/// Usage text printed alongside selector errors.
pub fn usage() -> String {
    let names: Vec<&str> = Endpoint::ALL.iter().map(|endpoint| endpoint.name()).collect();
    format!(
        "usage: kinocheck [HOST] [SELECTOR]\n  SELECTOR is 'all' or one of: {}",
        names.join(", ")
    )
}
