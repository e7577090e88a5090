//! Configuration for the CLI
//!
//! Three layers, later wins: built-in defaults, environment variables
//! (`KINOCHECK_HOST`, `KINOCHECK_TIMEOUT`), then command-line arguments.

use crate::cli::Cli;
use tracing::warn;

/// Host checked when none is given (a `.` argument also selects it).
pub const DEFAULT_HOST: &str = "http://localhost:8000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API host to check
    pub host: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Defaults overlaid with environment overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.merge_env();
        config
    }

    fn merge_env(&mut self) {
        if let Ok(host) = std::env::var("KINOCHECK_HOST") {
            if !host.is_empty() {
                self.host = host;
            }
        }

        if let Ok(timeout) = std::env::var("KINOCHECK_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!("invalid KINOCHECK_TIMEOUT value: {timeout}"),
            }
        }
    }

    /// Apply command-line overrides. A host of `.` keeps the configured
    /// default.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.host != "." {
            self.host = cli.host.clone();
        }
        if let Some(secs) = cli.timeout {
            self.timeout_secs = secs;
        }
        self
    }
}
