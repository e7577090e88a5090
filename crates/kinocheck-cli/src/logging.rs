//! Logging setup for the CLI
//!
//! Trace lines (every kind and key-set check emits one) go to stderr so
//! stdout stays clean for payload rendering. The filter is derived from
//! the verbosity flags; `RUST_LOG` and `KINOCHECK_LOG` override it.

use tracing_subscriber::EnvFilter;

/// Map the verbosity flags to a default filter directive.
fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the tracing subscriber. Safe to call once per process;
/// later calls are ignored.
pub fn init(verbosity: u8, quiet: bool) {
    let directive = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("KINOCHECK_LOG"))
        .unwrap_or_else(|_| default_directive(verbosity, quiet).to_string());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(5, false), "trace");
    }

    #[test]
    fn test_quiet_limits_to_errors() {
        assert_eq!(default_directive(0, true), "error");
    }
}
