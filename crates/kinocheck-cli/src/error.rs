//! Error types and exit-code policy for the CLI
//!
//! Validation failures and usage mistakes exit 1; transport and decode
//! failures exit 2 so scripts can tell a broken contract from a broken
//! connection.

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the kinocheck core (validation, transport, decode)
    #[error(transparent)]
    Core(#[from] kinocheck_core::Error),

    /// The endpoint selector names no known endpoint
    #[error("unknown endpoint selector '{selector}'")]
    InvalidSelector { selector: String },
}

impl Error {
    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSelector { .. } => 1,
            Self::Core(core) if core.is_validation() => 1,
            Self::Core(_) => 2,
        }
    }

    /// Check if this error should display the usage text.
    pub fn should_show_usage(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. })
    }
}

/// Format an error for display to the user.
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
