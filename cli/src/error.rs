#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use help2oas_core::AppError;

/// Errors surfaced by the `help2oas` binary.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Writing the output file failed.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure inside the conversion pipeline.
    #[display("{}", _0)]
    App(AppError),

    /// Setup failure, e.g. an invalid log filter.
    #[display("Operation failed: {}", _0)]
    General(String),
}

// Display comes from derive_more.
impl std::error::Error for CliError {}

/// Result alias for the CLI.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_errors_keep_their_message() {
        let err: CliError = AppError::Fetch("http://h/Help: connection refused".into()).into();
        assert_eq!(err.to_string(), "Fetch Error: http://h/Help: connection refused");
    }

    #[test]
    fn test_general_message() {
        let err: CliError = String::from("bad filter").into();
        assert_eq!(err.to_string(), "Operation failed: bad filter");
    }
}
