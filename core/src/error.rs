//! # Errors
//!
//! `AppError` covers every failure the conversion pipeline can report.

use derive_more::{Display, From};

/// Errors raised while fetching, reading or rendering.
///
/// Route parsing never fails (unrecognized names fall back to `GET /unknown`),
/// so every variant belongs to the collaborators around it.
/// A bare `String` converts into `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Filesystem or stream failure.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// JSON (de)serialization failure.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML serialization failure.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// A page could not be fetched.
    #[from(ignore)]
    #[display("Fetch Error: {_0}")]
    Fetch(String),

    /// A page (or the URL it lives at) could not be read.
    #[from(ignore)]
    #[display("Page Error: {_0}")]
    Page(String),

    /// Anything else, as a message.
    #[display("General Error: {_0}")]
    General(String),
}

impl std::error::Error for AppError {}

/// Result alias used throughout the core crate.
pub type AppResult<T> = Result<T, AppError>;
