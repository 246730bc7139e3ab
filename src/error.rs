//! Custom error types for donate-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for donate-cli operations
#[derive(Error, Debug)]
pub enum DonateError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for donor input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The submission collaborator reported a failure
    #[error("Submission failed: {0}")]
    Submission(String),

    /// The session was already accepted by the collaborator
    #[error("Donation has already been submitted")]
    AlreadySubmitted,

    /// A submission is already in flight for this session
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DonateError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the submit control should stay disabled
    pub fn is_terminal_submission(&self) -> bool {
        matches!(self, Self::AlreadySubmitted)
    }
}

impl From<std::io::Error> for DonateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DonateError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for donate-cli operations
pub type DonateResult<T> = Result<T, DonateError>;
