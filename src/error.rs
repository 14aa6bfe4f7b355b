//! Error types for the labor evaluation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The evaluation functions themselves are total; errors only arise while
//! constructing inputs, parsing reporting periods, or loading rules.

use thiserror::Error;

/// The main error type for the labor evaluation engine.
///
/// # Example
///
/// ```
/// use labor_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A job input field was missing, out of range, or inconsistent.
    #[error("Invalid job input '{field}': {message}")]
    InvalidJobInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A reporting period could not be parsed.
    #[error("Invalid reporting period '{value}': {message}")]
    InvalidPeriod {
        /// The raw period value supplied by the caller.
        value: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
