//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading legal constants
//! or running payroll calculations.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use nomina_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Legal constants file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Legal constants file was not found at the specified path.
    #[error("Legal constants file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Legal constants file could not be parsed.
    #[error("Failed to parse legal constants file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A legal constant violated the table invariant.
    #[error("Invalid legal constant '{name}': {message}")]
    InvalidConstant {
        /// The name of the offending constant.
        name: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An ARL risk tier outside the legal range I-V was requested.
    #[error("Invalid ARL risk tier: {tier} (expected 1 to 5)")]
    InvalidRiskTier {
        /// The tier that was requested.
        tier: u8,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
