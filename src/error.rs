//! Error types for hydra-app.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can end a run.

use thiserror::Error;

/// The main error type for hydra-app.
///
/// Loading, rendering and printing all return this error type, so the
/// binary can report any failure the same way.
///
/// # Example
///
/// ```
/// use hydra_app::error::AppError;
///
/// let error = AppError::ConfigNotFound {
///     path: "/missing/config.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/config.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
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
        /// A description of the parse error, including its location when known.
        message: String,
    },

    /// The configuration could not be rendered back to YAML.
    #[error("Failed to render configuration: {message}")]
    RenderError {
        /// A description of the render error.
        message: String,
    },

    /// Writing the rendered configuration failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// A type alias for Results that return AppError.
pub type AppResult<T> = Result<T, AppError>;
