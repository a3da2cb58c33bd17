//! Error types for samlookup.
//!
//! This module defines the centralized error type [`SamLookupError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Failed searches are
//! not errors: they travel as [`crate::client::SearchOutcome`] values and end up in
//! the error slot of the view. This type covers the failures that stop the program
//! from running at all.

use thiserror::Error;

/// The main error type for samlookup operations.
///
/// Most variants carry a description string. I/O failures wrap the underlying
/// `std::io::Error` via `#[from]` so `?` works on filesystem calls.
///
/// # Examples
///
/// ```
/// use samlookup::SamLookupError;
///
/// fn validate_pages(pages: u32) -> Result<u32, SamLookupError> {
///     if pages == 0 {
///         return Err(SamLookupError::Config("pages must be at least 1".to_string()));
///     }
///     Ok(pages)
/// }
///
/// assert!(validate_pages(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum SamLookupError {
    /// Filesystem or I/O operation failed.
    ///
    /// Covers reading the config file, writing rendered output and log files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the config file cannot be parsed or a value is out of range
    /// (for example an unparseable base URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be built or a request could not be formed.
    ///
    /// Transport failures of an individual search are reported as
    /// [`crate::client::SearchOutcome::Transport`] instead.
    #[error("Request error: {0}")]
    Request(String),

    /// Rendering the view failed.
    #[error("Render error: {0}")]
    Render(String),
}

/// A specialized `Result` type for samlookup operations.
pub type Result<T> = std::result::Result<T, SamLookupError>;
