//! Error types for the Mediashelf plugin.
//!
//! This module defines the centralized error type [`MediashelfError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Mediashelf plugin operations.
///
/// This enum consolidates all error conditions that can occur during plugin execution,
/// from catalog loading to I/O failures and configuration issues. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use mediashelf::domain::MediashelfError;
///
/// fn validate_config() -> Result<(), MediashelfError> {
///     Err(MediashelfError::Config("Missing catalog path".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MediashelfError {
    /// Catalog file could not be parsed.
    ///
    /// Occurs when the catalog JSON file exists but does not deserialize into
    /// the expected envelope. The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Mediashelf operations.
///
/// This is a type alias for `std::result::Result<T, MediashelfError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MediashelfError>;
