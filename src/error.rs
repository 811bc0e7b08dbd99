//! Error types for connection configuration.
//!
//! This module contains error types used when constructing and validating
//! a connection to a Keycloak server.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use keycloak_api::{ConfigError, ServerUrl};
//!
//! let result = ServerUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidServerUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a connection.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://keycloak.example.com/auth/').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Proxy URL is invalid.
    #[error("Invalid proxy URL '{url}'. Please provide an absolute URL (e.g., 'http://localhost:8080').")]
    InvalidProxyUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be initialized.
    #[error("Failed to initialize the HTTP client: {message}")]
    ClientInit {
        /// Description of the initialization failure.
        message: String,
    },
}
