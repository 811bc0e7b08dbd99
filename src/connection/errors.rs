//! Transport error types for the connection layer.
//!
//! Non-2xx responses are not errors at this layer; callers receive the
//! response and interpret its status themselves. [`ConnectionError`] covers
//! only failures that prevented a response from being obtained at all.

use thiserror::Error;

/// Error returned when a request could not reach the server.
///
/// Every transport-level failure (DNS resolution, TLS handshake, timeout,
/// refused or reset connections) maps to the [`Transport`] variant, carrying
/// the underlying cause. The [`InvalidPath`] variant covers request paths
/// that cannot be resolved against the base URL.
///
/// # Example
///
/// ```rust,ignore
/// match connection.get("admin/realms").await {
///     Ok(response) => println!("status: {}", response.status()),
///     Err(ConnectionError::Transport { source }) => {
///         eprintln!("can't connect: {source}");
///     }
///     Err(ConnectionError::InvalidPath { path, .. }) => {
///         eprintln!("bad path: {path}");
///     }
/// }
/// ```
///
/// [`Transport`]: ConnectionError::Transport
/// [`InvalidPath`]: ConnectionError::InvalidPath
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The request failed at the transport level before a response arrived.
    #[error("Can't connect to server ({source})")]
    Transport {
        /// The underlying transport failure.
        #[from]
        source: reqwest::Error,
    },

    /// The request path could not be resolved against the base URL.
    #[error("Invalid request path '{path}': {source}")]
    InvalidPath {
        /// The path that failed to resolve.
        path: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error_message() {
        let error = ConnectionError::InvalidPath {
            path: "http://".to_string(),
            source: url::ParseError::EmptyHost,
        };
        let message = error.to_string();
        assert!(message.contains("Invalid request path"));
        assert!(message.contains("http://"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConnectionError::InvalidPath {
            path: "bad".to_string(),
            source: url::ParseError::EmptyHost,
        };
        let _: &dyn std::error::Error = &error;
    }
}
