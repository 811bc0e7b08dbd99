//! Configuration types for the Keycloak connection layer.
//!
//! This module provides the types used to describe how a [`Connection`]
//! talks to a Keycloak server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ConnectionConfig`]: The configuration struct holding all connection settings
//! - [`ConnectionConfigBuilder`]: A builder for constructing [`ConnectionConfig`] instances
//! - [`ServerUrl`]: A validated server base URL
//! - [`ProxyUrl`]: A validated proxy URL
//!
//! # Example
//!
//! ```rust
//! use keycloak_api::{ConnectionConfig, ServerUrl};
//!
//! let config = ConnectionConfig::builder()
//!     .server_url(ServerUrl::new("https://keycloak.example.com/auth/").unwrap())
//!     .header("Authorization", "Bearer my-token")
//!     .build()
//!     .unwrap();
//! ```
//!
//! [`Connection`]: crate::connection::Connection

mod newtypes;

pub use newtypes::{ProxyUrl, ServerUrl};

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout, matching the server's conventional 60 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a connection to a Keycloak server.
///
/// This struct holds everything needed to open a connection: the server base
/// URL, the shared headers sent with every request, the per-request timeout,
/// TLS verification, and an optional proxy.
///
/// # Thread Safety
///
/// `ConnectionConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use keycloak_api::{ConnectionConfig, ServerUrl};
///
/// let config = ConnectionConfig::builder()
///     .server_url(ServerUrl::new("https://keycloak.example.com/auth/").unwrap())
///     .timeout(Duration::from_secs(30))
///     .verify_tls(false)
///     .build()
///     .unwrap();
///
/// assert!(!config.verify_tls());
/// ```
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    server_url: ServerUrl,
    headers: HashMap<String, String>,
    timeout: Duration,
    verify_tls: bool,
    proxy: Option<ProxyUrl>,
}

impl ConnectionConfig {
    /// Creates a new builder for constructing a `ConnectionConfig`.
    #[must_use]
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new()
    }

    /// Returns the server base URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the shared headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether server TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the proxy URL, if one is configured.
    #[must_use]
    pub const fn proxy(&self) -> Option<&ProxyUrl> {
        self.proxy.as_ref()
    }
}

/// Builder for constructing [`ConnectionConfig`] instances.
///
/// Provides a fluent API with sensible defaults: a 60-second timeout,
/// TLS verification enabled, no shared headers, and no proxy.
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    server_url: Option<ServerUrl>,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
    verify_tls: Option<bool>,
    proxy: Option<ProxyUrl>,
}

impl ConnectionConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL. Required.
    #[must_use]
    pub fn server_url(mut self, server_url: ServerUrl) -> Self {
        self.server_url = Some(server_url);
        self
    }

    /// Sets all shared headers at once, replacing any previously added.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single shared header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the per-request timeout. Defaults to 60 seconds.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether server TLS certificates are verified. Defaults to `true`.
    ///
    /// Disabling verification is intended for development setups with
    /// self-signed certificates.
    #[must_use]
    pub const fn verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = Some(verify_tls);
        self
    }

    /// Routes all requests through the given proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: ProxyUrl) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Builds the [`ConnectionConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `server_url` was
    /// not set.
    pub fn build(self) -> Result<ConnectionConfig, ConfigError> {
        let server_url = self.server_url.ok_or(ConfigError::MissingRequiredField {
            field: "server_url",
        })?;

        Ok(ConnectionConfig {
            server_url,
            headers: self.headers,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_tls: self.verify_tls.unwrap_or(true),
            proxy: self.proxy,
        })
    }
}
