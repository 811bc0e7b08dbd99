//! Connection layer for Keycloak server communication.
//!
//! This module provides the foundational HTTP layer for talking to a
//! Keycloak server. It handles URL resolution, header merging, timeout
//! application, and translation of transport failures into
//! [`ConnectionError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Connection`]: The async connection to a Keycloak server
//! - [`ApiRequest`]: A request to be sent to the server
//! - [`Method`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Body`]: Request body kinds (JSON, form, multipart)
//! - [`ConnectionError`]: Transport-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use keycloak_api::{Connection, ConnectionConfig, ServerUrl};
//!
//! let config = ConnectionConfig::builder()
//!     .server_url(ServerUrl::new("https://keycloak.example.com/auth/")?)
//!     .header("Authorization", "Bearer my-token")
//!     .build()?;
//!
//! let connection = Connection::new(&config)?;
//! let response = connection.get("admin/realms").await?;
//! println!("status: {}", response.status());
//! ```
//!
//! # Retry Behavior
//!
//! GET requests are retried once when the connection itself fails to be
//! established (for example, a reset while the server recycles its
//! connector). No other method is retried, there is no backoff, and
//! response status codes never trigger a retry.

mod errors;
mod request;

pub use errors::ConnectionError;
pub use request::{ApiRequest, ApiRequestBuilder, Body, FilePart, Method};

use std::collections::HashMap;
use std::time::Duration;

use crate::config::{ConnectionConfig, ProxyUrl, ServerUrl};
use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A connection to a Keycloak server.
///
/// The connection handles:
/// - Resolution of request paths against the configured base URL
/// - Shared headers merged with per-request headers
/// - Per-request timeout application
/// - A single transport-level retry for GET requests
///
/// Responses are returned as-is: a non-2xx status is not an error at this
/// layer, so callers interpret status codes themselves. Only failures that
/// prevented a response from being obtained surface as [`ConnectionError`].
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync`, making it safe to share across async tasks.
/// Header mutation takes `&mut self`, so shared connections have a fixed
/// header set.
///
/// # Example
///
/// ```rust,ignore
/// use keycloak_api::{ApiRequest, Body, Connection, ConnectionConfig, Method, ServerUrl};
/// use serde_json::json;
///
/// let config = ConnectionConfig::builder()
///     .server_url(ServerUrl::new("https://keycloak.example.com/auth/")?)
///     .build()?;
/// let connection = Connection::new(&config)?;
///
/// let request = ApiRequest::builder(Method::Post, "admin/realms")
///     .body(Body::Json(json!({"realm": "demo", "enabled": true})))
///     .build();
///
/// let response = connection.send(request).await?;
/// ```
#[derive(Debug)]
pub struct Connection {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL requests are resolved against.
    server_url: ServerUrl,
    /// Shared headers sent with every request.
    headers: HashMap<String, String>,
    /// Per-request timeout.
    timeout: Duration,
    /// Whether server TLS certificates are verified.
    verify_tls: bool,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Opens a connection using the given configuration.
    ///
    /// The underlying HTTP client is built once; TLS verification and proxy
    /// settings are fixed for the lifetime of the connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ClientInit`] if the underlying HTTP client
    /// cannot be created.
    pub fn new(config: &ConnectionConfig) -> Result<Self, ConfigError> {
        let user_agent = format!(
            "Keycloak API Library v{LIB_VERSION} | Rust {}",
            env!("CARGO_PKG_RUST_VERSION")
        );

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent);

        if !config.verify_tls() {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(proxy) = config.proxy() {
            let proxy = Self::build_proxy(proxy)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ConfigError::ClientInit {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            server_url: config.server_url().clone(),
            headers: config.headers().clone(),
            timeout: config.timeout(),
            verify_tls: config.verify_tls(),
        })
    }

    fn build_proxy(proxy: &ProxyUrl) -> Result<reqwest::Proxy, ConfigError> {
        reqwest::Proxy::all(proxy.as_str()).map_err(|e| ConfigError::ClientInit {
            message: e.to_string(),
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Replaces the base URL for subsequent requests.
    pub fn set_server_url(&mut self, server_url: ServerUrl) {
        self.server_url = server_url;
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Replaces the per-request timeout for subsequent requests.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Returns whether server TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the shared headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the value of a shared header, if present.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Returns `true` if the shared header is present.
    #[must_use]
    pub fn contains_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    /// Inserts or replaces a shared header.
    pub fn insert_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Removes a shared header, returning its previous value if present.
    pub fn remove_header(&mut self, key: &str) -> Option<String> {
        self.headers.remove(key)
    }

    /// Removes all shared headers.
    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    /// Submits a GET request to the path.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the request cannot reach the server.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ConnectionError> {
        self.send(ApiRequest::builder(Method::Get, path).build())
            .await
    }

    /// Submits a POST request with the given body to the path.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the request cannot reach the server.
    pub async fn post(&self, path: &str, body: Body) -> Result<reqwest::Response, ConnectionError> {
        self.send(ApiRequest::builder(Method::Post, path).body(body).build())
            .await
    }

    /// Submits a PUT request with the given body to the path.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the request cannot reach the server.
    pub async fn put(&self, path: &str, body: Body) -> Result<reqwest::Response, ConnectionError> {
        self.send(ApiRequest::builder(Method::Put, path).body(body).build())
            .await
    }

    /// Submits a DELETE request to the path.
    ///
    /// DELETE requests carrying a body go through [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError`] if the request cannot reach the server.
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response, ConnectionError> {
        self.send(ApiRequest::builder(Method::Delete, path).build())
            .await
    }

    /// Sends a request to the server.
    ///
    /// This method handles:
    /// - Path resolution against the base URL (RFC 3986)
    /// - Merging shared and per-request headers (per-request values win)
    /// - Query parameters and body encoding
    /// - Timeout application
    /// - A single retry for GET requests on connect failures
    ///
    /// The response is returned regardless of its status code.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidPath`] if the path cannot be
    /// resolved against the base URL, or [`ConnectionError::Transport`]
    /// for any transport-level failure.
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, ConnectionError> {
        let url =
            self.server_url
                .join(&request.path)
                .map_err(|source| ConnectionError::InvalidPath {
                    path: request.path.clone(),
                    source,
                })?;

        // Merge headers, per-request values win
        let mut headers = self.headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut retried = false;
        loop {
            let mut req_builder = match request.method {
                Method::Get => self.client.get(url.clone()),
                Method::Post => self.client.post(url.clone()),
                Method::Put => self.client.put(url.clone()),
                Method::Delete => self.client.delete(url.clone()),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some(query) = &request.query {
                req_builder = req_builder.query(query);
            }

            if let Some(body) = &request.body {
                req_builder = match body {
                    Body::Json(value) => req_builder.json(value),
                    Body::Form(fields) => req_builder.form(fields),
                    Body::Multipart(parts) => req_builder.multipart(Self::build_multipart(parts)),
                };
            }

            req_builder = req_builder.timeout(self.timeout);

            tracing::debug!(method = %request.method, url = %url, "sending request");

            match req_builder.send().await {
                Ok(response) => return Ok(response),
                Err(source) => {
                    // Retry GETs once when the connection itself failed; the
                    // server may have recycled the connection under us.
                    if Self::retry_eligible(request.method, source.is_connect(), retried) {
                        retried = true;
                        tracing::warn!(
                            url = %url,
                            error = %source,
                            "connect failure on GET, retrying once"
                        );
                        continue;
                    }
                    return Err(ConnectionError::Transport { source });
                }
            }
        }
    }

    /// Returns whether a failed attempt should be tried again.
    ///
    /// Only GETs are retried, only when the connection itself failed, and
    /// only once per request.
    const fn retry_eligible(method: Method, connect_failure: bool, retried: bool) -> bool {
        matches!(method, Method::Get) && connect_failure && !retried
    }

    fn build_multipart(parts: &[FilePart]) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = form.part(
                part.name.clone(),
                reqwest::multipart::Part::bytes(part.bytes.clone())
                    .file_name(part.file_name.clone()),
            );
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        let config = ConnectionConfig::builder()
            .server_url(ServerUrl::new("https://keycloak.example.com/auth/").unwrap())
            .header("Authorization", "Bearer test-token")
            .build()
            .unwrap();
        Connection::new(&config).unwrap()
    }

    #[test]
    fn test_connection_construction_from_config() {
        let connection = create_test_connection();

        assert_eq!(
            connection.server_url().as_str(),
            "https://keycloak.example.com/auth/"
        );
        assert_eq!(connection.timeout(), Duration::from_secs(60));
        assert!(connection.verify_tls());
        assert_eq!(connection.header("Authorization"), Some("Bearer test-token"));
    }

    #[test]
    fn test_connection_accepts_proxy_config() {
        let config = ConnectionConfig::builder()
            .server_url(ServerUrl::new("http://test.test/").unwrap())
            .proxy(ProxyUrl::new("http://localhost:8080").unwrap())
            .build()
            .unwrap();

        assert!(Connection::new(&config).is_ok());
    }

    #[test]
    fn test_connection_accepts_disabled_tls_verification() {
        let config = ConnectionConfig::builder()
            .server_url(ServerUrl::new("https://self-signed.test/").unwrap())
            .verify_tls(false)
            .build()
            .unwrap();

        let connection = Connection::new(&config).unwrap();
        assert!(!connection.verify_tls());
    }

    #[test]
    fn test_header_mutation() {
        let mut connection = create_test_connection();

        assert!(connection.contains_header("Authorization"));
        assert_eq!(connection.header("Missing"), None);

        connection.insert_header("X-Extra", "value");
        assert_eq!(connection.header("X-Extra"), Some("value"));

        assert_eq!(
            connection.remove_header("X-Extra"),
            Some("value".to_string())
        );
        assert!(!connection.contains_header("X-Extra"));

        connection.clear_headers();
        assert!(connection.headers().is_empty());
    }

    #[test]
    fn test_insert_header_replaces_existing_value() {
        let mut connection = create_test_connection();

        connection.insert_header("Authorization", "Bearer rotated-token");
        assert_eq!(
            connection.header("Authorization"),
            Some("Bearer rotated-token")
        );
    }

    #[test]
    fn test_set_server_url_and_timeout() {
        let mut connection = create_test_connection();

        connection.set_server_url(ServerUrl::new("https://other.example.com/").unwrap());
        connection.set_timeout(Duration::from_secs(5));

        assert_eq!(connection.server_url().as_str(), "https://other.example.com/");
        assert_eq!(connection.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_retry_is_restricted_to_get_requests() {
        assert!(Connection::retry_eligible(Method::Get, true, false));

        assert!(!Connection::retry_eligible(Method::Post, true, false));
        assert!(!Connection::retry_eligible(Method::Put, true, false));
        assert!(!Connection::retry_eligible(Method::Delete, true, false));
    }

    #[test]
    fn test_retry_requires_a_connect_failure() {
        // Timeouts, resets mid-response, and the like are not retried
        assert!(!Connection::retry_eligible(Method::Get, false, false));
    }

    #[test]
    fn test_retry_happens_at_most_once() {
        assert!(Connection::retry_eligible(Method::Get, true, false));
        assert!(!Connection::retry_eligible(Method::Get, true, true));
    }

    #[test]
    fn test_connection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Connection>();
    }

    #[tokio::test]
    async fn test_invalid_path_surfaces_invalid_path_error() {
        let connection = create_test_connection();

        // A scheme-only path cannot be resolved against any base
        let result = connection.get("http://").await;

        assert!(matches!(
            result,
            Err(ConnectionError::InvalidPath { path, .. }) if path == "http://"
        ));
    }
}
