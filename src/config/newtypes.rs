//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around URL values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

/// A validated Keycloak server URL.
///
/// This newtype ensures the server URL is an absolute http(s) URL with a
/// host, and provides RFC 3986 resolution of request paths against it.
///
/// # Path Resolution
///
/// A trailing slash matters: relative paths are resolved against the last
/// path segment, so `https://host/auth/` + `admin/realms` yields
/// `https://host/auth/admin/realms`, while `https://host/auth` + the same
/// path yields `https://host/admin/realms`.
///
/// # Serialization
///
/// `ServerUrl` serializes to and deserializes from the URL string:
///
/// ```rust
/// use keycloak_api::ServerUrl;
///
/// let url = ServerUrl::new("https://keycloak.example.com/auth/").unwrap();
/// let json = serde_json::to_string(&url).unwrap();
/// assert_eq!(json, r#""https://keycloak.example.com/auth/""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Creates a new validated server URL.
    ///
    /// Leading and trailing whitespace is trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the value is not an
    /// absolute http(s) URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let parsed = Url::parse(url.trim())
            .map_err(|_| ConfigError::InvalidServerUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidServerUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves a request path against this base URL.
    pub(crate) fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        self.0.join(path)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated proxy URL.
///
/// All outgoing requests are routed through this proxy when it is set on
/// the connection configuration.
///
/// # Example
///
/// ```rust
/// use keycloak_api::ProxyUrl;
///
/// let proxy = ProxyUrl::new("http://localhost:8080").unwrap();
/// assert_eq!(proxy.as_ref(), "http://localhost:8080/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyUrl(Url);

impl ProxyUrl {
    /// Creates a new validated proxy URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProxyUrl`] if the value is not an
    /// absolute URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let parsed = Url::parse(url.trim())
            .map_err(|_| ConfigError::InvalidProxyUrl { url: url.clone() })?;

        if parsed.host_str().is_none() {
            return Err(ConfigError::InvalidProxyUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ProxyUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
