//! Request types for the connection layer.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! describing requests before they are sent by a
//! [`Connection`](crate::connection::Connection).

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the connection layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single file in a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    /// The form field name.
    pub name: String,
    /// The file name reported to the server.
    pub file_name: String,
    /// The file contents.
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Creates a new file part.
    pub fn new(
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Request body kinds supported by the connection layer.
///
/// The body kind determines the `Content-Type` of the request: JSON payloads,
/// URL-encoded form fields, or multipart file uploads.
#[derive(Clone, Debug)]
pub enum Body {
    /// JSON payload (`application/json`).
    Json(serde_json::Value),
    /// URL-encoded form fields (`application/x-www-form-urlencoded`).
    Form(HashMap<String, String>),
    /// Multipart file upload (`multipart/form-data`).
    Multipart(Vec<FilePart>),
}

/// A request to be sent to the server.
///
/// The path is resolved against the connection's base URL at send time.
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use keycloak_api::{ApiRequest, Body, Method};
/// use serde_json::json;
///
/// // GET request with a query parameter
/// let get_request = ApiRequest::builder(Method::Get, "admin/realms")
///     .query_param("briefRepresentation", "true")
///     .build();
///
/// // POST request with a JSON body
/// let post_request = ApiRequest::builder(Method::Post, "admin/realms")
///     .body(Body::Json(json!({"realm": "demo", "enabled": true})))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: Method,
    /// The path, resolved against the base URL at send time.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// The request body, if any.
    pub body: Option<Body>,
    /// Per-request headers, merged over the connection's shared headers.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: Method, path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: Method,
    path: String,
    query: Option<HashMap<String, String>>,
    body: Option<Body>,
    extra_headers: Option<HashMap<String, String>>,
}

impl ApiRequestBuilder {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            extra_headers: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets all per-request headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single per-request header.
    ///
    /// Per-request headers are merged over the connection's shared headers,
    /// with the per-request value winning on conflict.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            path: self.path,
            query: self.query,
            body: self.body,
            extra_headers: self.extra_headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_builder_creates_bare_get_request() {
        let request = ApiRequest::builder(Method::Get, "admin/realms").build();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "admin/realms");
        assert!(request.query.is_none());
        assert!(request.body.is_none());
        assert!(request.extra_headers.is_none());
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = ApiRequest::builder(Method::Get, "admin/realms/demo/users")
            .query_param("max", "100")
            .query_param("search", "alice")
            .build();

        let query = request.query.unwrap();
        assert_eq!(query.get("max"), Some(&"100".to_string()));
        assert_eq!(query.get("search"), Some(&"alice".to_string()));
    }

    #[test]
    fn test_builder_with_json_body() {
        let request = ApiRequest::builder(Method::Post, "admin/realms")
            .body(Body::Json(json!({"realm": "demo"})))
            .build();

        assert!(matches!(request.body, Some(Body::Json(_))));
    }

    #[test]
    fn test_builder_with_form_body() {
        let mut fields = HashMap::new();
        fields.insert("grant_type".to_string(), "password".to_string());

        let request =
            ApiRequest::builder(Method::Post, "realms/master/protocol/openid-connect/token")
                .body(Body::Form(fields))
                .build();

        match request.body {
            Some(Body::Form(fields)) => {
                assert_eq!(fields.get("grant_type"), Some(&"password".to_string()));
            }
            other => panic!("expected form body, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = ApiRequest::builder(Method::Put, "admin/realms/demo")
            .body(Body::Json(json!({"enabled": false})))
            .header("X-Custom-Header", "custom-value")
            .build();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_file_part_construction() {
        let part = FilePart::new("import", "realm.json", b"{}".to_vec());
        assert_eq!(part.name, "import");
        assert_eq!(part.file_name, "realm.json");
        assert_eq!(part.bytes, b"{}");
    }
}
