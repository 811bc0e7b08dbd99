//! # Keycloak API Rust connection layer
//!
//! An async connection layer for the Keycloak API, providing type-safe
//! configuration and the low-level HTTP mechanics shared by higher-level
//! Keycloak clients.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConnectionConfig`] and [`ConnectionConfigBuilder`]
//! - Validated newtypes for server and proxy URLs
//! - A [`Connection`] with GET/POST/PUT/DELETE helpers against a base URL
//! - Shared headers with per-request overrides and runtime mutation
//! - Per-request timeouts, optional TLS verification, and proxy support
//! - Translation of transport failures into a single [`ConnectionError`]
//!
//! It deliberately stays below the resource surface: realms, users, clients,
//! and token handling belong to callers built on top of it.
//!
//! ## Quick Start
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
//! ## Making Requests
//!
//! ```rust,ignore
//! use keycloak_api::{ApiRequest, Body, Connection, Method};
//! use serde_json::json;
//!
//! let connection = Connection::new(&config)?;
//!
//! // Convenience helpers for the common cases
//! let response = connection.get("admin/realms").await?;
//!
//! // Full control through the request builder
//! let request = ApiRequest::builder(Method::Post, "admin/realms")
//!     .body(Body::Json(json!({"realm": "demo", "enabled": true})))
//!     .header("X-Request-Trace", "abc-123")
//!     .build();
//! let response = connection.send(request).await?;
//!
//! // Non-2xx responses are returned, not raised
//! if response.status().is_client_error() {
//!     eprintln!("rejected: {}", response.status());
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Status-agnostic**: The connection reports transport failures only;
//!   response status codes are interpreted by callers

pub mod config;
pub mod connection;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ConnectionConfig, ConnectionConfigBuilder, ProxyUrl, ServerUrl, DEFAULT_TIMEOUT};
pub use connection::{
    ApiRequest, ApiRequestBuilder, Body, Connection, ConnectionError, FilePart, Method,
};
pub use error::ConfigError;
