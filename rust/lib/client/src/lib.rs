//! HTTP client for the academic REST API.
//!
//! Every server interaction goes through the [`Transport`] port: it takes
//! an [`ApiRequest`] (method, path, query, body) and resolves to the
//! response JSON or an [`ApiError`]. [`HttpTransport`] is the reqwest
//! implementation; tests plug in an in-process transport instead.
//! Authentication is handled by pluggable [`TokenSource`] implementations.
//!
//! # Usage
//!
//! ```ignore
//! use campus_client::{ApiClient, ApiRequest, HttpTransport, StaticToken};
//!
//! let transport = HttpTransport::new("http://localhost:8000", Arc::new(StaticToken::new("jwt")));
//! let client = ApiClient::new(Arc::new(transport));
//! let courses: Vec<Course> = client.call(ApiRequest::get("/api/courses")).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod request;

pub use auth::{NoAuth, StaticToken, TokenSource};
pub use client::{ApiClient, Transport};
pub use error::ApiError;
pub use http::HttpTransport;
pub use request::{ApiRequest, Body, Method, Part, segment};
