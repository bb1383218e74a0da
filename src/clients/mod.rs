//! HTTP client types for Mystore API communication.
//!
//! This module provides the transport layer: authenticated requests, the two
//! content-type profiles, multipart image upload and the mapping of
//! transport and status failures onto [`HttpError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestSender`]: The seam the rest of the crate sends requests through
//! - [`HttpClient`]: The `reqwest`-backed sender
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`MediaProfile`]: JSON:API or plain JSON
//! - [`ImageUpload`]: A validated image file for multipart upload
//! - [`rest::RestClient`]: Higher-level REST client with pagination
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::{HttpClient, HttpRequest, HttpMethod, MediaProfile, Session};
//!
//! let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
//! let client = HttpClient::new(&session, None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "settings")
//!     .media(MediaProfile::Json)
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failures
//!
//! Nothing is retried. A request that never got a response surfaces as
//! [`HttpError::Network`]; any non-2xx status surfaces as
//! [`HttpError::Response`] carrying the status and the raw body.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
#[cfg(test)]
pub(crate) mod testing;
mod upload;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, RequestSender};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MediaProfile, RequestBody};
pub use http_response::HttpResponse;
pub use upload::{ImageType, ImageUpload};

// Re-export REST client types at the clients module level
pub use rest::{PageWalker, RestClient, RestError};
