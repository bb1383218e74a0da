//! REST-specific error types for the Mystore API client.
//!
//! This module contains error types for REST operations: invalid paths,
//! responses that break the JSON:API contract, and wrapped HTTP errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::clients::rest::{RestClient, RestError};
//!
//! match client.paginate("products").collect_all().await {
//!     Ok(items) => println!("{} products", items.len()),
//!     Err(RestError::MalformedResponse { path, reason }) => {
//!         println!("Server broke the contract at {path}: {reason}");
//!     }
//!     Err(RestError::InvalidPath { path }) => println!("Invalid path: {path}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use crate::error::ErrorKind;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use mystore_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
///
/// let error = RestError::MalformedResponse {
///     path: "products".to_string(),
///     reason: "missing `data`".to_string(),
/// };
/// assert!(error.to_string().contains("products"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A successful response did not have the expected JSON:API shape.
    ///
    /// A listing page without a `data` array is a server contract break, not
    /// an empty page, so the walk is aborted instead of returning a partial list.
    #[error("Malformed response from '{path}': {reason}")]
    MalformedResponse {
        /// The path or URL that produced the response.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPath { .. } => ErrorKind::InvalidRequest,
            Self::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Self::Http(e) => e.kind(),
        }
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
