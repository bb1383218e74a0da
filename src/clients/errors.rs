//! HTTP-specific error types for the Mystore API client.
//!
//! - [`HttpResponseError`]: A response arrived but its status is not 2xx
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.is_client_error() => {
//!         println!("Rejected {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::Response(e)) => println!("Server error {}", e.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Transport failure: {e}"),
//!     Err(HttpError::Io(e)) => println!("Could not read file: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ErrorKind;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The raw response body is kept verbatim so callers can inspect the
/// server's JSON:API `errors` array or whatever else it sent.
///
/// # Example
///
/// ```rust
/// use mystore_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 422,
///     body: r#"{"errors":[{"title":"slug taken"}]}"#.to_string(),
///     request_id: None,
/// };
///
/// assert!(error.is_client_error());
/// assert!(error.to_string().contains("422"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// Request id echoed by the server, if any.
    pub request_id: Option<String>,
}

impl HttpResponseError {
    /// Returns `true` for 4xx statuses (client or validation errors).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.code >= 400 && self.code < 500
    }

    /// Returns `true` for 5xx statuses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500
    }
}

/// Error returned when an HTTP request fails validation.
///
/// These are raised before anything is sent, so no side effect has happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The file offered for upload is not an accepted image type.
    #[error("Unsupported image type for '{file_name}'. Accepted extensions: jpg, jpeg, gif, png, webp.")]
    UnsupportedImageType {
        /// The file name that was rejected.
        file_name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error; no HTTP response exists.
    #[error("Transport failure: {0}")]
    Network(#[from] reqwest::Error),

    /// A local file could not be read (image uploads).
    #[error("Failed to read upload: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Response(_) => ErrorKind::ResponseError,
            Self::InvalidRequest(_) | Self::Io(_) => ErrorKind::InvalidRequest,
            Self::Network(_) => ErrorKind::TransportFailure,
        }
    }

    /// Returns the HTTP status code when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_body() {
        let error = HttpResponseError {
            code: 404,
            body: r#"{"errors":[{"status":"404"}]}"#.to_string(),
            request_id: None,
        };
        assert_eq!(error.to_string(), r#"HTTP 404: {"errors":[{"status":"404"}]}"#);
    }

    #[test]
    fn test_http_response_error_distinguishes_client_and_server() {
        let client = HttpResponseError {
            code: 422,
            body: String::new(),
            request_id: None,
        };
        let server = HttpResponseError {
            code: 503,
            body: String::new(),
            request_id: None,
        };
        assert!(client.is_client_error());
        assert!(!client.is_server_error());
        assert!(server.is_server_error());
        assert!(!server.is_client_error());
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use patch without specifying data.");
    }

    #[test]
    fn test_unsupported_image_type_names_the_file() {
        let error = InvalidHttpRequestError::UnsupportedImageType {
            file_name: "logo.svg".to_string(),
        };
        assert!(error.to_string().contains("logo.svg"));
        assert!(error.to_string().contains("webp"));
    }

    #[test]
    fn test_http_error_kind_and_status() {
        let error = HttpError::Response(HttpResponseError {
            code: 500,
            body: "boom".to_string(),
            request_id: None,
        });
        assert_eq!(error.kind(), ErrorKind::ResponseError);
        assert_eq!(error.status(), Some(500));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(error.kind(), ErrorKind::InvalidRequest);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            body: "test".to_string(),
            request_id: None,
        };
        let _ = response;

        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        let _ = invalid;
    }
}
