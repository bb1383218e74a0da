//! Error types shared across the Mystore API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or hosts are rejected before a client is ever built.
//!
//! Operational errors are layered (`HttpError` inside `RestError` inside
//! `ResourceError`); [`ErrorKind`] flattens any of them into a single
//! classification callers can match on without walking the layers.
//!
//! # Example
//!
//! ```rust
//! use mystore_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Mystore API token.")]
    EmptyAccessToken,

    /// User agent cannot be empty; the API rejects anonymous clients.
    #[error("User agent cannot be empty. The Mystore API requires a User-Agent on every request.")]
    EmptyUserAgent,

    /// Store name is invalid.
    #[error("Invalid store name '{store}'. Expected letters, digits, '-' or '_' only.")]
    InvalidStoreName {
        /// The invalid store name that was provided.
        store: String,
    },

    /// Language code is invalid.
    #[error("Invalid language code '{code}'. Expected a short alphabetic code such as 'no' or 'en'.")]
    InvalidLanguageCode {
        /// The invalid code that was provided.
        code: String,
    },

    /// A required builder field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Stable classification of every failure the client can surface.
///
/// None of these are retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced an HTTP response (DNS, connect, TLS, body read).
    TransportFailure,
    /// An HTTP response was received with a non-success status.
    ResponseError,
    /// A builder was missing a declared-mandatory attribute or relationship.
    MissingMandatoryField,
    /// The resource's permission table forbids the operation.
    OperationNotPermitted,
    /// The resource has no endpoint configured.
    NotConfigured,
    /// A by-id operation was called without an id or endpoint override.
    MissingIdentifier,
    /// A response body broke the JSON:API contract (e.g. no `data` key).
    MalformedResponse,
    /// A request was rejected locally before sending (missing body,
    /// unsupported upload type, invalid path, unserializable payload).
    InvalidRequest,
}

impl ErrorKind {
    /// Returns `true` for kinds raised locally, before any network call.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(
            self,
            Self::TransportFailure | Self::ResponseError | Self::MalformedResponse
        )
    }
}
