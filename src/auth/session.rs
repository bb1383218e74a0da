//! Session credentials for Mystore API calls.
//!
//! This module provides the [`Session`] type: the store, bearer token and
//! user agent that a request sender attaches to every request.

use crate::config::{AccessToken, StoreName, UserAgent};
use crate::error::ConfigError;

/// Represents an authenticated connection to one Mystore store.
///
/// The credentials are attached once, when an [`HttpClient`](crate::HttpClient)
/// is constructed from the session, and are never refreshed afterwards.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use mystore_api::Session;
///
/// let session = Session::from_parts("my-store", "api-token", "Importer/1.0").unwrap();
///
/// assert_eq!(session.store.as_ref(), "my-store");
/// assert_eq!(session.authorization_header(), "Bearer api-token");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// The store this session is for.
    pub store: StoreName,

    /// The bearer token for API authentication.
    pub access_token: AccessToken,

    /// The mandatory `User-Agent` identifying the caller.
    pub user_agent: UserAgent,
}

impl Session {
    /// Creates a new session from validated parts.
    #[must_use]
    pub const fn new(store: StoreName, access_token: AccessToken, user_agent: UserAgent) -> Self {
        Self {
            store,
            access_token,
            user_agent,
        }
    }

    /// Creates a new session from raw strings, validating each part.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any of the parts fails validation.
    pub fn from_parts(
        store: impl Into<String>,
        access_token: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(
            StoreName::new(store)?,
            AccessToken::new(access_token)?,
            UserAgent::new(user_agent)?,
        ))
    }

    /// Returns the value of the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token.as_ref())
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};
