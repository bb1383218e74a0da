//! Configuration types for the Mystore API client.
//!
//! # Overview
//!
//! - [`MystoreConfig`]: Client-wide settings (API host, user agent prefix,
//!   fallback language)
//! - [`MystoreConfigBuilder`]: A builder for constructing [`MystoreConfig`]
//! - [`StoreName`], [`AccessToken`], [`UserAgent`], [`LanguageCode`],
//!   [`HostUrl`]: validated newtypes
//!
//! Credentials are not part of the configuration; they live on the
//! [`Session`](crate::Session) that is attached to the request sender.
//!
//! # Example
//!
//! ```rust
//! use mystore_api::{MystoreConfig, HostUrl, LanguageCode};
//!
//! let config = MystoreConfig::builder()
//!     .api_host(HostUrl::new("https://api.staging.mystore.no").unwrap())
//!     .default_language(LanguageCode::new("en").unwrap())
//!     .build();
//!
//! assert_eq!(config.default_language().as_ref(), "en");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, LanguageCode, StoreName, UserAgent};

/// Production API host.
pub const DEFAULT_API_HOST: &str = "https://api.mystore.no";

/// Client-wide configuration.
///
/// `MystoreConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct MystoreConfig {
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    default_language: LanguageCode,
}

impl MystoreConfig {
    /// Creates a new builder for constructing a `MystoreConfig`.
    #[must_use]
    pub fn builder() -> MystoreConfigBuilder {
        MystoreConfigBuilder::new()
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the language used for localized attributes when the store
    /// settings cannot be consulted.
    #[must_use]
    pub const fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Returns the host the client talks to, honouring the override.
    #[must_use]
    pub fn host(&self) -> &str {
        self.api_host.as_ref().map_or(DEFAULT_API_HOST, AsRef::as_ref)
    }
}

// Verify MystoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MystoreConfig>();
};

/// Builder for constructing [`MystoreConfig`] instances.
///
/// Every field is optional.
///
/// # Defaults
///
/// - `api_host`: `None` (uses [`DEFAULT_API_HOST`])
/// - `user_agent_prefix`: `None`
/// - `default_language`: `no`
#[derive(Debug, Default)]
pub struct MystoreConfigBuilder {
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    default_language: Option<LanguageCode>,
}

impl MystoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API host override.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets a prefix prepended to the session's user agent.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the fallback language for localized attributes.
    #[must_use]
    pub fn default_language(mut self, language: LanguageCode) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Builds the [`MystoreConfig`].
    #[must_use]
    pub fn build(self) -> MystoreConfig {
        MystoreConfig {
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
            default_language: self.default_language.unwrap_or_default(),
        }
    }
}
