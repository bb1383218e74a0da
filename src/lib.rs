//! # Mystore API
//!
//! A Rust client for the Mystore JSON:API REST service
//! (`https://api.mystore.no/shops/{store}/`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MystoreConfig`] and validated newtypes
//! - A [`Session`] carrying the bearer token and user agent
//! - JSON:API request documents with mandatory-field validation via [`document`]
//! - A generic resource client driven by immutable configs via [`rest`]
//! - Lazy or eager pagination over `links.next` via [`PageWalker`]
//! - A layered error taxonomy flattened by [`ErrorKind`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mystore_api::document::{Localized, NewProduct, NewResource};
//!
//! let product = NewProduct::new(
//!     Localized::single("no", "Test"),
//!     Localized::single("no", "test"),
//!     [10, 11],
//! );
//!
//! assert_eq!(
//!     product.build().unwrap().to_json_string(),
//!     r#"{"data":{"type":"products","attributes":{"name":{"no":"Test"},"slug":{"no":"test"}},"relationships":{"categories":{"data":[{"type":"categories","id":10},{"type":"categories","id":11}]}}}}"#
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use mystore_api::{Session, ShopClient};
//!
//! let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
//! let shop = ShopClient::new(&session, None);
//!
//! // Every page of a collection, fetched sequentially
//! let products = shop.products().list(false, None).await?;
//!
//! // A single item
//! let product = shop.products().find(12).await?;
//!
//! // Create from a built document
//! shop.products().create(new_product.build()?, None).await?;
//! ```
//!
//! ## Errors
//!
//! Refusals caused by the resource configuration, missing ids and missing
//! mandatory fields are raised before any request is sent. Nothing is
//! retried internally.
//!
//! ```rust
//! use mystore_api::ErrorKind;
//!
//! assert!(ErrorKind::OperationNotPermitted.is_local());
//! assert!(!ErrorKind::TransportFailure.is_local());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: resource configs are immutable `const` values
//! - **Fail-fast validation**: newtypes and documents validate on construction
//! - **Thread-safe**: the HTTP client and facades are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Sequential**: pagination never prefetches

pub mod auth;
pub mod clients;
pub mod config;
pub mod document;
pub mod error;
pub mod rest;
mod shop;

// Re-export public types at crate root for convenience
pub use auth::Session;
pub use config::{
    AccessToken, HostUrl, LanguageCode, MystoreConfig, MystoreConfigBuilder, StoreName, UserAgent,
    DEFAULT_API_HOST,
};
pub use error::{ConfigError, ErrorKind};
pub use shop::ShopClient;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, ImageType, ImageUpload, InvalidHttpRequestError, MediaProfile, PageWalker,
    RequestSender, RestClient, RestError,
};

// Re-export document and resource types
pub use document::{Batch, BuiltDocument, Document, DocumentError, ResourceBuilder, ResourceId};
pub use rest::{ResourceClient, ResourceConfig, ResourceError};
