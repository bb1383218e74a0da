//! REST client for the Mystore JSON:API service.
//!
//! This module provides a higher-level client built on top of any
//! [`RequestSender`](crate::clients::RequestSender) that offers convenient
//! methods and sequential pagination.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `patch()`, `delete()`, `upload()` and `paginate()`
//! - [`PageWalker`]: follows `links.next` one page at a time
//! - [`RestError`]: Error type for REST operations
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::{MediaProfile, RestClient, Session};
//!
//! let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
//! let client = RestClient::new(&session, None);
//!
//! let settings = client.get("settings", MediaProfile::Json, None).await?;
//! let products = client.paginate("products").collect_all().await?;
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/products` -> `products`
//! - Absolute URLs (pagination `next` links) are used unchanged
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;
mod pagination;

pub use client::RestClient;
pub use errors::RestError;
pub use pagination::PageWalker;
