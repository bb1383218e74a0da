//! Authentication types for the Mystore API client.
//!
//! The platform authenticates every request with a bearer token and requires
//! a `User-Agent`. Both are carried by [`Session`] and attached by the
//! request sender at construction time.
//!
//! # Example
//!
//! ```rust
//! use mystore_api::{Session, StoreName, AccessToken, UserAgent};
//!
//! let session = Session::new(
//!     StoreName::new("my-store").unwrap(),
//!     AccessToken::new("api-token").unwrap(),
//!     UserAgent::new("Importer/1.0").unwrap(),
//! );
//! assert_eq!(session.user_agent.as_ref(), "Importer/1.0");
//! ```

pub mod session;

pub use session::Session;
