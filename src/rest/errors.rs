//! Error types for resource client operations.
//!
//! [`ResourceError`] is the outermost error layer. Its first three variants
//! are raised locally, before any network call:
//!
//! - [`ResourceError::NotConfigured`]: the resource has no endpoint
//! - [`ResourceError::OperationNotPermitted`]: the permission table forbids the call
//! - [`ResourceError::MissingIdentifier`]: a by-id call had neither an id nor an override
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::rest::ResourceError;
//!
//! match shop.customer_groups().delete(3).await {
//!     Err(ResourceError::OperationNotPermitted { resource, operation }) => {
//!         println!("{resource} does not allow {operation}");
//!     }
//!     Err(e) => println!("{e} ({:?})", e.kind()),
//!     Ok(status) => println!("deleted: {status}"),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use crate::document::DocumentError;
use crate::error::ErrorKind;
use crate::rest::ResourceOperation;
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use mystore_api::rest::{ResourceError, ResourceOperation};
/// use mystore_api::ErrorKind;
///
/// let error = ResourceError::OperationNotPermitted {
///     resource: "customer-groups",
///     operation: ResourceOperation::Delete,
/// };
/// assert_eq!(error.kind(), ErrorKind::OperationNotPermitted);
/// assert!(error.to_string().contains("delete"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource declares no endpoint.
    ///
    /// This is a programming error in the resource configuration.
    #[error("Resource '{resource}' has no endpoint configured")]
    NotConfigured {
        /// The resource name.
        resource: &'static str,
    },

    /// The resource's permission table forbids the operation.
    #[error("Operation '{operation}' is not permitted on '{resource}'")]
    OperationNotPermitted {
        /// The resource name.
        resource: &'static str,
        /// The refused operation.
        operation: ResourceOperation,
    },

    /// A by-id operation had no id and no endpoint override to target.
    #[error("Cannot build a target path for '{resource}': no id and no endpoint override given")]
    MissingIdentifier {
        /// The resource name.
        resource: &'static str,
    },

    /// A document failed to build.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured { .. } => ErrorKind::NotConfigured,
            Self::OperationNotPermitted { .. } => ErrorKind::OperationNotPermitted,
            Self::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            Self::Document(e) => e.kind(),
            Self::Rest(e) => e.kind(),
            Self::Http(e) => e.kind(),
        }
    }

    /// Returns the HTTP status if this error carries a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(RestError::Http(e)) | Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
