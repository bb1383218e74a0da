//! Error types for document construction.

use std::fmt;

use thiserror::Error;

use crate::error::ErrorKind;

/// Which namespace a mandatory field lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A member of `attributes`.
    Attribute,
    /// A member of `relationships`.
    Relationship,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute => write!(f, "attribute"),
            Self::Relationship => write!(f, "relationship"),
        }
    }
}

/// Errors raised while building a document.
///
/// # Example
///
/// ```rust
/// use mystore_api::document::{specs, ResourceBuilder, DocumentError, FieldKind};
///
/// let builder = ResourceBuilder::new(&specs::CATEGORIES);
/// match builder.build() {
///     Err(DocumentError::MissingMandatoryField { field, kind, .. }) => {
///         assert_eq!(field, "name");
///         assert_eq!(kind, FieldKind::Attribute);
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A declared-mandatory attribute or relationship was absent at build time.
    #[error("Mandatory {kind} '{field}' is missing for '{resource_type}'.")]
    MissingMandatoryField {
        /// The resource type being built.
        resource_type: String,
        /// The missing field name.
        field: &'static str,
        /// Whether the field is an attribute or a relationship.
        kind: FieldKind,
    },

    /// The document could not be turned into JSON.
    #[error("Failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocumentError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingMandatoryField { .. } => ErrorKind::MissingMandatoryField,
            Self::Serialization(_) => ErrorKind::InvalidRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field_and_namespace() {
        let error = DocumentError::MissingMandatoryField {
            resource_type: "products".to_string(),
            field: "categories",
            kind: FieldKind::Relationship,
        };
        assert_eq!(
            error.to_string(),
            "Mandatory relationship 'categories' is missing for 'products'."
        );
        assert_eq!(error.kind(), ErrorKind::MissingMandatoryField);
    }
}
