//! Resource builders: documents bound to a mandatory-field contract.
//!
//! A [`BuilderSpec`] is static data describing one resource kind: its type,
//! the attributes and relationships that must be present, and any declared
//! back-fill and string-coercion rules. A [`ResourceBuilder`] pairs a spec
//! with a [`Document`] and checks the contract at build time.
//!
//! Build runs in a fixed order on a copy of the document:
//!
//! 1. back-fill: each `(target, source)` fallback copies `source` into
//!    `target` when `target` was not provided and `source` was
//! 2. coercion: declared attributes that are neither strings nor null are
//!    replaced by their string form
//! 3. validation: mandatory attributes, then mandatory relationships; the
//!    first missing one is reported
//! 4. serialization
//!
//! Coercion runs after back-fill so copied values are coerced too.

use std::ops::{Deref, DerefMut};

use serde_json::Value;

use crate::document::errors::{DocumentError, FieldKind};
use crate::document::model::{BuiltDocument, Document};

/// Which attributes are coerced to strings before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCoercion {
    /// No coercion.
    None,
    /// Only the named attributes.
    Only(&'static [&'static str]),
}

impl StringCoercion {
    /// Returns `true` if `name` is subject to coercion.
    #[must_use]
    pub fn applies_to(&self, name: &str) -> bool {
        match self {
            Self::None => false,
            Self::Only(names) => names.contains(&name),
        }
    }
}

/// Static contract for one resource kind.
///
/// # Example
///
/// ```rust
/// use mystore_api::document::BuilderSpec;
///
/// const WIDGETS: BuilderSpec = BuilderSpec::new("widgets", &["name"], &["owner"]);
/// assert_eq!(WIDGETS.resource_type, "widgets");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderSpec {
    /// The JSON:API `type` written into every document.
    pub resource_type: &'static str,
    /// Attributes that must be present at build time.
    pub mandatory_attributes: &'static [&'static str],
    /// Relationships that must be present at build time.
    pub mandatory_relationships: &'static [&'static str],
    /// `(target, source)` pairs applied before validation.
    pub fallbacks: &'static [(&'static str, &'static str)],
    /// Attributes coerced to strings before validation.
    pub string_attributes: StringCoercion,
}

impl BuilderSpec {
    /// Creates a spec with no fallbacks and no coercion.
    #[must_use]
    pub const fn new(
        resource_type: &'static str,
        mandatory_attributes: &'static [&'static str],
        mandatory_relationships: &'static [&'static str],
    ) -> Self {
        Self {
            resource_type,
            mandatory_attributes,
            mandatory_relationships,
            fallbacks: &[],
            string_attributes: StringCoercion::None,
        }
    }

    /// Declares back-fill pairs.
    #[must_use]
    pub const fn with_fallbacks(mut self, fallbacks: &'static [(&'static str, &'static str)]) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    /// Declares string coercion.
    #[must_use]
    pub const fn with_string_coercion(mut self, coercion: StringCoercion) -> Self {
        self.string_attributes = coercion;
        self
    }

    /// Applies back-fill and coercion to `document` in place.
    pub fn prepare(&self, document: &mut Document) {
        let attributes = document.attributes_mut();

        for (target, source) in self.fallbacks {
            if attributes.contains_key(*target) {
                continue;
            }
            if let Some(value) = attributes.get(*source).cloned() {
                attributes.insert((*target).to_string(), value);
            }
        }

        for (name, value) in attributes.iter_mut() {
            if self.string_attributes.applies_to(name) {
                if let Some(coerced) = coerce_to_string(value) {
                    *value = coerced;
                }
            }
        }
    }

    /// Checks the mandatory attributes, then the mandatory relationships.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingMandatoryField`] for the first absent field.
    pub fn validate(&self, document: &Document) -> Result<(), DocumentError> {
        let missing = |field: &'static str, kind: FieldKind| DocumentError::MissingMandatoryField {
            resource_type: self.resource_type.to_string(),
            field,
            kind,
        };

        if let Some(field) = self
            .mandatory_attributes
            .iter()
            .find(|name| document.attribute(name).is_none())
        {
            return Err(missing(*field, FieldKind::Attribute));
        }

        if let Some(field) = self
            .mandatory_relationships
            .iter()
            .find(|name| !document.has_relationship(name))
        {
            return Err(missing(*field, FieldKind::Relationship));
        }

        Ok(())
    }
}

/// String form of a non-string, non-null JSON value.
fn coerce_to_string(value: &Value) -> Option<Value> {
    match value {
        Value::Null | Value::String(_) => None,
        Value::Bool(b) => Some(Value::String(b.to_string())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Array(_) | Value::Object(_) => Some(Value::String(value.to_string())),
    }
}

/// A [`Document`] bound to a [`BuilderSpec`].
///
/// Derefs to the document, so all setters are available directly. Call
/// [`build`](Self::build) on the builder itself: going through the inner
/// document, via `(*builder).build()` or
/// [`into_document`](Self::into_document), skips back-fill, coercion and
/// the mandatory-field checks.
///
/// # Example
///
/// ```rust
/// use mystore_api::document::{specs, ResourceBuilder};
/// use serde_json::json;
///
/// let mut product = ResourceBuilder::new(&specs::PRODUCTS);
/// product
///     .set_attribute("name", json!({"no": "Test"}))
///     .set_attribute("slug", json!({"no": "test"}))
///     .set_relationship_from_list("categories", "categories", [10, 11]);
///
/// let built = product.build().unwrap();
/// assert_eq!(
///     built.to_json_string(),
///     r#"{"data":{"type":"products","attributes":{"name":{"no":"Test"},"slug":{"no":"test"}},"relationships":{"categories":{"data":[{"type":"categories","id":10},{"type":"categories","id":11}]}}}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBuilder {
    spec: &'static BuilderSpec,
    document: Document,
}

impl ResourceBuilder {
    /// Creates an empty builder for the given resource kind.
    #[must_use]
    pub fn new(spec: &'static BuilderSpec) -> Self {
        Self {
            spec,
            document: Document::new(spec.resource_type),
        }
    }

    /// Returns the spec this builder enforces.
    #[must_use]
    pub const fn spec(&self) -> &'static BuilderSpec {
        self.spec
    }

    /// Returns the document with back-fill and coercion applied.
    #[must_use]
    pub fn prepared(&self) -> Document {
        let mut document = self.document.clone();
        self.spec.prepare(&mut document);
        document
    }

    /// Back-fills, coerces, validates and serializes.
    ///
    /// The builder itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingMandatoryField`] if a declared-mandatory
    /// attribute or relationship is absent.
    pub fn build(&self) -> Result<BuiltDocument, DocumentError> {
        let document = self.prepared();
        self.spec.validate(&document)?;
        document.build()
    }

    /// Consumes the builder, returning the raw document.
    ///
    /// The returned document is no longer checked against the spec.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Deref for ResourceBuilder {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.document
    }
}

impl DerefMut for ResourceBuilder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::specs;
    use crate::document::Field;
    use serde_json::json;

    #[test]
    fn test_coercion_forms() {
        assert_eq!(coerce_to_string(&json!(1234)), Some(json!("1234")));
        assert_eq!(coerce_to_string(&json!(12.5)), Some(json!("12.5")));
        assert_eq!(coerce_to_string(&json!(true)), Some(json!("true")));
        assert_eq!(coerce_to_string(&json!([1, 2])), Some(json!("[1,2]")));
        assert_eq!(coerce_to_string(&json!("x")), None);
        assert_eq!(coerce_to_string(&Value::Null), None);
    }

    #[test]
    fn test_string_coercion_applies_to() {
        assert!(!StringCoercion::None.applies_to("anything"));
        let only = StringCoercion::Only(&["zipcode"]);
        assert!(only.applies_to("zipcode"));
        assert!(!only.applies_to("city"));
    }

    #[test]
    fn test_attributes_are_validated_before_relationships() {
        let builder = ResourceBuilder::new(&specs::PRODUCTS);
        let error = builder.build().unwrap_err();
        assert!(matches!(
            error,
            DocumentError::MissingMandatoryField { field: "name", kind: FieldKind::Attribute, .. }
        ));
    }

    #[test]
    fn test_missing_relationship_is_reported() {
        let mut builder = ResourceBuilder::new(&specs::PRODUCTS);
        builder
            .set_attribute("name", json!({"no": "A"}))
            .set_attribute("slug", json!({"no": "a"}));

        let error = builder.build().unwrap_err();
        assert!(matches!(
            error,
            DocumentError::MissingMandatoryField { field: "categories", kind: FieldKind::Relationship, .. }
        ));
    }

    #[test]
    fn test_explicit_null_counts_as_present() {
        let mut builder = ResourceBuilder::new(&specs::CATEGORIES);
        builder
            .set_field("name", Field::<Value>::Null)
            .set_attribute("slug", json!({"no": "a"}));
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_build_leaves_builder_untouched() {
        let mut builder = ResourceBuilder::new(&specs::CUSTOMERS);
        builder.set_attribute("address_zipcode", 1234);
        let before = builder.clone();

        let _ = builder.build();
        let _ = builder.prepared();

        assert_eq!(builder, before);
        assert_eq!(builder.attribute("address_zipcode"), Some(&json!(1234)));
    }

    #[test]
    fn test_only_the_builder_enforces_mandatory_fields() {
        let mut builder = ResourceBuilder::new(&specs::CUSTOMERS);
        builder.set_attribute("name", "Ola").set_attribute("address_zipcode", 1234);

        assert!(builder.build().is_err());

        let raw = (*builder).build().unwrap();
        assert_eq!(raw.as_value()["data"]["attributes"]["address_zipcode"], json!(1234));
        assert!(raw.as_value()["data"]["attributes"].get("address_name").is_none());
        assert!(builder.into_document().build().is_ok());
    }

    #[test]
    fn test_fallback_only_fills_absent_targets() {
        static SPEC: BuilderSpec = BuilderSpec::new("things", &[], &[])
            .with_fallbacks(&[("alias", "name"), ("other", "missing")]);

        let mut builder = ResourceBuilder::new(&SPEC);
        builder.set_attribute("name", "N");
        let prepared = builder.prepared();
        assert_eq!(prepared.attribute("alias"), Some(&json!("N")));
        assert!(prepared.attribute("other").is_none());

        builder.set_attribute("alias", "Own");
        assert_eq!(builder.prepared().attribute("alias"), Some(&json!("Own")));
    }
}
