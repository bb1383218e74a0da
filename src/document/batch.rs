//! Ordered batches of built documents.

use serde_json::Value;

use crate::document::model::BuiltDocument;

/// An ordered batch of already-built documents, submitted as one JSON array.
///
/// No cross-document validation happens here; each member was validated when
/// it was built. Order is significant: the server applies batch operations in
/// sequence.
///
/// # Example
///
/// ```rust
/// use mystore_api::document::{Batch, Document};
///
/// let mut batch = Batch::new();
/// assert_eq!(batch.to_json_string(), "[]");
///
/// batch.add(Document::new("product-tags").build().unwrap());
/// assert_eq!(batch.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    documents: Vec<BuiltDocument>,
}

impl Batch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Appends one document.
    pub fn add(&mut self, document: BuiltDocument) -> &mut Self {
        self.documents.push(document);
        self
    }

    /// Number of documents in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates the documents in order.
    pub fn iter(&self) -> impl Iterator<Item = &BuiltDocument> {
        self.documents.iter()
    }

    /// Returns the batch as a JSON array, `[]` when empty.
    #[must_use]
    pub fn build(&self) -> Value {
        Value::Array(
            self.documents
                .iter()
                .map(|document| document.as_value().clone())
                .collect(),
        )
    }

    /// Returns the compact JSON text of the batch.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.build().to_string()
    }
}

impl FromIterator<BuiltDocument> for Batch {
    fn from_iter<I: IntoIterator<Item = BuiltDocument>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}

impl Extend<BuiltDocument> for Batch {
    fn extend<I: IntoIterator<Item = BuiltDocument>>(&mut self, iter: I) {
        self.documents.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use serde_json::json;

    fn tag(key: &str) -> BuiltDocument {
        let mut doc = Document::new("product-tags");
        doc.set_attribute("key", key);
        doc.build().unwrap()
    }

    #[test]
    fn test_empty_batch_is_empty_array() {
        let batch = Batch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.build(), json!([]));
        assert_eq!(batch.to_json_string(), "[]");
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut batch = Batch::new();
        batch.add(tag("b")).add(tag("a")).add(tag("c"));

        let keys: Vec<String> = batch
            .build()
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["data"]["attributes"]["key"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_batch_collects_from_iterator() {
        let batch: Batch = ["x", "y"].into_iter().map(tag).collect();
        assert_eq!(batch.iter().count(), 2);
        assert!(batch.to_json_string().starts_with(r#"[{"data":{"type":"product-tags""#));
    }
}
