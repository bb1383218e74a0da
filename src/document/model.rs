//! In-memory JSON:API resource documents.
//!
//! A [`Document`] is assembled by the caller, then turned into an immutable
//! [`BuiltDocument`] with the wire shape:
//!
//! ```json
//! { "data": { "type": "...", "id": 1, "attributes": {}, "relationships": {} } }
//! ```
//!
//! `id` is omitted when not set and `relationships` is omitted until the first
//! relationship is stored. Attribute order is insertion order.

use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::document::errors::DocumentError;

/// A resource identifier, as the API accepts either numbers or strings.
///
/// Serialized untagged, so `ResourceId::Int(10)` is written as `10` and
/// `ResourceId::Str("10")` as `"10"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    /// A numeric id.
    Int(i64),
    /// A string id (the API returns ids as strings).
    Str(String),
}

impl ResourceId {
    /// Reads an id from a JSON number or string.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Int),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// Returns the id as an integer when it is one, or a numeric string.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ResourceId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ResourceId {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(value: &ResourceId) -> Self {
        value.clone()
    }
}

/// A typed reference to another resource: `{"type": ..., "id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The related resource type (e.g. `"categories"`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// The related resource id.
    pub id: ResourceId,
}

impl ResourceIdentifier {
    /// Creates a new identifier.
    pub fn new(resource_type: impl Into<String>, id: impl Into<ResourceId>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// A relationship: one reference or an ordered list of references.
///
/// Serializes as `{"data": {...}}` or `{"data": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    /// A to-one relationship.
    One(ResourceIdentifier),
    /// A to-many relationship; order is kept as given.
    Many(Vec<ResourceIdentifier>),
}

impl Relationship {
    /// Returns the referenced ids in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&ResourceId> {
        match self {
            Self::One(identifier) => vec![&identifier.id],
            Self::Many(identifiers) => identifiers.iter().map(|i| &i.id).collect(),
        }
    }
}

impl Serialize for Relationship {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::One(identifier) => map.serialize_entry("data", identifier)?,
            Self::Many(identifiers) => map.serialize_entry("data", identifiers)?,
        }
        map.end()
    }
}

/// An optional field that distinguishes "not provided" from an explicit `null`.
///
/// - `Unset` leaves the key out of the document
/// - `Null` writes JSON `null`
/// - `Value` writes the value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T = Value> {
    /// Not provided; the key is omitted.
    #[default]
    Unset,
    /// Explicitly null.
    Null,
    /// A value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field was not provided.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T: Into<Value>> Field<T> {
    /// Converts to the JSON that should be written, or `None` to omit the key.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Unset => None,
            Self::Null => Some(Value::Null),
            Self::Value(v) => Some(v.into()),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

/// One JSON:API resource document under assembly.
///
/// The resource type is fixed at construction. Attributes and relationships
/// are separate namespaces; setting either is an upsert (last write wins,
/// position kept from the first write).
///
/// # Example
///
/// ```rust
/// use mystore_api::document::Document;
/// use serde_json::json;
///
/// let mut doc = Document::new("categories");
/// doc.set_attribute("name", json!({"no": "Sko"}))
///     .set_relationship("parent", "categories", 4);
///
/// let built = doc.build().unwrap();
/// assert_eq!(
///     built.to_json_string(),
///     r#"{"data":{"type":"categories","attributes":{"name":{"no":"Sko"}},"relationships":{"parent":{"data":{"type":"categories","id":4}}}}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    resource_type: String,
    id: Option<ResourceId>,
    attributes: Map<String, Value>,
    relationships: Option<Vec<(String, Relationship)>>,
}

impl Document {
    /// Creates an empty document of the given resource type.
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: None,
            attributes: Map::new(),
            relationships: None,
        }
    }

    /// Returns the resource type.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Returns the id, if set.
    #[must_use]
    pub const fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    /// Returns the attributes in insertion order.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns one attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns one relationship.
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.relationships
            .as_ref()?
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, relationship)| relationship)
    }

    /// Returns `true` if a relationship with this name has been stored.
    #[must_use]
    pub fn has_relationship(&self, name: &str) -> bool {
        self.relationship(name).is_some()
    }

    /// Sets the id when one is given; `None` leaves the document unchanged.
    pub fn set_id(&mut self, id: Option<ResourceId>) -> &mut Self {
        if let Some(id) = id {
            self.id = Some(id);
        }
        self
    }

    /// Upserts one attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Upserts one optional attribute; `Field::Unset` is a no-op.
    pub fn set_field<T: Into<Value>>(
        &mut self,
        name: impl Into<String>,
        field: Field<T>,
    ) -> &mut Self {
        if let Some(value) = field.into_json() {
            self.attributes.insert(name.into(), value);
        }
        self
    }

    /// Upserts every entry except those named in `skip`; unset entries are
    /// left out.
    pub fn set_all_attributes<I, K, T>(&mut self, fields: I, skip: &[&str]) -> &mut Self
    where
        I: IntoIterator<Item = (K, Field<T>)>,
        K: Into<String>,
        T: Into<Value>,
    {
        for (name, field) in fields {
            let name = name.into();
            if skip.contains(&name.as_str()) {
                continue;
            }
            self.set_field(name, field);
        }
        self
    }

    /// Stores a to-one relationship.
    pub fn set_relationship(
        &mut self,
        name: impl Into<String>,
        related_type: impl Into<String>,
        id: impl Into<ResourceId>,
    ) -> &mut Self {
        let relationship = Relationship::One(ResourceIdentifier::new(related_type, id));
        self.upsert_relationship(name.into(), relationship);
        self
    }

    /// Stores a to-many relationship, one reference per id in input order.
    ///
    /// Ids are neither sorted nor deduplicated.
    pub fn set_relationship_from_list<I>(
        &mut self,
        name: impl Into<String>,
        related_type: impl Into<String>,
        ids: I,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        let related_type = related_type.into();
        let identifiers = ids
            .into_iter()
            .map(|id| ResourceIdentifier::new(related_type.clone(), id))
            .collect();
        self.upsert_relationship(name.into(), Relationship::Many(identifiers));
        self
    }

    fn upsert_relationship(&mut self, name: String, relationship: Relationship) {
        let relationships = self.relationships.get_or_insert_with(Vec::new);
        if let Some(slot) = relationships.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = relationship;
        } else {
            relationships.push((name, relationship));
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.attributes
    }

    /// Serializes the document without any mandatory-field checks.
    ///
    /// This is for partial documents, such as an update that only moves a
    /// relationship. Only [`ResourceBuilder::build`] enforces a resource's
    /// mandatory attributes and relationships, so documents for `create`
    /// should go through a [`ResourceBuilder`] or a [`NewResource`] type.
    ///
    /// [`ResourceBuilder::build`]: crate::document::ResourceBuilder::build
    /// [`ResourceBuilder`]: crate::document::ResourceBuilder
    /// [`NewResource`]: crate::document::NewResource
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialization`] if serialization fails.
    pub fn build(&self) -> Result<BuiltDocument, DocumentError> {
        let data = serde_json::to_value(self)?;
        let mut root = Map::new();
        root.insert("data".to_string(), data);
        Ok(BuiltDocument(Value::Object(root)))
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Document", 4)?;
        state.serialize_field("type", &self.resource_type)?;
        if let Some(id) = &self.id {
            state.serialize_field("id", id)?;
        } else {
            state.skip_field("id")?;
        }
        state.serialize_field("attributes", &self.attributes)?;
        if let Some(relationships) = &self.relationships {
            state.serialize_field("relationships", &RelationshipsRef(relationships))?;
        } else {
            state.skip_field("relationships")?;
        }
        state.end()
    }
}

struct RelationshipsRef<'a>(&'a [(String, Relationship)]);

impl Serialize for RelationshipsRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, relationship) in self.0 {
            map.serialize_entry(name, relationship)?;
        }
        map.end()
    }
}

/// A serialized, immutable document ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuiltDocument(Value);

impl BuiltDocument {
    /// Returns the document as JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the document, returning its JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Returns the resource type of the document.
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.0.get("data")?.get("type")?.as_str()
    }

    /// Returns the compact JSON text sent on the wire.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }
}
