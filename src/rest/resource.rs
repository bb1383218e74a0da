//! The generic resource client.
//!
//! Every remote collection is described by one immutable [`ResourceConfig`]:
//! its name, its endpoint, the media profile it speaks and the operations it
//! permits. A [`ResourceClient`] pairs a config with a [`RestClient`] and
//! exposes the operations, each of which is authorized locally before any
//! network call is made.
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::rest::{resources, ResourceClient};
//!
//! let products = ResourceClient::new(&client, resources::PRODUCTS);
//!
//! let all = products.list(false, None).await?;
//! let one = products.find(12).await?;
//! let status = products.delete(12).await?;
//! ```

use std::collections::HashSet;
use std::fmt;

use serde_json::{json, Value};

use crate::clients::{HttpClient, HttpResponse, MediaProfile, RequestSender, RestClient, RestError};
use crate::document::{Batch, BuiltDocument, ResourceId, ResourceIdentifier};
use crate::rest::ResourceError;

/// Operations a resource may permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Walk the whole collection (also sub-collections and singletons).
    All,
    /// Fetch one item (also relationship listings).
    Get,
    /// POST a new item.
    Create,
    /// PATCH an item (also relationship updates).
    Update,
    /// DELETE an item.
    Delete,
}

impl ResourceOperation {
    /// Returns the lowercase operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operations a resource permits.
///
/// Every config carries its own copy; there is no shared default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct Permissions {
    /// Listing the collection, including singleton reads.
    pub all: bool,
    /// Fetching one item by id.
    pub get: bool,
    /// Creating items.
    pub create: bool,
    /// Updating items and their relationships.
    pub update: bool,
    /// Deleting items.
    pub delete: bool,
}

impl Permissions {
    /// Every operation.
    pub const FULL: Self = Self {
        all: true,
        get: true,
        create: true,
        update: true,
        delete: true,
    };

    /// Listing and fetching only.
    pub const READ_ONLY: Self = Self {
        all: true,
        get: true,
        create: false,
        update: false,
        delete: false,
    };

    /// Nothing.
    pub const NONE: Self = Self {
        all: false,
        get: false,
        create: false,
        update: false,
        delete: false,
    };

    /// Returns `true` if `operation` is permitted.
    #[must_use]
    pub const fn allows(&self, operation: ResourceOperation) -> bool {
        match operation {
            ResourceOperation::All => self.all,
            ResourceOperation::Get => self.get,
            ResourceOperation::Create => self.create,
            ResourceOperation::Update => self.update,
            ResourceOperation::Delete => self.delete,
        }
    }
}

/// Immutable description of one remote resource.
///
/// # Example
///
/// ```rust
/// use mystore_api::rest::{Permissions, ResourceConfig, ResourceOperation};
///
/// const TAGS: ResourceConfig =
///     ResourceConfig::new("product-tags", "product-tags").with_permissions(Permissions::READ_ONLY);
///
/// assert_eq!(TAGS.authorize(ResourceOperation::Get).unwrap(), "product-tags");
/// assert!(TAGS.authorize(ResourceOperation::Delete).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Resource name used in errors and registry lookups.
    pub name: &'static str,
    /// Store-relative collection path, or `None` if not configured.
    pub endpoint: Option<&'static str>,
    /// Media profile for every request to this resource.
    pub media: MediaProfile,
    /// Permitted operations.
    pub permissions: Permissions,
}

impl ResourceConfig {
    /// Creates a fully permitted JSON:API resource.
    #[must_use]
    pub const fn new(name: &'static str, endpoint: &'static str) -> Self {
        Self {
            name,
            endpoint: Some(endpoint),
            media: MediaProfile::JsonApi,
            permissions: Permissions::FULL,
        }
    }

    /// Creates a resource with no endpoint; every operation is refused.
    #[must_use]
    pub const fn unconfigured(name: &'static str) -> Self {
        Self {
            name,
            endpoint: None,
            media: MediaProfile::JsonApi,
            permissions: Permissions::NONE,
        }
    }

    /// Sets the media profile.
    #[must_use]
    pub const fn with_media(mut self, media: MediaProfile) -> Self {
        self.media = media;
        self
    }

    /// Sets the permission table.
    #[must_use]
    pub const fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Checks that `operation` may run, returning the endpoint.
    ///
    /// Purely local: the endpoint is checked first, then the permission.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotConfigured`] if there is no endpoint, or
    /// [`ResourceError::OperationNotPermitted`] if the table forbids it.
    pub fn authorize(&self, operation: ResourceOperation) -> Result<&'static str, ResourceError> {
        let Some(endpoint) = self.endpoint else {
            tracing::debug!(resource = self.name, %operation, "Refused: no endpoint configured");
            return Err(ResourceError::NotConfigured {
                resource: self.name,
            });
        };

        if !self.permissions.allows(operation) {
            tracing::debug!(resource = self.name, %operation, "Refused: operation not permitted");
            return Err(ResourceError::OperationNotPermitted {
                resource: self.name,
                operation,
            });
        }

        Ok(endpoint)
    }
}

/// A request body for create and update.
///
/// No further validation is performed on any of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A document built (and validated) by a builder.
    Document(BuiltDocument),
    /// A raw JSON structure.
    Json(Value),
    /// Pre-serialized JSON text.
    Text(String),
}

impl Payload {
    /// Returns the body text.
    #[must_use]
    pub fn into_body(self) -> String {
        match self {
            Self::Document(document) => document.to_json_string(),
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
        }
    }
}

impl From<BuiltDocument> for Payload {
    fn from(document: BuiltDocument) -> Self {
        Self::Document(document)
    }
}

impl From<Batch> for Payload {
    fn from(batch: Batch) -> Self {
        Self::Json(batch.build())
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Builds the equality filter suffix for a collection path.
///
/// # Example
///
/// ```rust
/// use mystore_api::rest::filter_query;
///
/// assert_eq!(
///     filter_query("sku", "AB 1"),
///     "?filter[sku][path]=sku&filter[sku][value]=AB%201"
/// );
/// ```
#[must_use]
pub fn filter_query(attribute: &str, value: &str) -> String {
    let attribute = urlencoding::encode(attribute);
    let value = urlencoding::encode(value);
    format!("?filter[{attribute}][path]={attribute}&filter[{attribute}][value]={value}")
}

/// Operations on one resource, authorized against its [`ResourceConfig`].
///
/// Cheap to create; borrows the client.
#[derive(Debug)]
pub struct ResourceClient<'a, S: RequestSender = HttpClient> {
    client: &'a RestClient<S>,
    config: ResourceConfig,
}

impl<'a, S: RequestSender> ResourceClient<'a, S> {
    /// Creates a resource client.
    pub const fn new(client: &'a RestClient<S>, config: ResourceConfig) -> Self {
        Self { client, config }
    }

    /// Returns the resource configuration.
    #[must_use]
    pub const fn config(&self) -> &ResourceConfig {
        &self.config
    }

    fn authorize(&self, operation: ResourceOperation) -> Result<&'static str, ResourceError> {
        self.config.authorize(operation)
    }

    /// Walks the whole collection.
    ///
    /// With `only_ids`, each item is projected to its `id` value.
    ///
    /// # Errors
    ///
    /// Returns a local error if listing is not permitted, or
    /// [`RestError::MalformedResponse`] if a page or item breaks the contract.
    pub async fn list(
        &self,
        only_ids: bool,
        endpoint_override: Option<&str>,
    ) -> Result<Vec<Value>, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::All)?;
        let path = endpoint_override.unwrap_or(endpoint);
        let items = self.client.paginate(path).collect_all().await?;

        if !only_ids {
            return Ok(items);
        }

        items
            .iter()
            .map(|item| {
                item.get("id")
                    .cloned()
                    .ok_or_else(|| {
                        ResourceError::from(RestError::malformed(path, "listed item has no `id`"))
                    })
            })
            .collect()
    }

    /// Walks the collection, returning only ids.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_ids(
        &self,
        endpoint_override: Option<&str>,
    ) -> Result<Vec<ResourceId>, ResourceError> {
        let path = endpoint_override
            .or(self.config.endpoint)
            .unwrap_or_default();
        let ids = self.list(true, endpoint_override).await?;
        parse_ids(path, &ids)
    }

    /// Fetches one item, returning its `data` object.
    ///
    /// The override, when given, is used as the full path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] if both `id` and
    /// `endpoint_override` are `None`, before any request is sent.
    pub async fn get(
        &self,
        id: Option<ResourceId>,
        endpoint_override: Option<&str>,
    ) -> Result<Value, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::Get)?;
        let path = match (endpoint_override, id) {
            (Some(path), _) => path.to_string(),
            (None, Some(id)) => format!("{endpoint}/{id}"),
            (None, None) => {
                return Err(ResourceError::MissingIdentifier {
                    resource: self.config.name,
                })
            }
        };

        let response = self.client.get(&path, self.config.media, None).await?;
        match response.data() {
            Some(data @ Value::Object(_)) => Ok(data.clone()),
            _ => Err(RestError::malformed(path, "expected a `data` object").into()),
        }
    }

    /// Fetches one item by id.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub async fn find(&self, id: impl Into<ResourceId>) -> Result<Value, ResourceError> {
        self.get(Some(id.into()), None).await
    }

    /// POSTs a new item.
    ///
    /// # Errors
    ///
    /// Returns a local error if creation is not permitted, or the HTTP error.
    pub async fn create(
        &self,
        payload: impl Into<Payload>,
        endpoint_override: Option<&str>,
    ) -> Result<HttpResponse, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::Create)?;
        let path = endpoint_override.unwrap_or(endpoint);
        let body = payload.into().into_body();
        Ok(self.client.post(path, body, self.config.media).await?)
    }

    /// PATCHes an item.
    ///
    /// # Errors
    ///
    /// Returns a local error if updating is not permitted, or the HTTP error.
    pub async fn update(
        &self,
        id: impl Into<ResourceId>,
        payload: impl Into<Payload>,
    ) -> Result<HttpResponse, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::Update)?;
        let path = format!("{endpoint}/{}", id.into());
        let body = payload.into().into_body();
        Ok(self.client.patch(&path, body, self.config.media).await?)
    }

    /// DELETEs an item, returning the status code.
    ///
    /// # Errors
    ///
    /// Returns a local error if deletion is not permitted, or the HTTP error.
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Result<u16, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::Delete)?;
        let path = format!("{endpoint}/{}", id.into());
        let response = self.client.delete(&path, self.config.media).await?;
        Ok(response.code)
    }

    /// Fetches a non-collection endpoint, returning the parsed body as is.
    ///
    /// # Errors
    ///
    /// Returns a local error if listing is not permitted, or the HTTP error.
    pub async fn get_singleton(
        &self,
        endpoint_override: Option<&str>,
    ) -> Result<Value, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::All)?;
        let path = endpoint_override.unwrap_or(endpoint);
        let response = self.client.get(path, self.config.media, None).await?;
        Ok(response.body)
    }

    /// Walks a sub-collection, e.g. `products/12/product-variants`.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn related(
        &self,
        id: impl Into<ResourceId>,
        relation: &str,
    ) -> Result<Vec<Value>, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::All)?;
        let path = format!("{endpoint}/{}/{relation}", id.into());
        Ok(self.client.paginate(&path).collect_all().await?)
    }

    /// Lists the ids of a relationship, e.g. `products/12/relationships/categories`.
    ///
    /// # Errors
    ///
    /// Returns a local error if fetching is not permitted, the HTTP error, or
    /// [`RestError::MalformedResponse`] if `data` is not a list of identifiers.
    pub async fn relationship_ids(
        &self,
        id: impl Into<ResourceId>,
        relation: &str,
    ) -> Result<Vec<ResourceId>, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::Get)?;
        let path = format!("{endpoint}/{}/relationships/{relation}", id.into());
        let response = self.client.get(&path, self.config.media, None).await?;

        let Some(Value::Array(data)) = response.data() else {
            return Err(RestError::malformed(path, "expected a `data` array").into());
        };
        let ids: Vec<Value> = data
            .iter()
            .map(|item| item.get("id").cloned().unwrap_or(Value::Null))
            .collect();
        parse_ids(&path, &ids)
    }

    /// Replaces a relationship with an ordered list of ids, returning the status code.
    ///
    /// # Errors
    ///
    /// Returns a local error if updating is not permitted, or the HTTP error.
    pub async fn update_relationship<I>(
        &self,
        id: impl Into<ResourceId>,
        relation: &str,
        related_type: &str,
        ids: I,
    ) -> Result<u16, ResourceError>
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        let endpoint = self.authorize(ResourceOperation::Update)?;
        let path = format!("{endpoint}/{}/relationships/{relation}", id.into());
        let identifiers: Vec<ResourceIdentifier> = ids
            .into_iter()
            .map(|id| ResourceIdentifier::new(related_type, id))
            .collect();
        let body = json!({ "data": identifiers }).to_string();

        let response = self.client.patch(&path, body, self.config.media).await?;
        Ok(response.code)
    }

    /// Walks the items whose `attribute` equals `value`.
    ///
    /// # Errors
    ///
    /// See [`list`](Self::list).
    pub async fn list_filtered(
        &self,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<Value>, ResourceError> {
        let endpoint = self.authorize(ResourceOperation::All)?;
        let path = format!("{endpoint}{}", filter_query(attribute, value));
        Ok(self.client.paginate(&path).collect_all().await?)
    }
}

fn parse_ids(path: &str, values: &[Value]) -> Result<Vec<ResourceId>, ResourceError> {
    values
        .iter()
        .map(|value| {
            ResourceId::from_value(value)
                .ok_or_else(|| {
                    ResourceError::from(RestError::malformed(path, format!("invalid id {value}")))
                })
        })
        .collect()
}

/// Ids of the items in a listing, in order, without duplicates.
pub(crate) fn collect_ids(items: &[Value]) -> Vec<ResourceId> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| item.get("id").and_then(ResourceId::from_value))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::ScriptedSender;
    use crate::clients::{HttpMethod, RequestBody};
    use crate::document::Document;
    use crate::error::ErrorKind;

    const WIDGETS: ResourceConfig = ResourceConfig::new("widgets", "widgets");
    const LOCKED: ResourceConfig = WIDGETS.with_permissions(Permissions::READ_ONLY);
    const NOWHERE: ResourceConfig = ResourceConfig::unconfigured("nowhere");

    fn client(sender: ScriptedSender) -> RestClient<ScriptedSender> {
        RestClient::with_sender(sender)
    }

    fn body_text(request: &crate::clients::HttpRequest) -> &str {
        match &request.body {
            Some(RequestBody::Text(text)) => text,
            _ => panic!("expected a text body"),
        }
    }

    #[test]
    fn test_permissions_allow() {
        assert!(Permissions::FULL.allows(ResourceOperation::Delete));
        assert!(Permissions::READ_ONLY.allows(ResourceOperation::Get));
        assert!(!Permissions::READ_ONLY.allows(ResourceOperation::Update));
        assert!(!Permissions::NONE.allows(ResourceOperation::All));
    }

    #[test]
    fn test_authorize_checks_endpoint_before_permissions() {
        let error = NOWHERE.authorize(ResourceOperation::All).unwrap_err();
        assert!(matches!(error, ResourceError::NotConfigured { resource: "nowhere" }));

        let error = LOCKED.authorize(ResourceOperation::Delete).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OperationNotPermitted);
    }

    #[test]
    fn test_configs_are_independent_values() {
        let mut copy = WIDGETS;
        copy.permissions.delete = false;
        assert!(WIDGETS.permissions.delete);
        assert!(!copy.permissions.delete);
    }

    #[test]
    fn test_filter_query_encodes_value() {
        assert_eq!(
            filter_query("name", "a&b"),
            "?filter[name][path]=name&filter[name][value]=a%26b"
        );
    }

    #[tokio::test]
    async fn test_delete_not_permitted_makes_no_call() {
        let client = client(ScriptedSender::new());
        let widgets = ResourceClient::new(&client, LOCKED);

        let error = widgets.delete(1).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OperationNotPermitted);
        assert_eq!(client.sender().calls(), 0);
    }

    #[tokio::test]
    async fn test_unconfigured_resource_makes_no_call() {
        let client = client(ScriptedSender::new());
        let nowhere = ResourceClient::new(&client, NOWHERE);

        assert!(matches!(
            nowhere.list(false, None).await,
            Err(ResourceError::NotConfigured { .. })
        ));
        assert!(matches!(
            nowhere.create("{}", None).await,
            Err(ResourceError::NotConfigured { .. })
        ));
        assert_eq!(client.sender().calls(), 0);
    }

    #[tokio::test]
    async fn test_get_without_id_or_override_makes_no_call() {
        let client = client(ScriptedSender::new());
        let widgets = ResourceClient::new(&client, WIDGETS);

        let error = widgets.get(None, None).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingIdentifier);
        assert_eq!(client.sender().calls(), 0);
    }

    #[tokio::test]
    async fn test_get_unwraps_data_object() {
        let client = client(
            ScriptedSender::new()
                .with_json(200, json!({"data": {"type": "widgets", "id": "4"}}))
                .with_json(200, json!({"data": {"type": "widgets", "id": "5"}})),
        );
        let widgets = ResourceClient::new(&client, WIDGETS);

        let item = widgets.find(4).await.unwrap();
        assert_eq!(item["id"], "4");

        let item = widgets.get(Some(ResourceId::from(9)), Some("special/5")).await.unwrap();
        assert_eq!(item["id"], "5");

        let paths: Vec<String> = client.sender().requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["widgets/4", "special/5"]);
    }

    #[tokio::test]
    async fn test_get_without_data_object_is_malformed() {
        let client = client(ScriptedSender::new().with_json(200, json!({"data": []})));
        let widgets = ResourceClient::new(&client, WIDGETS);

        let error = widgets.find(4).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_list_only_ids() {
        let client = client(ScriptedSender::new().with_json(
            200,
            json!({"data": [{"type": "widgets", "id": "1"}, {"type": "widgets", "id": "2"}], "links": {}}),
        ));
        let widgets = ResourceClient::new(&client, WIDGETS);

        let ids = widgets.list(true, None).await.unwrap();
        assert_eq!(ids, vec![json!("1"), json!("2")]);
    }

    #[tokio::test]
    async fn test_list_ids_parses_identifiers() {
        let client = client(ScriptedSender::new().with_json(
            200,
            json!({"data": [{"id": "7"}, {"id": 8}]}),
        ));
        let widgets = ResourceClient::new(&client, WIDGETS);

        let ids = widgets.list_ids(None).await.unwrap();
        assert_eq!(ids, vec![ResourceId::from("7"), ResourceId::from(8)]);
    }

    #[tokio::test]
    async fn test_create_and_update_send_payloads() {
        let client = client(
            ScriptedSender::new()
                .with_json(201, json!({"data": {"id": "1"}}))
                .with_json(200, json!({"data": {"id": "1"}})),
        );
        let widgets = ResourceClient::new(&client, WIDGETS);

        let mut document = Document::new("widgets");
        document.set_attribute("name", "A");
        let response = widgets.create(document.build().unwrap(), None).await.unwrap();
        assert_eq!(response.code, 201);

        widgets.update(1, json!({"data": {"id": "1"}})).await.unwrap();

        let requests = client.sender().requests();
        assert_eq!(requests[0].http_method, HttpMethod::Post);
        assert_eq!(requests[0].path, "widgets");
        assert_eq!(
            body_text(&requests[0]),
            r#"{"data":{"type":"widgets","attributes":{"name":"A"}}}"#
        );
        assert_eq!(requests[1].http_method, HttpMethod::Patch);
        assert_eq!(requests[1].path, "widgets/1");
    }

    #[tokio::test]
    async fn test_delete_returns_status() {
        let client = client(ScriptedSender::new().with_json(204, Value::Null));
        let widgets = ResourceClient::new(&client, WIDGETS);

        assert_eq!(widgets.delete("9").await.unwrap(), 204);
        assert_eq!(client.sender().requests()[0].http_method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_response_error_propagates() {
        let client = client(ScriptedSender::new().with_status(404, "not found"));
        let widgets = ResourceClient::new(&client, WIDGETS);

        let error = widgets.delete(9).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ResponseError);
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn test_singleton_uses_config_media() {
        const SETTINGS: ResourceConfig = ResourceConfig::new("settings", "settings")
            .with_media(MediaProfile::Json)
            .with_permissions(Permissions::READ_ONLY);
        let client = client(ScriptedSender::new().with_json(200, json!({"default_language": "no"})));
        let settings = ResourceClient::new(&client, SETTINGS);

        let body = settings.get_singleton(None).await.unwrap();
        assert_eq!(body["default_language"], "no");
        assert_eq!(client.sender().requests()[0].media, MediaProfile::Json);
    }

    #[tokio::test]
    async fn test_relationship_ids_and_update() {
        let client = client(
            ScriptedSender::new()
                .with_json(200, json!({"data": [{"type": "categories", "id": "3"}, {"type": "categories", "id": "1"}]}))
                .with_json(204, Value::Null),
        );
        let widgets = ResourceClient::new(&client, WIDGETS);

        let ids = widgets.relationship_ids(12, "categories").await.unwrap();
        assert_eq!(ids, vec![ResourceId::from("3"), ResourceId::from("1")]);

        let status = widgets
            .update_relationship(12, "categories", "categories", [3, 1, 2])
            .await
            .unwrap();
        assert_eq!(status, 204);

        let requests = client.sender().requests();
        assert_eq!(requests[0].path, "widgets/12/relationships/categories");
        assert_eq!(
            body_text(&requests[1]),
            r#"{"data":[{"type":"categories","id":3},{"type":"categories","id":1},{"type":"categories","id":2}]}"#
        );
    }

    #[tokio::test]
    async fn test_related_and_filtered_walk_sub_paths() {
        let client = client(
            ScriptedSender::new()
                .with_json(200, json!({"data": [{"id": "1"}]}))
                .with_json(200, json!({"data": []})),
        );
        let widgets = ResourceClient::new(&client, WIDGETS);

        assert_eq!(widgets.related(5, "product-tags").await.unwrap().len(), 1);
        assert!(widgets.list_filtered("sku", "X1").await.unwrap().is_empty());

        let paths: Vec<String> = client.sender().requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "widgets/5/product-tags",
                "widgets?filter[sku][path]=sku&filter[sku][value]=X1",
            ]
        );
    }

    #[test]
    fn test_collect_ids_dedups_in_order() {
        let items = vec![json!({"id": "2"}), json!({"id": "1"}), json!({"id": "2"}), json!({})];
        assert_eq!(
            collect_ids(&items),
            vec![ResourceId::from("2"), ResourceId::from("1")]
        );
    }
}
