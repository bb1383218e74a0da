//! REST client implementation for the Mystore API.
//!
//! This module provides the [`RestClient`] type, the requestor every resource
//! operation goes through.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::rest::{PageWalker, RestError};
use crate::clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, ImageUpload, MediaProfile, RequestSender,
};
use crate::config::MystoreConfig;

/// REST API client for the Mystore API.
///
/// Provides `get`, `post`, `patch`, `delete` and `upload` over any
/// [`RequestSender`], plus [`paginate`](Self::paginate) for walking
/// collections.
///
/// # Thread Safety
///
/// `RestClient<HttpClient>` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use mystore_api::{MediaProfile, RestClient, Session};
///
/// let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
/// let client = RestClient::new(&session, None);
///
/// // GET a single product
/// let response = client.get("products/12", MediaProfile::JsonApi, None).await?;
///
/// // Walk every page of a collection
/// let categories = client.paginate("categories").collect_all().await?;
/// ```
#[derive(Debug)]
pub struct RestClient<S: RequestSender = HttpClient> {
    /// The sender requests are delivered through.
    sender: S,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient<HttpClient> {
    /// Creates a new REST client for the given session.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mystore_api::{RestClient, Session};
    ///
    /// let session = Session::from_parts("my-store", "api-token", "Importer/1.0").unwrap();
    /// let client = RestClient::new(&session, None);
    /// ```
    #[must_use]
    pub fn new(session: &Session, config: Option<&MystoreConfig>) -> Self {
        Self::with_sender(HttpClient::new(session, config))
    }
}

impl<S: RequestSender> RestClient<S> {
    /// Creates a REST client over an already configured sender.
    pub const fn with_sender(sender: S) -> Self {
        Self { sender }
    }

    /// Returns the underlying sender.
    pub const fn sender(&self) -> &S {
        &self.sender
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - A store-relative path (e.g., "products/12") or an absolute URL
    /// * `media` - The content-type profile
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        media: MediaProfile,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, media, None, query)
            .await
    }

    /// Sends a POST request with a serialized body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: String,
        media: MediaProfile,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, media, Some(body), None)
            .await
    }

    /// Sends a PATCH request with a serialized body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch(
        &self,
        path: &str,
        body: String,
        media: MediaProfile,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Patch, path, media, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str, media: MediaProfile) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, media, None, None)
            .await
    }

    /// POSTs an image as multipart form data using the plain-JSON profile.
    ///
    /// The image type was checked when the [`ImageUpload`] was created.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn upload(&self, path: &str, image: ImageUpload) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .media(MediaProfile::Json)
            .image(image)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;

        self.sender.send(request).await.map_err(Into::into)
    }

    /// Starts a pagination walk at `path`.
    ///
    /// Nothing is fetched until the walker is driven.
    pub fn paginate(&self, path: &str) -> PageWalker<'_, S> {
        PageWalker::new(&self.sender, path)
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        media: MediaProfile,
        body: Option<String>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path).media(media);

        if let Some(body) = body {
            builder = builder.body(body);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.sender.send(request).await.map_err(Into::into)
    }
}

/// Normalizes a store-relative path.
///
/// Leading slashes are stripped; absolute URLs are returned unchanged.
fn normalize_path(path: &str) -> Result<String, RestError> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }

    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::ScriptedSender;
    use crate::clients::{HttpError, RequestBody};
    use serde_json::json;

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/products").unwrap(), "products");
        assert_eq!(normalize_path("//products/1").unwrap(), "products/1");
    }

    #[test]
    fn test_normalize_path_keeps_absolute_urls() {
        let url = "https://api.mystore.no/shops/demo/products?page[number]=2";
        assert_eq!(normalize_path(url).unwrap(), url);
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { .. })
        ));
    }

    // === Request Shape Tests ===

    #[tokio::test]
    async fn test_get_uses_requested_media_profile() {
        let client = RestClient::with_sender(
            ScriptedSender::new().with_json(200, json!({"default_language": "no"})),
        );

        let response = client
            .get("settings", MediaProfile::Json, None)
            .await
            .unwrap();

        assert_eq!(response.body["default_language"], "no");
        let requests = client.sender().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].http_method, HttpMethod::Get);
        assert_eq!(requests[0].media, MediaProfile::Json);
        assert_eq!(requests[0].path, "settings");
    }

    #[tokio::test]
    async fn test_patch_sends_body_verbatim() {
        let client =
            RestClient::with_sender(ScriptedSender::new().with_json(200, json!({"data": {}})));

        client
            .patch("/products/5", r#"{"data":{}}"#.to_string(), MediaProfile::JsonApi)
            .await
            .unwrap();

        let request = &client.sender().requests()[0];
        assert_eq!(request.http_method, HttpMethod::Patch);
        assert_eq!(request.path, "products/5");
        assert_eq!(
            request.body,
            Some(RequestBody::Text(r#"{"data":{}}"#.to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_path_is_rejected_before_sending() {
        let client = RestClient::with_sender(ScriptedSender::new());

        let result = client.delete("", MediaProfile::JsonApi).await;

        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
        assert_eq!(client.sender().calls(), 0);
    }

    #[tokio::test]
    async fn test_error_status_is_surfaced_as_http_error() {
        let client = RestClient::with_sender(
            ScriptedSender::new().with_status(422, r#"{"errors":[{"title":"Invalid"}]}"#),
        );

        let result = client
            .post("products", "{}".to_string(), MediaProfile::JsonApi)
            .await;

        match result {
            Err(RestError::Http(HttpError::Response(e))) => {
                assert_eq!(e.code, 422);
                assert!(e.body.contains("Invalid"));
            }
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_uses_plain_json_profile() {
        let client = RestClient::with_sender(
            ScriptedSender::new().with_json(201, json!({"file": "front.png"})),
        );
        let image = ImageUpload::new("front.png", vec![1, 2, 3]).unwrap();

        client.upload("images", image).await.unwrap();

        let request = &client.sender().requests()[0];
        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.media, MediaProfile::Json);
        assert!(matches!(request.body, Some(RequestBody::Image(_))));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
