//! HTTP request types for the Mystore API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Mystore API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::upload::ImageUpload;

/// HTTP methods issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for listing and retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PATCH method for updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content-type profile for a request.
///
/// Most resources speak JSON:API; a handful of non-standard endpoints
/// (settings, shipping, payment, images) speak plain JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MediaProfile {
    /// `application/vnd.api+json` for both `Content-Type` and `Accept`.
    #[default]
    JsonApi,
    /// `application/json` for both `Content-Type` and `Accept`.
    Json,
}

impl MediaProfile {
    /// Returns the MIME type string for this profile.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::JsonApi => "application/vnd.api+json",
            Self::Json => "application/json",
        }
    }
}

/// Body of an outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// A serialized JSON or JSON:API document, sent verbatim.
    Text(String),
    /// An image sent as a multipart form.
    Image(ImageUpload),
}

/// An HTTP request to be sent to the Mystore API.
///
/// `path` is either relative to the store base URL (`products/12`) or an
/// absolute URL, which is how pagination `next` links are followed.
///
/// # Example
///
/// ```rust
/// use mystore_api::clients::{HttpRequest, HttpMethod, MediaProfile};
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "settings")
///     .media(MediaProfile::Json)
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "products")
///     .body(r#"{"data":{"type":"products","attributes":{}}}"#)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the store base URL) or absolute URL.
    pub path: String,
    /// The content-type profile.
    pub media: MediaProfile,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Returns `true` if `path` is an absolute URL rather than a store path.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] if `http_method` is
    /// `Post` or `Patch` but `body` is `None`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Patch) && self.body.is_none()
        {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    media: MediaProfile,
    body: Option<RequestBody>,
    query: Option<HashMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            media: MediaProfile::default(),
            body: None,
            query: None,
            extra_headers: None,
        }
    }

    /// Sets a serialized request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    /// Sets an image upload as the request body.
    #[must_use]
    pub fn image(mut self, image: ImageUpload) -> Self {
        self.body = Some(RequestBody::Image(image));
        self
    }

    /// Sets the content-type profile (default: JSON:API).
    #[must_use]
    pub const fn media(mut self, media: MediaProfile) -> Self {
        self.media = media;
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            media: self.media,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
