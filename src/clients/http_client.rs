//! HTTP client for Mystore API communication.
//!
//! This module provides the [`RequestSender`] seam used by the rest of the
//! crate and [`HttpClient`], its `reqwest`-backed implementation.

use std::collections::HashMap;

use reqwest::Url;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::upload::ImageUpload;
use crate::config::MystoreConfig;

/// Something that can deliver an [`HttpRequest`] and hand back the response.
///
/// Implementations must translate network-level failures into
/// [`HttpError::Network`] and non-2xx statuses into [`HttpError::Response`].
/// The rest of the crate only ever issues one request at a time through a
/// sender and never relies on it being usable from several tasks at once.
///
/// Tests substitute a scripted sender to count calls precisely.
#[allow(async_fn_in_trait)]
pub trait RequestSender: Send + Sync {
    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on local validation failure, transport failure
    /// or a non-success status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Resolves a request path against the sender's base URL.
    ///
    /// Follows URL reference resolution: absolute URLs are kept and
    /// root-relative paths replace the base path.
    fn resolve_url(&self, path: &str) -> String;
}

/// HTTP client for making requests to the Mystore API.
///
/// The client handles:
/// - Base URL construction (`{host}/shops/{store}/`)
/// - Default `Authorization` and `User-Agent` headers, attached once
/// - Per-request `Content-Type`/`Accept` from the [`MediaProfile`](crate::clients::MediaProfile)
/// - Multipart encoding for image uploads
///
/// No request is ever retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use mystore_api::{HttpClient, HttpRequest, HttpMethod, Session};
///
/// let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
/// let client = HttpClient::new(&session, None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/12")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL ending in `/` (e.g., `https://api.mystore.no/shops/my-store/`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The store, token and user agent to authenticate with
    /// * `config` - Optional configuration for `api_host` and `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use mystore_api::{Session, StoreName, AccessToken, UserAgent};
    /// use mystore_api::clients::HttpClient;
    ///
    /// let session = Session::new(
    ///     StoreName::new("my-store").unwrap(),
    ///     AccessToken::new("api-token").unwrap(),
    ///     UserAgent::new("Importer/1.0").unwrap(),
    /// );
    ///
    /// let client = HttpClient::new(&session, None);
    /// assert_eq!(client.base_url(), "https://api.mystore.no/shops/my-store/");
    /// ```
    #[must_use]
    pub fn new(session: &Session, config: Option<&MystoreConfig>) -> Self {
        let host = config.map_or(crate::config::DEFAULT_API_HOST, MystoreConfig::host);
        let base_url = format!("{}/shops/{}/", host.trim_end_matches('/'), session.store);

        let user_agent = config
            .and_then(MystoreConfig::user_agent_prefix)
            .map_or_else(
                || session.user_agent.as_ref().to_string(),
                |prefix| format!("{prefix} | {}", session.user_agent.as_ref()),
            );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Authorization".to_string(), session.authorization_header());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Mystore API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path);
        let content_type = request.media.as_content_type();

        let mut headers = self.default_headers.clone();
        headers.insert("Accept".to_string(), content_type.to_string());
        if matches!(request.body, Some(RequestBody::Text(_))) {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            media = ?request.media,
            "Sending Mystore API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match request.body {
            Some(RequestBody::Text(body)) => {
                req_builder = req_builder.body(body);
            }
            Some(RequestBody::Image(image)) => {
                req_builder = req_builder.multipart(Self::image_form(&image)?);
            }
            None => {}
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let response = HttpResponse::from_raw(code, res_headers, body_text);

        if !response.is_ok() {
            tracing::debug!(status = code, url = %url, "Mystore API returned an error status");
            return Err(HttpError::Response(HttpResponseError {
                code,
                request_id: response.request_id().map(String::from),
                body: response.raw_body,
            }));
        }

        if response.is_unparsed() {
            tracing::warn!(
                status = code,
                url = %url,
                "Mystore API returned a non-JSON body on a success status"
            );
        }

        Ok(response)
    }

    /// Builds the multipart form carrying one image.
    fn image_form(image: &ImageUpload) -> Result<reqwest::multipart::Form, HttpError> {
        let part = reqwest::multipart::Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.image_type().mime())?;

        Ok(reqwest::multipart::Form::new().part(ImageUpload::FIELD_NAME, part))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl RequestSender for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.request(request).await
    }

    fn resolve_url(&self, path: &str) -> String {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_or_else(
                |_| format!("{}{}", self.base_url, path.trim_start_matches('/')),
                String::from,
            )
    }
}
