//! Sequential pagination over JSON:API collections.
//!
//! A listing response carries `data: [...]` and optionally `links.next`.
//! [`PageWalker`] follows `links.next` until it is absent or `null`, one page
//! at a time: the next reference is only known after the current page has
//! been parsed, so pages are never fetched ahead.
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::RestClient;
//!
//! let client = RestClient::new(&session, None);
//!
//! // Eager: every item of every page, or an error.
//! let products = client.paginate("products").collect_all().await?;
//!
//! // Lazy: one page at a time.
//! let mut walker = client.paginate("customers");
//! while let Some(page) = walker.next_page().await? {
//!     println!("{} customers on this page", page.len());
//! }
//! ```

use serde_json::Value;

use crate::clients::rest::RestError;
use crate::clients::{HttpMethod, HttpRequest, MediaProfile, RequestSender};

/// Walks a paginated collection by following `links.next`.
///
/// The walker owns its cursor; a walker is consumed by a single listing and
/// never shared. After the last page, or after any error, the cursor is
/// cleared and further calls to [`next_page`](Self::next_page) return `None`.
#[derive(Debug)]
pub struct PageWalker<'a, S: RequestSender> {
    sender: &'a S,
    cursor: Option<String>,
    pages_fetched: usize,
}

impl<'a, S: RequestSender> PageWalker<'a, S> {
    /// Creates a walker starting at `start` (store-relative path or absolute URL).
    pub fn new(sender: &'a S, start: impl Into<String>) -> Self {
        Self {
            sender,
            cursor: Some(start.into()),
            pages_fetched: 0,
        }
    }

    /// Returns the number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Returns `true` once the walk has ended.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    /// Fetches the page at the cursor and advances.
    ///
    /// Returns `Ok(None)` once the previous page had no `links.next`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MalformedResponse`] if the page has no `data`
    /// array or its `links.next` leads back to itself, and [`RestError::Http`]
    /// if the request fails. Any error ends the walk.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Value>>, RestError> {
        let Some(cursor) = self.cursor.take() else {
            return Ok(None);
        };

        let request = HttpRequest::builder(HttpMethod::Get, cursor.as_str())
            .media(MediaProfile::JsonApi)
            .build()
            .map_err(|e| RestError::Http(e.into()))?;

        let response = self.sender.send(request).await?;
        self.pages_fetched += 1;

        let items = match response.data() {
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                return Err(RestError::malformed(
                    cursor,
                    "`data` is not an array on a listing page",
                ))
            }
            None => {
                return Err(RestError::malformed(
                    cursor,
                    "response has no `data` member",
                ))
            }
        };

        tracing::debug!(
            page = self.pages_fetched,
            items = items.len(),
            url = %cursor,
            "Fetched Mystore API page"
        );

        let next = response
            .next_link()
            .map(|next| self.sender.resolve_url(next));
        if next.as_deref() == Some(self.sender.resolve_url(&cursor).as_str()) {
            return Err(RestError::malformed(
                cursor,
                "`links.next` points at the page just fetched",
            ));
        }
        self.cursor = next;

        Ok(Some(items))
    }

    /// Fetches every remaining page and concatenates their items in order.
    ///
    /// Either the complete sequence is returned or an error; never a partial
    /// list.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`next_page`](Self::next_page).
    pub async fn collect_all(mut self) -> Result<Vec<Value>, RestError> {
        let mut output = Vec::new();
        while let Some(page) = self.next_page().await? {
            output.extend(page);
        }
        Ok(output)
    }
}
