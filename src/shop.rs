//! The store facade.
//!
//! [`ShopClient`] owns the REST client for one store and hands out a
//! [`ResourceClient`] per registered resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::{ShopClient, Session};
//!
//! let session = Session::from_parts("my-store", "api-token", "Importer/1.0")?;
//! let shop = ShopClient::new(&session, None);
//!
//! assert_eq!(shop.test_connection().await?, 200);
//! let language = shop.default_language().await?;
//!
//! let customers = shop.customers().list(true, None).await?;
//! ```

use std::path::Path;

use serde_json::Value;

use crate::auth::Session;
use crate::clients::{
    HttpClient, HttpError, HttpResponse, ImageUpload, MediaProfile, RequestSender, RestClient,
    RestError,
};
use crate::config::{LanguageCode, MystoreConfig};
use crate::document::NewOrder;
use crate::rest::{resources, ResourceClient, ResourceConfig, ResourceError, ResourceOperation};

/// Client for one store.
///
/// # Thread Safety
///
/// `ShopClient<HttpClient>` is `Send + Sync`.
#[derive(Debug)]
pub struct ShopClient<S: RequestSender = HttpClient> {
    client: RestClient<S>,
    fallback_language: LanguageCode,
}

// Verify ShopClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopClient>();
};

impl ShopClient<HttpClient> {
    /// Creates a client for the session's store.
    ///
    /// No request is sent; call [`test_connection`](Self::test_connection)
    /// to check the credentials.
    #[must_use]
    pub fn new(session: &Session, config: Option<&MystoreConfig>) -> Self {
        let fallback_language = config
            .map(|c| c.default_language().clone())
            .unwrap_or_default();
        Self::with_client(RestClient::new(session, config), fallback_language)
    }
}

impl<S: RequestSender> ShopClient<S> {
    /// Creates a facade over an existing REST client.
    pub const fn with_client(client: RestClient<S>, fallback_language: LanguageCode) -> Self {
        Self {
            client,
            fallback_language,
        }
    }

    /// Returns the underlying REST client.
    pub const fn rest(&self) -> &RestClient<S> {
        &self.client
    }

    /// Returns a client for any resource config.
    pub const fn resource(&self, config: ResourceConfig) -> ResourceClient<'_, S> {
        ResourceClient::new(&self.client, config)
    }

    /// Returns a client for a registered resource, by name.
    pub fn resource_by_name(&self, name: &str) -> Option<ResourceClient<'_, S>> {
        resources::resource_by_name(name).map(|config| self.resource(*config))
    }

    pub const fn products(&self) -> ResourceClient<'_, S> {
        self.resource(resources::PRODUCTS)
    }

    pub const fn categories(&self) -> ResourceClient<'_, S> {
        self.resource(resources::CATEGORIES)
    }

    pub const fn customers(&self) -> ResourceClient<'_, S> {
        self.resource(resources::CUSTOMERS)
    }

    pub const fn customer_groups(&self) -> ResourceClient<'_, S> {
        self.resource(resources::CUSTOMER_GROUPS)
    }

    pub const fn orders(&self) -> ResourceClient<'_, S> {
        self.resource(resources::ORDERS)
    }

    pub const fn product_attributes(&self) -> ResourceClient<'_, S> {
        self.resource(resources::PRODUCT_ATTRIBUTES)
    }

    pub const fn product_variants(&self) -> ResourceClient<'_, S> {
        self.resource(resources::PRODUCT_VARIANTS)
    }

    pub const fn manufacturers(&self) -> ResourceClient<'_, S> {
        self.resource(resources::MANUFACTURERS)
    }

    pub const fn tax_classes(&self) -> ResourceClient<'_, S> {
        self.resource(resources::TAX_CLASSES)
    }

    /// GETs the settings endpoint and returns the status code.
    ///
    /// An error status is returned as `Ok`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport failures.
    pub async fn test_connection(&self) -> Result<u16, ResourceError> {
        match self.settings_response().await {
            Ok(response) => Ok(response.code),
            Err(RestError::Http(HttpError::Response(e))) => {
                tracing::warn!(status = e.code, "Connection test failed");
                Ok(e.code)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn settings_response(&self) -> Result<HttpResponse, RestError> {
        self.client.get("settings", MediaProfile::Json, None).await
    }

    /// Returns the store settings object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails.
    pub async fn settings(&self) -> Result<Value, ResourceError> {
        self.resource(resources::SETTINGS).get_singleton(None).await
    }

    /// Returns the store's default language.
    ///
    /// Falls back to the configured language when the settings carry none.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the settings request fails.
    pub async fn default_language(&self) -> Result<LanguageCode, ResourceError> {
        let settings = self.settings().await?;
        let language = settings
            .get("default_language")
            .and_then(Value::as_str)
            .and_then(|code| LanguageCode::new(code).ok())
            .unwrap_or_else(|| self.fallback_language.clone());
        Ok(language)
    }

    /// Reads an image file and uploads it.
    ///
    /// The extension is checked before the file is read.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] with an invalid-request error for an
    /// unsupported extension or an unreadable file.
    pub async fn upload_image(&self, path: impl AsRef<Path>) -> Result<HttpResponse, ResourceError> {
        let endpoint = resources::IMAGES.authorize(ResourceOperation::Create)?;
        let image = ImageUpload::from_path(path).await?;
        Ok(self.client.upload(endpoint, image).await?)
    }

    /// Uploads an image already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the upload fails.
    pub async fn upload(&self, image: ImageUpload) -> Result<HttpResponse, ResourceError> {
        let endpoint = resources::IMAGES.authorize(ResourceOperation::Create)?;
        Ok(self.client.upload(endpoint, image).await?)
    }

    /// Fills an order's address fields from its customer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the customer cannot be fetched.
    pub async fn fill_order_from_customer(&self, order: &mut NewOrder) -> Result<(), ResourceError> {
        let customer = self.customers().find(&order.customer_id).await?;
        order.fill_from_customer(&customer);
        Ok(())
    }
}
