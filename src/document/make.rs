//! Typed constructors for the documents the API accepts.
//!
//! Each `New*` struct maps its fields onto attributes (in declaration order)
//! and its id fields onto relationships, then builds through the matching
//! [`BuilderSpec`](crate::document::BuilderSpec). Fields left as `None` are
//! omitted from the document rather than sent as `null`.
//!
//! The smaller resources are plain functions instead of structs.
//!
//! # Example
//!
//! ```rust
//! use mystore_api::document::{Localized, NewProduct, NewResource};
//!
//! let product = NewProduct::new(
//!     Localized::single("no", "Test"),
//!     Localized::single("no", "test"),
//!     [10, 11],
//! );
//! let built = product.build().unwrap();
//! assert_eq!(built.resource_type(), Some("products"));
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::document::builder::{BuilderSpec, ResourceBuilder};
use crate::document::errors::DocumentError;
use crate::document::model::{BuiltDocument, Field, ResourceId};
use crate::document::specs;

/// Format used for every timestamp attribute.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Related type written into an order's `order_status` relationship.
// TODO: confirm against the live API; "order-statuses" would be expected here.
pub const ORDER_STATUS_RELATED_TYPE: &str = "customers";

/// Formats a timestamp the way the API expects it.
#[must_use]
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

mod timestamp {
    use super::{format_timestamp, NaiveDateTime, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(timestamp) => serializer.serialize_str(&format_timestamp(timestamp)),
            None => serializer.serialize_none(),
        }
    }
}

#[allow(clippy::ptr_arg)]
fn comma_joined<S>(ids: &Vec<ResourceId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

/// A localized text attribute: language code to text.
///
/// # Example
///
/// ```rust
/// use mystore_api::document::Localized;
///
/// let name = Localized::single("no", "Sko").with("en", "Shoes");
/// assert_eq!(name.get("en"), Some("Shoes"));
/// assert_eq!(serde_json::to_string(&name).unwrap(), r#"{"no":"Sko","en":"Shoes"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(Map<String, Value>);

impl Localized {
    /// Creates an empty set of translations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value with a single translation.
    pub fn single(language: impl AsRef<str>, text: impl Into<String>) -> Self {
        Self::new().with(language, text)
    }

    /// Adds or replaces one translation.
    #[must_use]
    pub fn with(mut self, language: impl AsRef<str>, text: impl Into<String>) -> Self {
        self.0
            .insert(language.as_ref().to_string(), Value::String(text.into()));
        self
    }

    /// Returns the text for one language.
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).and_then(Value::as_str)
    }

    /// Returns `true` if there are no translations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Localized> for Value {
    fn from(value: Localized) -> Self {
        Self::Object(value.0)
    }
}

/// A typed input that builds into one resource document.
///
/// Implementors serialize to their attribute set; routing fields (the
/// document id and related ids) are `#[serde(skip)]` and applied in
/// [`relate`](Self::relate).
pub trait NewResource: Serialize {
    /// The spec the document is validated against.
    const SPEC: &'static BuilderSpec;

    /// The caller-chosen id, if any.
    fn id(&self) -> Option<&ResourceId>;

    /// Stores relationships and any derived attributes.
    fn relate(&self, _builder: &mut ResourceBuilder) {}

    /// Returns a builder holding this input's attributes and relationships.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialization`] if the input cannot be serialized.
    fn builder(&self) -> Result<ResourceBuilder, DocumentError> {
        let mut builder = ResourceBuilder::new(Self::SPEC);
        builder.set_all_attributes(attribute_fields(self)?, &[]);
        self.relate(&mut builder);
        builder.set_id(self.id().cloned());
        Ok(builder)
    }

    /// Builds and validates the document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if serialization or validation fails.
    fn build(&self) -> Result<BuiltDocument, DocumentError> {
        self.builder()?.build()
    }
}

fn attribute_fields<T: Serialize + ?Sized>(
    input: &T,
) -> Result<Vec<(String, Field)>, DocumentError> {
    match serde_json::to_value(input)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, value)| (name, Field::Value(value)))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// A product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProduct {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: Localized,
    pub slug: Localized,
    /// Categories, in display order.
    #[serde(skip)]
    pub category_ids: Vec<ResourceId>,
    #[serde(skip)]
    pub tax_class_id: Option<ResourceId>,
    #[serde(skip)]
    pub manufacturer_id: Option<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewed_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image5: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image7: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
}

impl NewProduct {
    /// Creates a product with its mandatory fields.
    pub fn new<I>(name: Localized, slug: Localized, category_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        Self {
            name,
            slug,
            category_ids: category_ids.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl NewResource for NewProduct {
    const SPEC: &'static BuilderSpec = &specs::PRODUCTS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder.set_relationship_from_list("categories", "categories", &self.category_ids);
        if let Some(tax_class_id) = &self.tax_class_id {
            builder.set_relationship("tax-class", "tax-classes", tax_class_id);
        }
        if let Some(manufacturer_id) = &self.manufacturer_id {
            builder.set_relationship("manufacturer", "manufacturers", manufacturer_id);
        }
    }
}

/// A category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: Localized,
    pub slug: Localized,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Localized>,
    /// Parent category.
    #[serde(skip)]
    pub parent: Option<ResourceId>,
}

impl NewCategory {
    /// Creates a category with its mandatory fields.
    #[must_use]
    pub fn new(name: Localized, slug: Localized) -> Self {
        Self {
            name,
            slug,
            ..Default::default()
        }
    }
}

impl NewResource for NewCategory {
    const SPEC: &'static BuilderSpec = &specs::CATEGORIES;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        if let Some(parent) = &self.parent {
            builder.set_relationship("parent", "categories", parent);
        }
    }
}

/// A customer.
///
/// Zip codes, phone numbers and company numbers accept strings or numbers;
/// every attribute is sent as a string. Secondary and billing address fields
/// left unset are copied from the primary ones when the document is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub address_address: String,
    pub address_zipcode: Value,
    pub address_city: String,
    pub address_country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub last_login: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_company_co: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_company_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_company_co: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_company_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_zipcode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_country: Option<String>,
}

impl NewCustomer {
    /// Creates a customer with its mandatory fields.
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        zipcode: impl Into<Value>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            address_address: address.into(),
            address_zipcode: zipcode.into(),
            address_city: city.into(),
            address_country: country.into(),
            ..Default::default()
        }
    }
}

impl NewResource for NewCustomer {
    const SPEC: &'static BuilderSpec = &specs::CUSTOMERS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }
}

/// A product attribute (one option value offered on a product).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProductAttribute {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    #[serde(skip)]
    pub product_id: ResourceId,
    #[serde(skip)]
    pub product_option_id: ResourceId,
    #[serde(skip)]
    pub product_option_value_id: ResourceId,
    pub option_values_price: f64,
    pub option_values_price_prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewProductAttribute {
    /// Creates an attribute with no price difference.
    pub fn new(
        product_id: impl Into<ResourceId>,
        product_option_id: impl Into<ResourceId>,
        product_option_value_id: impl Into<ResourceId>,
    ) -> Self {
        Self {
            id: None,
            product_id: product_id.into(),
            product_option_id: product_option_id.into(),
            product_option_value_id: product_option_value_id.into(),
            option_values_price: 0.0,
            option_values_price_prefix: "+".to_string(),
            weight: None,
            image: None,
        }
    }
}

impl NewResource for NewProductAttribute {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_ATTRIBUTES;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder
            .set_relationship("product", "products", &self.product_id)
            .set_relationship("product-option", "product-options", &self.product_option_id)
            .set_relationship(
                "product-option-value",
                "product-option-values",
                &self.product_option_value_id,
            );
    }
}

/// A product variant (a combination of product attributes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProductVariant {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    #[serde(skip)]
    pub product_id: ResourceId,
    #[serde(skip)]
    pub product_attribute_ids: Vec<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
}

impl NewProductVariant {
    /// Creates a variant of `product_id` made of the given attributes.
    pub fn new<I>(product_id: impl Into<ResourceId>, product_attribute_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        Self {
            id: None,
            product_id: product_id.into(),
            product_attribute_ids: product_attribute_ids.into_iter().map(Into::into).collect(),
            quantity: None,
            sku: None,
            cost: None,
            ean: None,
        }
    }
}

impl NewResource for NewProductVariant {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_VARIANTS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder
            .set_relationship("product", "products", &self.product_id)
            .set_relationship_from_list(
                "product-attributes",
                "product-attributes",
                &self.product_attribute_ids,
            );
    }
}

/// A special (sale) price on a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProductSpecial {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    #[serde(skip)]
    pub product_id: ResourceId,
    pub specials_price: f64,
    pub status: i64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub expires_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub status_changed_at: Option<NaiveDateTime>,
}

impl NewProductSpecial {
    /// Creates a special with its mandatory fields.
    pub fn new(product_id: impl Into<ResourceId>, specials_price: f64, status: i64) -> Self {
        Self {
            id: None,
            product_id: product_id.into(),
            specials_price,
            status,
            created_at: None,
            updated_at: None,
            expires_at: None,
            status_changed_at: None,
        }
    }
}

impl NewResource for NewProductSpecial {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_SPECIALS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder.set_relationship("product", "products", &self.product_id);
    }
}

/// A customer's review of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProductReview {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: String,
    pub rating: i64,
    pub review: Localized,
    #[serde(skip)]
    pub product_id: ResourceId,
    #[serde(skip)]
    pub customer_id: ResourceId,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl NewResource for NewProductReview {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_REVIEWS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder
            .set_relationship("product", "products", &self.product_id)
            .set_relationship("customer", "customers", &self.customer_id);
    }
}

/// A product option (e.g. "Size").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProductOption {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: Localized,
    pub track_stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<String>,
}

impl NewResource for NewProductOption {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_OPTIONS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }
}

/// A value of one or more product options (e.g. "XL").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewProductOptionValue {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: Localized,
    #[serde(skip)]
    pub product_option_ids: Vec<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
}

impl NewResource for NewProductOptionValue {
    const SPEC: &'static BuilderSpec = &specs::PRODUCT_OPTION_VALUES;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder.set_relationship_from_list(
            "product-options",
            "product-options",
            &self.product_option_ids,
        );
    }
}

/// A manufacturer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewManufacturer {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: String,
    pub slug: Localized,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<Localized>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<Localized>,
}

impl NewResource for NewManufacturer {
    const SPEC: &'static BuilderSpec = &specs::MANUFACTURERS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }
}

/// A discount code.
///
/// `value_type` is 1 for a percentage and 2 for a fixed amount. Id lists are
/// sent comma-joined. When `remaining_value` is not set it equals `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDiscount {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub name: Localized,
    pub code: String,
    pub value: f64,
    pub value_type: i64,
    pub combinable: bool,
    pub treshold_value: f64,
    pub value_can_transcend_order_total: i64,
    pub valid_for_product_specials: i64,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub valid_from: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub valid_to: Option<NaiveDateTime>,
    pub valid_times: i64,
    pub valid_for_all_products: i64,
    #[serde(serialize_with = "comma_joined")]
    pub valid_for_product_ids: Vec<ResourceId>,
    #[serde(serialize_with = "comma_joined")]
    pub valid_for_category_ids: Vec<ResourceId>,
    #[serde(serialize_with = "comma_joined")]
    pub valid_for_manufacturer_ids: Vec<ResourceId>,
    pub allow_partial_use: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_value: Option<f64>,
    pub limited_to_customer_id: i64,
    pub only_most_expensive_product: i64,
    pub use_original_price: i64,
}

impl NewDiscount {
    /// Creates an amount discount valid for all products.
    pub fn new(name: Localized, code: impl Into<String>, value: f64) -> Self {
        Self {
            id: None,
            name,
            code: code.into(),
            value,
            value_type: 2,
            combinable: false,
            treshold_value: 0.0,
            value_can_transcend_order_total: 1,
            valid_for_product_specials: 0,
            valid_from: None,
            valid_to: None,
            valid_times: 0,
            valid_for_all_products: 1,
            valid_for_product_ids: Vec::new(),
            valid_for_category_ids: Vec::new(),
            valid_for_manufacturer_ids: Vec::new(),
            allow_partial_use: 1,
            remaining_value: None,
            limited_to_customer_id: 0,
            only_most_expensive_product: 0,
            use_original_price: 0,
        }
    }
}

impl NewResource for NewDiscount {
    const SPEC: &'static BuilderSpec = &specs::DISCOUNTS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        if self.remaining_value.is_none() {
            builder.set_attribute("remaining_value", self.value);
        }
    }
}

/// A tax class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTaxClass {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub tax_rate: f64,
    pub title: String,
    pub description: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
}

impl NewResource for NewTaxClass {
    const SPEC: &'static BuilderSpec = &specs::TAX_CLASSES;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }
}

/// A URL redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRedirect {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    pub redirect_from: String,
    pub redirect_to: String,
    pub code: u16,
    pub scope: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    pub language: String,
}

impl NewRedirect {
    /// Creates a permanent (301), store-wide redirect for Norwegian.
    pub fn new(redirect_from: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            id: None,
            redirect_from: redirect_from.into(),
            redirect_to: redirect_to.into(),
            code: 301,
            scope: "global".to_string(),
            created_at: None,
            language: "no".to_string(),
        }
    }
}

impl NewResource for NewRedirect {
    const SPEC: &'static BuilderSpec = &specs::REDIRECTS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }
}

/// An order for an existing customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    #[serde(skip)]
    pub id: Option<ResourceId>,
    #[serde(skip)]
    pub customer_id: ResourceId,
    #[serde(skip)]
    pub order_status_id: ResourceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_address_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_zipcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_module: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub created_at: Option<NaiveDateTime>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub finished_at: Option<NaiveDateTime>,
    pub currency: String,
    pub currency_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub invoice_due_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdue_notice: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub overdue_notice_due_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_note: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub credit_note_created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    pub estimated_delivery_at: Option<NaiveDateTime>,
}

impl NewOrder {
    /// Creates an empty NOK order for a customer.
    pub fn new(customer_id: impl Into<ResourceId>, order_status_id: impl Into<ResourceId>) -> Self {
        Self {
            id: None,
            customer_id: customer_id.into(),
            order_status_id: order_status_id.into(),
            customer_address_name: None,
            customer_address_company: None,
            customer_address_address: None,
            customer_address_region: None,
            customer_address_city: None,
            customer_address_zipcode: None,
            customer_address_state: None,
            customer_address_country: None,
            customer_address_phone: None,
            customer_address_email: None,
            shipping_address_name: None,
            shipping_address_company: None,
            shipping_address_address: None,
            shipping_address_region: None,
            shipping_address_city: None,
            shipping_address_zipcode: None,
            shipping_address_state: None,
            shipping_address_country: None,
            billing_address_name: None,
            billing_address_company: None,
            billing_address_address: None,
            billing_address_region: None,
            billing_address_city: None,
            billing_address_zipcode: None,
            billing_address_state: None,
            billing_address_country: None,
            billing_address_email: None,
            company_number: None,
            payment_method: None,
            payment_module: None,
            updated_at: None,
            created_at: None,
            finished_at: None,
            currency: "NOK".to_string(),
            currency_value: 1.0,
            invoice_id: None,
            invoice_due_at: None,
            shipping_method: None,
            tracking_number: None,
            overdue_notice: None,
            overdue_notice_due_at: None,
            credit_note: None,
            credit_note_created_at: None,
            reference: None,
            estimated_delivery_at: None,
        }
    }

    /// Copies address data from a customer resource object.
    ///
    /// `customer` is the `data` object of a customer response. The customer
    /// and billing addresses are always overwritten; the shipping address is
    /// only filled when no shipping name was given. The address name falls
    /// back to the customer's name.
    pub fn fill_from_customer(&mut self, customer: &Value) {
        let attrs = customer.get("attributes").unwrap_or(&Value::Null);
        let text = |key: &str| attribute_text(attrs, key);
        let address_name = text("address_name").or_else(|| text("name"));

        self.customer_address_name.clone_from(&address_name);
        self.customer_address_company = text("address_company");
        self.customer_address_address = text("address_address");
        self.customer_address_region = text("address_region");
        self.customer_address_city = text("address_city");
        self.customer_address_zipcode = text("address_zipcode");
        self.customer_address_state = text("address_state");
        self.customer_address_country = text("address_country");
        self.customer_address_phone = text("phone");
        self.customer_address_email = text("email");

        if self.shipping_address_name.is_none() {
            self.shipping_address_name = address_name;
            self.shipping_address_company = text("address_company");
            self.shipping_address_address = text("address_address");
            self.shipping_address_region = text("address_region");
            self.shipping_address_city = text("address_city");
            self.shipping_address_zipcode = text("address_zipcode");
            self.shipping_address_state = text("address_state");
            self.shipping_address_country = text("address_country");
        }

        self.billing_address_name = text("billing_address_name");
        self.billing_address_company = text("billing_address_company");
        self.billing_address_address = text("billing_address_address");
        self.billing_address_region = text("billing_address_region");
        self.billing_address_city = text("billing_address_city");
        self.billing_address_zipcode = text("billing_address_zipcode");
        self.billing_address_state = text("billing_address_state");
        self.billing_address_country = text("billing_address_country");
        self.billing_address_email = text("billing_address_email");

        self.company_number = text("address_company_number");
    }
}

fn attribute_text(attributes: &Value, key: &str) -> Option<String> {
    match attributes.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl NewResource for NewOrder {
    const SPEC: &'static BuilderSpec = &specs::ORDERS;

    fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    fn relate(&self, builder: &mut ResourceBuilder) {
        builder
            .set_relationship("customer", "customers", &self.customer_id)
            .set_relationship("order_status", ORDER_STATUS_RELATED_TYPE, &self.order_status_id);
    }
}

/// A key/value tag on a product.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn product_tag(
    key: impl Into<String>,
    value: impl Into<Value>,
    product_id: impl Into<ResourceId>,
    tag_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::PRODUCT_TAGS);
    builder
        .set_attribute("key", key.into())
        .set_attribute("value", value)
        .set_relationship("product", "products", product_id)
        .set_id(tag_id);
    builder.build()
}

/// A sub-option of a product option.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn product_suboption(
    name: impl Into<String>,
    product_option_id: impl Into<ResourceId>,
    suboption_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::PRODUCT_SUBOPTIONS);
    builder
        .set_attribute("name", name.into())
        .set_relationship("product-option", "product-options", product_option_id)
        .set_id(suboption_id);
    builder.build()
}

/// Links a property option and value to a product.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn product_property(
    product_id: impl Into<ResourceId>,
    property_option_id: impl Into<ResourceId>,
    property_value_id: impl Into<ResourceId>,
    property_id: Option<ResourceId>,
    sort: Option<i64>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::PRODUCT_PROPERTIES);
    builder
        .set_field("sort", Field::from(sort))
        .set_relationship("product", "products", product_id)
        .set_relationship(
            "product-property-option",
            "product-property-options",
            property_option_id,
        )
        .set_relationship(
            "product-property-value",
            "product-property-values",
            property_value_id,
        )
        .set_id(property_id);
    builder.build()
}

/// A product property option (e.g. "Material").
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn property_option(
    name: impl Into<String>,
    language_code: impl AsRef<str>,
    property_option_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::PRODUCT_PROPERTY_OPTIONS);
    builder
        .set_attribute("name", name.into())
        .set_attribute("language_code", language_code.as_ref())
        .set_id(property_option_id);
    builder.build()
}

/// A product property value (e.g. "Wool").
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn property_value(
    name: impl Into<String>,
    language_code: impl AsRef<str>,
    property_value_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::PRODUCT_PROPERTY_VALUES);
    builder
        .set_attribute("name", name.into())
        .set_attribute("language_code", language_code.as_ref())
        .set_id(property_value_id);
    builder.build()
}

/// A product price for one customer group.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn customer_group_price(
    price: f64,
    product_id: impl Into<ResourceId>,
    customer_group_id: impl Into<ResourceId>,
    tax_class_id: Option<ResourceId>,
    customer_group_price_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::CUSTOMER_GROUP_PRICES);
    builder
        .set_attribute("price", price)
        .set_relationship("product", "products", product_id)
        .set_relationship("customer-group", "customer-groups", customer_group_id)
        .set_id(customer_group_price_id);
    if let Some(tax_class_id) = tax_class_id {
        builder.set_relationship("tax-class", "tax-classes", tax_class_id);
    }
    builder.build()
}

/// Related ids for an attribute price in one customer group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePriceTarget {
    pub product_id: ResourceId,
    pub option_id: ResourceId,
    pub value_id: ResourceId,
    pub customer_group_id: ResourceId,
}

/// An option-value price addition for one customer group.
///
/// # Errors
///
/// Returns [`DocumentError`] if the document fails to build.
pub fn attribute_customer_group_price(
    price: f64,
    target: AttributePriceTarget,
    tax_class_id: Option<ResourceId>,
    attribute_customer_group_price_id: Option<ResourceId>,
) -> Result<BuiltDocument, DocumentError> {
    let mut builder = ResourceBuilder::new(&specs::ATTRIBUTE_CUSTOMER_GROUP_PRICES);
    builder
        .set_attribute("price", price)
        .set_attribute("price_prefix", "+")
        .set_relationship("product", "products", target.product_id)
        .set_relationship("product-option", "product-options", target.option_id)
        .set_relationship(
            "product-option-value",
            "product-option-values",
            target.value_id,
        )
        .set_relationship(
            "customer-group",
            "customer-groups",
            target.customer_group_id,
        );
    if let Some(tax_class_id) = tax_class_id {
        builder.set_relationship("tax-class", "tax-classes", tax_class_id);
    }
    builder.set_id(attribute_customer_group_price_id);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_product_end_to_end_wire_shape() {
        let product = NewProduct::new(
            Localized::single("no", "Test"),
            Localized::single("no", "test"),
            [10, 11],
        );
        assert_eq!(
            product.build().unwrap().to_json_string(),
            r#"{"data":{"type":"products","attributes":{"name":{"no":"Test"},"slug":{"no":"test"}},"relationships":{"categories":{"data":[{"type":"categories","id":10},{"type":"categories","id":11}]}}}}"#
        );
    }

    #[test]
    fn test_product_optional_relationships_and_id() {
        let mut product = NewProduct::new(
            Localized::single("no", "Sko"),
            Localized::single("no", "sko"),
            ["3"],
        );
        product.id = Some(ResourceId::from(77));
        product.tax_class_id = Some(ResourceId::from(1));
        product.price = Some(499.0);

        let value = product.build().unwrap().into_value();
        assert_eq!(value["data"]["id"], json!(77));
        assert_eq!(value["data"]["attributes"]["price"], json!(499.0));
        assert_eq!(
            value["data"]["relationships"]["tax-class"],
            json!({"data": {"type": "tax-classes", "id": 1}})
        );
        assert!(value["data"]["relationships"].get("manufacturer").is_none());
    }

    #[test]
    fn test_timestamps_use_api_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-09 08:05:00");

        let mut category = NewCategory::new(Localized::single("no", "A"), Localized::single("no", "a"));
        category.created_at = Some(ts);
        category.parent = Some(ResourceId::from(2));

        let value = category.build().unwrap().into_value();
        assert_eq!(value["data"]["attributes"]["created_at"], "2024-03-09 08:05:00");
        assert_eq!(
            value["data"]["relationships"]["parent"]["data"]["type"],
            "categories"
        );
    }

    #[test]
    fn test_customer_backfill_and_stringify() {
        let mut customer = NewCustomer::new("Ola", "Nordmann", "ola@example.no", "Gate 1", 1234, "Oslo", "NO");
        customer.billing_address_city = Some("Bergen".to_string());
        customer.newsletter = Some(true);

        let attrs = customer.build().unwrap().into_value()["data"]["attributes"].clone();
        assert_eq!(attrs["address_zipcode"], "1234");
        assert_eq!(attrs["billing_address_zipcode"], "1234");
        assert_eq!(attrs["billing_address_address"], "Gate 1");
        assert_eq!(attrs["billing_address_city"], "Bergen");
        assert_eq!(attrs["address_name"], "Ola");
        assert_eq!(attrs["newsletter"], "true");
        assert!(attrs.get("billing_address_company").is_none());
    }

    #[test]
    fn test_discount_defaults() {
        let mut discount = NewDiscount::new(Localized::single("no", "Sommer"), "SOMMER", 100.0);
        discount.valid_for_category_ids = vec![ResourceId::from(4), ResourceId::from("9")];

        let attrs = discount.build().unwrap().into_value()["data"]["attributes"].clone();
        assert_eq!(attrs["value_type"], 2);
        assert_eq!(attrs["combinable"], false);
        assert_eq!(attrs["remaining_value"], json!(100.0));
        assert_eq!(attrs["valid_for_category_ids"], "4,9");
        assert_eq!(attrs["valid_for_product_ids"], "");
    }

    #[test]
    fn test_redirect_defaults() {
        let attrs = NewRedirect::new("/old", "/new").build().unwrap().into_value()["data"]
            ["attributes"]
            .clone();
        assert_eq!(
            attrs,
            json!({"redirect_from": "/old", "redirect_to": "/new", "code": 301, "scope": "global", "language": "no"})
        );
    }

    #[test]
    fn test_order_relationships_keep_legacy_status_type() {
        let order = NewOrder::new(5, 1);
        let value = order.build().unwrap().into_value();
        assert_eq!(
            value["data"]["relationships"],
            json!({
                "customer": {"data": {"type": "customers", "id": 5}},
                "order_status": {"data": {"type": "customers", "id": 1}}
            })
        );
        assert_eq!(value["data"]["attributes"], json!({"currency": "NOK", "currency_value": 1.0}));
    }

    #[test]
    fn test_order_fill_from_customer() {
        let customer = json!({
            "type": "customers",
            "id": "5",
            "attributes": {
                "name": "Kari",
                "address_name": null,
                "address_address": "Vei 2",
                "address_zipcode": "5003",
                "address_city": "Bergen",
                "phone": 12345678,
                "email": "kari@example.no",
                "billing_address_name": "Kari AS",
                "address_company_number": "999888777"
            }
        });

        let mut order = NewOrder::new("5", 1);
        order.fill_from_customer(&customer);
        assert_eq!(order.customer_address_name.as_deref(), Some("Kari"));
        assert_eq!(order.shipping_address_city.as_deref(), Some("Bergen"));
        assert_eq!(order.customer_address_phone.as_deref(), Some("12345678"));
        assert_eq!(order.billing_address_name.as_deref(), Some("Kari AS"));
        assert_eq!(order.company_number.as_deref(), Some("999888777"));

        let mut order = NewOrder::new("5", 1);
        order.shipping_address_name = Some("Lager".to_string());
        order.fill_from_customer(&customer);
        assert_eq!(order.shipping_address_name.as_deref(), Some("Lager"));
        assert!(order.shipping_address_city.is_none());
    }

    #[test]
    fn test_small_constructors() {
        let tag = product_tag("color", "red", 3, None).unwrap().into_value();
        assert_eq!(tag["data"]["type"], "product-tags");
        assert_eq!(tag["data"]["relationships"]["product"]["data"]["id"], 3);

        let property = product_property(1, 2, 3, None, None).unwrap().into_value();
        assert!(property["data"]["attributes"].get("sort").is_none());

        let price = attribute_customer_group_price(
            10.0,
            AttributePriceTarget {
                product_id: 1.into(),
                option_id: 2.into(),
                value_id: 3.into(),
                customer_group_id: 4.into(),
            },
            Some(ResourceId::from(6)),
            None,
        )
        .unwrap()
        .into_value();
        assert_eq!(price["data"]["attributes"]["price_prefix"], "+");
        assert_eq!(
            price["data"]["relationships"]["tax-class"]["data"]["id"],
            6
        );
    }

    #[test]
    fn test_variant_requires_attribute_list() {
        let variant = NewProductVariant::new(1, Vec::<ResourceId>::new());
        assert!(variant.build().is_ok());

        let empty: &[ResourceId] = &[];
        let value = NewProductVariant::new(1, empty).build().unwrap().into_value();
        assert_eq!(
            value["data"]["relationships"]["product-attributes"]["data"],
            json!([])
        );
    }
}
