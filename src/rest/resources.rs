//! The resource registry.
//!
//! One immutable [`ResourceConfig`] per remote collection. Adding a resource
//! is adding a constant here and listing it in [`ALL`].

use crate::clients::MediaProfile;
use crate::rest::{Permissions, ResourceConfig};

/// Products.
pub const PRODUCTS: ResourceConfig = ResourceConfig::new("products", "products");
/// Product categories.
pub const CATEGORIES: ResourceConfig = ResourceConfig::new("categories", "categories");
/// Customers.
pub const CUSTOMERS: ResourceConfig = ResourceConfig::new("customers", "customers");
/// Customer groups; managed in the admin, read-only here.
pub const CUSTOMER_GROUPS: ResourceConfig =
    ResourceConfig::new("customer-groups", "customer-groups").with_permissions(Permissions::READ_ONLY);
/// Orders.
pub const ORDERS: ResourceConfig = ResourceConfig::new("orders", "orders");
/// Order statuses; read-only.
pub const ORDER_STATUSES: ResourceConfig =
    ResourceConfig::new("order-statuses", "order-statuses").with_permissions(Permissions::READ_ONLY);
/// Order lines.
pub const ORDER_PRODUCTS: ResourceConfig = ResourceConfig::new("order-products", "order-products");
/// Order totals.
pub const ORDER_TOTALS: ResourceConfig = ResourceConfig::new("order-totals", "order-totals");
/// Status changes recorded on orders.
pub const ORDER_STATUS_HISTORIES: ResourceConfig =
    ResourceConfig::new("order-status-histories", "order-status-histories");

/// Priced option/value combinations.
pub const PRODUCT_ATTRIBUTES: ResourceConfig =
    ResourceConfig::new("product-attributes", "product-attributes");
/// Product variants.
pub const PRODUCT_VARIANTS: ResourceConfig =
    ResourceConfig::new("product-variants", "product-variants");
/// Special prices.
pub const PRODUCT_SPECIALS: ResourceConfig =
    ResourceConfig::new("product-specials", "product-specials");
/// Product reviews.
pub const PRODUCT_REVIEWS: ResourceConfig =
    ResourceConfig::new("product-reviews", "product-reviews");
/// Product options.
pub const PRODUCT_OPTIONS: ResourceConfig =
    ResourceConfig::new("product-options", "product-options");
/// Product suboptions.
pub const PRODUCT_SUBOPTIONS: ResourceConfig =
    ResourceConfig::new("product-suboptions", "product-suboptions");
/// Values of product options.
pub const PRODUCT_OPTION_VALUES: ResourceConfig =
    ResourceConfig::new("product-option-values", "product-option-values");
/// Product properties.
pub const PRODUCT_PROPERTIES: ResourceConfig =
    ResourceConfig::new("product-properties", "product-properties");
/// Property names.
pub const PRODUCT_PROPERTY_OPTIONS: ResourceConfig =
    ResourceConfig::new("product-property-options", "product-property-options");
/// Property values.
pub const PRODUCT_PROPERTY_VALUES: ResourceConfig =
    ResourceConfig::new("product-property-values", "product-property-values");
/// Product tags.
pub const PRODUCT_TAGS: ResourceConfig = ResourceConfig::new("product-tags", "product-tags");
/// Product prices per customer group.
pub const PRODUCT_CUSTOMER_GROUP_PRICES: ResourceConfig =
    ResourceConfig::new("product-customer-group-prices", "product-customer-group-prices");
/// Attribute prices per customer group.
pub const PRODUCT_ATTRIBUTE_CUSTOMER_GROUP_PRICES: ResourceConfig = ResourceConfig::new(
    "product-attribute-customer-group-prices",
    "product-attribute-customer-group-prices",
);

/// Manufacturers.
pub const MANUFACTURERS: ResourceConfig = ResourceConfig::new("manufacturers", "manufacturers");
/// Discount codes.
pub const DISCOUNTS: ResourceConfig = ResourceConfig::new("discounts", "discounts");
/// Tax classes.
pub const TAX_CLASSES: ResourceConfig = ResourceConfig::new("tax-classes", "tax-classes");
/// URL redirects.
pub const REDIRECTS: ResourceConfig = ResourceConfig::new("redirects", "redirects");
/// Store languages; read-only.
pub const LANGUAGES: ResourceConfig =
    ResourceConfig::new("languages", "languages").with_permissions(Permissions::READ_ONLY);
/// Store currencies; read-only.
pub const CURRENCIES: ResourceConfig =
    ResourceConfig::new("currencies", "currencies").with_permissions(Permissions::READ_ONLY);

/// Singleton endpoints permit listing only.
const SINGLETON: Permissions = Permissions {
    all: true,
    ..Permissions::NONE
};

/// Store settings; a single plain-JSON object.
pub const SETTINGS: ResourceConfig = ResourceConfig::new("settings", "settings")
    .with_media(MediaProfile::Json)
    .with_permissions(SINGLETON);
/// Shipping setup; a single plain-JSON object.
pub const SHIPPING: ResourceConfig = ResourceConfig::new("shipping", "shipping")
    .with_media(MediaProfile::Json)
    .with_permissions(SINGLETON);
/// Payment setup; a single plain-JSON object.
pub const PAYMENT: ResourceConfig = ResourceConfig::new("payment", "payment")
    .with_media(MediaProfile::Json)
    .with_permissions(SINGLETON);

/// Image uploads; create only.
pub const IMAGES: ResourceConfig = ResourceConfig::new("images", "images")
    .with_media(MediaProfile::Json)
    .with_permissions(Permissions {
        create: true,
        ..Permissions::NONE
    });

/// Every registered resource.
pub const ALL: &[ResourceConfig] = &[
    PRODUCTS,
    CATEGORIES,
    CUSTOMERS,
    CUSTOMER_GROUPS,
    ORDERS,
    ORDER_STATUSES,
    ORDER_PRODUCTS,
    ORDER_TOTALS,
    ORDER_STATUS_HISTORIES,
    PRODUCT_ATTRIBUTES,
    PRODUCT_VARIANTS,
    PRODUCT_SPECIALS,
    PRODUCT_REVIEWS,
    PRODUCT_OPTIONS,
    PRODUCT_SUBOPTIONS,
    PRODUCT_OPTION_VALUES,
    PRODUCT_PROPERTIES,
    PRODUCT_PROPERTY_OPTIONS,
    PRODUCT_PROPERTY_VALUES,
    PRODUCT_TAGS,
    PRODUCT_CUSTOMER_GROUP_PRICES,
    PRODUCT_ATTRIBUTE_CUSTOMER_GROUP_PRICES,
    MANUFACTURERS,
    DISCOUNTS,
    TAX_CLASSES,
    REDIRECTS,
    LANGUAGES,
    CURRENCIES,
    SETTINGS,
    SHIPPING,
    PAYMENT,
    IMAGES,
];

/// Looks up a registered resource by name.
///
/// # Example
///
/// ```rust
/// use mystore_api::rest::resource_by_name;
///
/// assert_eq!(resource_by_name("tax-classes").unwrap().endpoint, Some("tax-classes"));
/// assert!(resource_by_name("widgets").is_none());
/// ```
#[must_use]
pub fn resource_by_name(name: &str) -> Option<&'static ResourceConfig> {
    ALL.iter().find(|config| config.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::ResourceOperation;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_configured() {
        let names: HashSet<&str> = ALL.iter().map(|config| config.name).collect();
        assert_eq!(names.len(), ALL.len());
        assert!(ALL.iter().all(|config| config.endpoint.is_some()));
    }

    #[test]
    fn test_plain_json_endpoints() {
        for config in [SETTINGS, SHIPPING, PAYMENT, IMAGES] {
            assert_eq!(config.media, MediaProfile::Json);
        }
        assert_eq!(PRODUCTS.media, MediaProfile::JsonApi);
    }

    #[test]
    fn test_singletons_only_allow_all() {
        assert!(SETTINGS.authorize(ResourceOperation::All).is_ok());
        assert!(SETTINGS.authorize(ResourceOperation::Update).is_err());
        assert!(IMAGES.authorize(ResourceOperation::Create).is_ok());
        assert!(IMAGES.authorize(ResourceOperation::All).is_err());
    }

    #[test]
    fn test_read_only_groups() {
        assert!(CUSTOMER_GROUPS.authorize(ResourceOperation::Get).is_ok());
        assert!(CUSTOMER_GROUPS.authorize(ResourceOperation::Delete).is_err());
    }
}
