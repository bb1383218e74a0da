//! Builder specs for every resource kind the API accepts documents for.
//!
//! Each constant names the JSON:API `type` and the attributes and
//! relationships the API refuses to accept without.

use crate::document::builder::{BuilderSpec, StringCoercion};

/// Products: localized name and slug, filed under at least one category.
pub const PRODUCTS: BuilderSpec = BuilderSpec::new("products", &["name", "slug"], &["categories"]);

/// Categories.
pub const CATEGORIES: BuilderSpec = BuilderSpec::new("categories", &["name", "slug"], &[]);

/// Billing and secondary address fields fall back to the primary ones.
pub const CUSTOMER_FALLBACKS: &[(&str, &str)] = &[
    ("address_name", "name"),
    ("address_lastname", "lastname"),
    ("billing_address_name", "name"),
    ("billing_address_lastname", "lastname"),
    ("billing_address_company", "address_company"),
    ("billing_address_company_co", "address_company_co"),
    ("billing_address_company_number", "address_company_number"),
    ("billing_address_address", "address_address"),
    ("billing_address_zipcode", "address_zipcode"),
    ("billing_address_city", "address_city"),
    ("billing_address_country", "address_country"),
];

/// Customer attributes the API only accepts as strings.
pub const CUSTOMER_STRING_ATTRIBUTES: &[&str] = &[
    "name",
    "lastname",
    "email",
    "gender",
    "phone",
    "fax",
    "newsletter",
    "billing_email",
    "dob",
    "last_login",
    "created_at",
    "updated_at",
    "address_name",
    "address_lastname",
    "address_company",
    "address_company_co",
    "address_company_number",
    "address_address",
    "address_region",
    "address_state",
    "address_zipcode",
    "address_city",
    "address_country",
    "billing_address_name",
    "billing_address_lastname",
    "billing_address_company",
    "billing_address_company_co",
    "billing_address_company_number",
    "billing_address_address",
    "billing_address_region",
    "billing_address_state",
    "billing_address_zipcode",
    "billing_address_city",
    "billing_address_country",
];

/// Customers, with address back-fill and string-only attributes.
pub const CUSTOMERS: BuilderSpec = BuilderSpec::new(
    "customers",
    &[
        "name",
        "lastname",
        "email",
        "address_address",
        "address_zipcode",
        "address_city",
        "address_country",
    ],
    &[],
)
.with_fallbacks(CUSTOMER_FALLBACKS)
.with_string_coercion(StringCoercion::Only(CUSTOMER_STRING_ATTRIBUTES));

/// Option/value combinations priced on a product.
pub const PRODUCT_ATTRIBUTES: BuilderSpec = BuilderSpec::new(
    "product-attributes",
    &["option_values_price"],
    &["product", "product-option", "product-option-value"],
);

/// Stock-keeping variants built from product attributes.
pub const PRODUCT_VARIANTS: BuilderSpec =
    BuilderSpec::new("product-variants", &[], &["product", "product-attributes"]);

/// Time-limited special prices.
pub const PRODUCT_SPECIALS: BuilderSpec =
    BuilderSpec::new("product-specials", &["specials_price", "status"], &["product"]);

/// Customer reviews of a product.
pub const PRODUCT_REVIEWS: BuilderSpec = BuilderSpec::new(
    "product-reviews",
    &["name", "rating", "review"],
    &["product", "customer"],
);

/// Product options such as size or color.
pub const PRODUCT_OPTIONS: BuilderSpec =
    BuilderSpec::new("product-options", &["name", "track_stock"], &[]);

/// Suboptions nested under an option.
pub const PRODUCT_SUBOPTIONS: BuilderSpec =
    BuilderSpec::new("product-suboptions", &["name"], &["product-option"]);

/// Values of a product option.
pub const PRODUCT_OPTION_VALUES: BuilderSpec =
    BuilderSpec::new("product-option-values", &["name"], &["product-options"]);

// TODO: confirm "product_properties" against the live API; every other type
// is hyphenated and the endpoint is "product-properties".
/// Links a product to a property option and value.
pub const PRODUCT_PROPERTIES: BuilderSpec = BuilderSpec::new(
    "product_properties",
    &[],
    &["product", "product-property-option", "product-property-value"],
);

/// Property names, per language.
pub const PRODUCT_PROPERTY_OPTIONS: BuilderSpec =
    BuilderSpec::new("product-property-options", &["name", "language_code"], &[]);

/// Property values, per language.
pub const PRODUCT_PROPERTY_VALUES: BuilderSpec =
    BuilderSpec::new("product-property-values", &["name", "language_code"], &[]);

/// Key/value tags on a product.
pub const PRODUCT_TAGS: BuilderSpec =
    BuilderSpec::new("product-tags", &["key", "value"], &["product"]);

/// Product prices for a customer group.
pub const CUSTOMER_GROUP_PRICES: BuilderSpec = BuilderSpec::new(
    "product-customer-group-prices",
    &["price"],
    &["product", "customer-group"],
);

/// Attribute prices for a customer group.
pub const ATTRIBUTE_CUSTOMER_GROUP_PRICES: BuilderSpec = BuilderSpec::new(
    "product-attribute-customer-group-prices",
    &["price", "price_prefix"],
    &[
        "product",
        "product-option",
        "product-option-value",
        "customer-group",
    ],
);

/// Manufacturers.
pub const MANUFACTURERS: BuilderSpec = BuilderSpec::new("manufacturers", &["name", "slug"], &[]);

/// Discount codes.
pub const DISCOUNTS: BuilderSpec = BuilderSpec::new("discounts", &["name", "code", "value"], &[]);

/// Tax classes.
pub const TAX_CLASSES: BuilderSpec =
    BuilderSpec::new("tax-classes", &["tax_rate", "title", "description"], &[]);

/// URL redirects.
pub const REDIRECTS: BuilderSpec = BuilderSpec::new(
    "redirects",
    &["code", "scope", "redirect_from", "redirect_to"],
    &[],
);

/// Orders, tied to a customer and an order status.
pub const ORDERS: BuilderSpec = BuilderSpec::new("orders", &[], &["customer", "order_status"]);

/// Every spec, for lookup by resource type.
pub const ALL: &[&BuilderSpec] = &[
    &PRODUCTS,
    &CATEGORIES,
    &CUSTOMERS,
    &PRODUCT_ATTRIBUTES,
    &PRODUCT_VARIANTS,
    &PRODUCT_SPECIALS,
    &PRODUCT_REVIEWS,
    &PRODUCT_OPTIONS,
    &PRODUCT_SUBOPTIONS,
    &PRODUCT_OPTION_VALUES,
    &PRODUCT_PROPERTIES,
    &PRODUCT_PROPERTY_OPTIONS,
    &PRODUCT_PROPERTY_VALUES,
    &PRODUCT_TAGS,
    &CUSTOMER_GROUP_PRICES,
    &ATTRIBUTE_CUSTOMER_GROUP_PRICES,
    &MANUFACTURERS,
    &DISCOUNTS,
    &TAX_CLASSES,
    &REDIRECTS,
    &ORDERS,
];

/// Looks up the spec for a JSON:API resource type.
#[must_use]
pub fn spec_for(resource_type: &str) -> Option<&'static BuilderSpec> {
    ALL.iter()
        .copied()
        .find(|spec| spec.resource_type == resource_type)
}
