//! JSON:API request documents.
//!
//! - [`Document`]: one resource document under assembly
//! - [`ResourceBuilder`]: a document bound to a [`BuilderSpec`] and validated at build time
//! - [`Batch`]: an ordered list of built documents
//! - [`make`]: typed constructors for the documents the API accepts
//!
//! # Example
//!
//! ```rust
//! use mystore_api::document::{specs, ResourceBuilder};
//!
//! let mut tag = ResourceBuilder::new(&specs::PRODUCT_TAGS);
//! tag.set_attribute("key", "color").set_attribute("value", "red");
//!
//! // The product relationship is mandatory.
//! assert!(tag.build().is_err());
//!
//! tag.set_relationship("product", "products", 42);
//! assert!(tag.build().is_ok());
//! ```

mod batch;
mod builder;
mod errors;
pub mod make;
mod model;
pub mod specs;

pub use batch::Batch;
pub use builder::{BuilderSpec, ResourceBuilder, StringCoercion};
pub use errors::{DocumentError, FieldKind};
pub use make::{
    Localized, NewCategory, NewCustomer, NewDiscount, NewManufacturer, NewOrder, NewProduct,
    NewProductAttribute, NewProductOption, NewProductOptionValue, NewProductReview,
    NewProductSpecial, NewProductVariant, NewRedirect, NewResource, NewTaxClass,
};
pub use model::{BuiltDocument, Document, Field, Relationship, ResourceId, ResourceIdentifier};
