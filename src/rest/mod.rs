//! Resource clients for the Mystore API.
//!
//! This module provides:
//!
//! - **[`ResourceConfig`]**: an immutable `{ name, endpoint, media, permissions }` value
//! - **[`ResourceClient`]**: list, get, create, update, delete and relationship
//!   operations over any config, each authorized locally before any I/O
//! - **[`resources`]**: the registry of every known resource
//! - **[`categories`]**: category tree helpers
//! - **[`ResourceError`]**: the outermost error layer
//!
//! # Example
//!
//! ```rust,ignore
//! use mystore_api::rest::{resources, ResourceClient};
//! use mystore_api::document::{Localized, NewProduct, NewResource};
//!
//! let products = ResourceClient::new(&client, resources::PRODUCTS);
//!
//! let product = NewProduct::new(
//!     Localized::single("no", "Test"),
//!     Localized::single("no", "test"),
//!     [10, 11],
//! );
//! products.create(product.build()?, None).await?;
//!
//! for item in products.list(false, None).await? {
//!     println!("{}", item["id"]);
//! }
//! ```

pub mod categories;
mod errors;
mod resource;
pub mod resources;

pub use categories::update_category_products;
pub use errors::ResourceError;
pub use resource::{
    filter_query, Payload, Permissions, ResourceClient, ResourceConfig, ResourceOperation,
};
pub use resources::resource_by_name;
