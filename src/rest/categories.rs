//! Helpers for working with the category tree.
//!
//! These operate on category listings as returned by
//! [`ResourceClient::list`](crate::rest::ResourceClient::list). A category's
//! parent is read from `relationships.parent.data`; a missing relationship
//! counts as no parent.

use std::collections::HashSet;

use serde_json::Value;

use crate::clients::{RequestSender, RestClient};
use crate::document::{Document, ResourceId};
use crate::rest::resource::collect_ids;
use crate::rest::{resources, ResourceClient, ResourceError};

fn parent_id(category: &Value) -> Option<ResourceId> {
    category
        .pointer("/relationships/parent/data/id")
        .and_then(ResourceId::from_value)
}

/// Ids of categories that are nobody's parent, in listing order.
#[must_use]
pub fn categories_without_children(categories: &[Value]) -> Vec<ResourceId> {
    let parents: HashSet<String> = categories
        .iter()
        .filter_map(parent_id)
        .map(|id| id.to_string())
        .collect();

    collect_ids(categories)
        .into_iter()
        .filter(|id| !parents.contains(&id.to_string()))
        .collect()
}

/// Ids of root categories, in listing order.
#[must_use]
pub fn categories_without_parents(categories: &[Value]) -> Vec<ResourceId> {
    let roots: Vec<Value> = categories
        .iter()
        .filter(|category| parent_id(category).is_none())
        .cloned()
        .collect();
    collect_ids(&roots)
}

/// Moves every root category except `main` under `main`.
///
/// Sends one PATCH per moved category, sequentially, and stops at the first
/// failure. Returns the ids that were moved.
///
/// # Errors
///
/// Returns the first [`ResourceError`] raised by an update.
pub async fn move_root_categories_under<S: RequestSender>(
    client: &ResourceClient<'_, S>,
    categories: &[Value],
    main: impl Into<ResourceId>,
) -> Result<Vec<ResourceId>, ResourceError> {
    let main = main.into();
    let movable: Vec<ResourceId> = categories_without_parents(categories)
        .into_iter()
        .filter(|id| id.to_string() != main.to_string())
        .collect();

    for id in &movable {
        let mut update = Document::new("categories");
        update
            .set_id(Some(id.clone()))
            .set_relationship("parent", "categories", main.to_string());
        client.update(id, update.build()?).await?;
        tracing::debug!(category = %id, parent = %main, "Moved category");
    }

    Ok(movable)
}

/// Replaces the products linked to a category, returning the status code.
///
/// The request goes to `products/{category_id}/relationships/categories`
/// with `products` identifiers, the shape existing integrations send.
///
/// # Errors
///
/// Returns a local error if updating products is not permitted, or the HTTP error.
// TODO: confirm against the live API whether this should be
// `categories/{id}/relationships/products` before changing the wire shape.
pub async fn update_category_products<S, I>(
    rest: &RestClient<S>,
    category_id: impl Into<ResourceId>,
    product_ids: I,
) -> Result<u16, ResourceError>
where
    S: RequestSender,
    I: IntoIterator,
    I::Item: Into<ResourceId>,
{
    ResourceClient::new(rest, resources::PRODUCTS)
        .update_relationship(category_id, "categories", "products", product_ids)
        .await
}
