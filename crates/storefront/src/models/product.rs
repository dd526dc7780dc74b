//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tiendita_core::{CategoryId, Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units in stock.
    pub stock: i64,
    /// Optional owning category.
    pub category_id: Option<CategoryId>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating or updating a product.
///
/// The edit form posts every field, so updates replace all of them.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub stock: i64,
    pub category_id: Option<CategoryId>,
}
