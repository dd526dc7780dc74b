//! Category domain types.

use serde::Serialize;

use tiendita_core::CategoryId;

/// A product category.
///
/// Referenced by zero or more products; deleting a category detaches its
/// products rather than deleting them.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}
