//! Product repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use tiendita_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Internal row type for `productos` queries.
///
/// `precio` is stored as text; conversion parses it back into a
/// fixed-point decimal.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    nombre: String,
    precio: String,
    stock: i64,
    id_categoria: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::parse(&row.precio).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            id: ProductId::new(row.id),
            name: row.nombre,
            price,
            stock: row.stock,
            category_id: row.id_categoria.map(CategoryId::new),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is invalid.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, nombre, precio, stock, id_categoria, created_at, updated_at
            FROM productos
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored price is invalid.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, nombre, precio, stock, id_categoria, created_at, updated_at
            FROM productos
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new product and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (e.g., the
    /// referenced category does not exist).
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO productos (nombre, precio, stock, id_categoria, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, nombre, precio, stock, id_categoria, created_at, updated_at
            ",
        )
        .bind(&new.name)
        .bind(new.price.to_string())
        .bind(new.stock)
        .bind(new.category_id.map(|c| c.as_i64()))
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }

    /// Update a product in place, replacing all editable fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        changes: &NewProduct,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE productos
            SET nombre = ?1, precio = ?2, stock = ?3, id_categoria = ?4, updated_at = ?5
            WHERE id = ?6
            RETURNING id, nombre, precio, stock, id_categoria, created_at, updated_at
            ",
        )
        .bind(&changes.name)
        .bind(changes.price.to_string())
        .bind(changes.stock)
        .bind(changes.category_id.map(|c| c.as_i64()))
        .bind(Utc::now())
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), TryInto::try_into)
    }

    /// Delete a product permanently.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM productos
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::CategoryRepository;
    use crate::db::test_pool;

    fn cono() -> NewProduct {
        NewProduct {
            name: "Cono".to_string(),
            price: Price::parse("2.50").unwrap(),
            stock: 10,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_by_id_returns_equal_fields() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(&cono()).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Cono");
        assert_eq!(fetched.price, Price::parse("2.50").unwrap());
        assert_eq!(fetched.stock, 10);
        assert_eq!(fetched.category_id, None);
    }

    #[tokio::test]
    async fn test_create_then_list_contains_exactly_one_entry() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(&cono()).await.unwrap();

        let products = repo.list().await.unwrap();
        let matches: Vec<_> = products
            .iter()
            .filter(|p| p.name == "Cono" && p.price == Price::parse("2.50").unwrap() && p.stock == 10)
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.first().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_list_round_trips_name_price_stock() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let inputs = [("Cono", "2.50", 10), ("Paleta", "1.75", 4), ("Vaso", "3", 0)];
        for (name, price, stock) in inputs {
            repo.create(&NewProduct {
                name: name.to_string(),
                price: Price::parse(price).unwrap(),
                stock,
                category_id: None,
            })
            .await
            .unwrap();
        }

        let listed: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| (p.name, p.price, p.stock))
            .collect();

        for (name, price, stock) in inputs {
            assert!(listed.contains(&(name.to_string(), Price::parse(price).unwrap(), stock)));
        }
        assert_eq!(listed.len(), inputs.len());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(&cono()).await.unwrap();
        let updated = repo
            .update(
                created.id,
                &NewProduct {
                    name: "Cono doble".to_string(),
                    price: Price::parse("3.25").unwrap(),
                    stock: 7,
                    category_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Cono doble");
        assert_eq!(updated.price, Price::parse("3.25").unwrap());
        assert_eq!(updated.stock, 7);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let err = repo.update(ProductId::new(999), &cono()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_get_by_id_is_none() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(&cono()).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        // Deleting again reports nothing deleted
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleting_category_detaches_products() {
        let pool = test_pool().await;
        let categories = CategoryRepository::new(&pool);
        let products = ProductRepository::new(&pool);

        let helados = categories.create("Helados").await.unwrap();
        let created = products
            .create(&NewProduct {
                category_id: Some(helados.id),
                ..cono()
            })
            .await
            .unwrap();
        assert_eq!(created.category_id, Some(helados.id));

        assert!(categories.delete(helados.id).await.unwrap());

        let fetched = products.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.category_id, None);
    }
}
