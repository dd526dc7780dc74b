//! Category repository for database operations.

use sqlx::SqlitePool;

use tiendita_core::CategoryId;

use super::RepositoryError;
use crate::models::Category;

/// Internal row type for `categorias` queries.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    nombre: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: CategoryId::new(row.id),
            name: row.nombre,
        }
    }
}

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, nombre
            FROM categorias
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a category by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            SELECT id, nombre
            FROM categorias
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Create a new category and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            INSERT INTO categorias (nombre)
            VALUES (?1)
            RETURNING id, nombre
            ",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Rename a category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the category doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: CategoryId, name: &str) -> Result<Category, RepositoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r"
            UPDATE categorias
            SET nombre = ?1
            WHERE id = ?2
            RETURNING id, nombre
            ",
        )
        .bind(name)
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map_or(Err(RepositoryError::NotFound), |r| Ok(r.into()))
    }

    /// Delete a category permanently.
    ///
    /// Products referencing it are detached (`id_categoria` set to NULL
    /// by the schema), not deleted.
    ///
    /// # Returns
    ///
    /// Returns `true` if the category was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CategoryId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM categorias
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
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_pool().await;
        let repo = CategoryRepository::new(&pool);

        let helados = repo.create("Helados").await.unwrap();
        let bebidas = repo.create("Bebidas").await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.first().unwrap().id, helados.id);
        assert_eq!(listed.get(1).unwrap().name, "Bebidas");
        assert_ne!(helados.id, bebidas.id);
    }

    #[tokio::test]
    async fn test_update_renames() {
        let pool = test_pool().await;
        let repo = CategoryRepository::new(&pool);

        let cat = repo.create("Heladas").await.unwrap();
        let renamed = repo.update(cat.id, "Helados").await.unwrap();
        assert_eq!(renamed.id, cat.id);
        assert_eq!(renamed.name, "Helados");

        let err = repo.update(CategoryId::new(999), "Nada").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_get_by_id_is_none() {
        let pool = test_pool().await;
        let repo = CategoryRepository::new(&pool);

        let cat = repo.create("Temporal").await.unwrap();
        assert!(repo.delete(cat.id).await.unwrap());
        assert!(repo.get_by_id(cat.id).await.unwrap().is_none());
        assert!(!repo.delete(cat.id).await.unwrap());
    }
}
