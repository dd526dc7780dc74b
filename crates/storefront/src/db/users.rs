//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use tiendita_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Internal row type for `usuarios` queries.
///
/// Column names follow the persisted schema; conversion to the domain
/// type validates the stored email.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    nombre: String,
    edad: i64,
    email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            name: row.nombre,
            age: row.edad,
            email,
            created_at: row.created_at,
        })
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, nombre, edad, email, created_at
            FROM usuarios
            WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, nombre, edad, email, created_at
            FROM usuarios
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// Email uniqueness is enforced by the UNIQUE constraint; the race
    /// between a pre-check and the insert cannot occur here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        age: i64,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO usuarios (nombre, edad, email, password, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, nombre, edad, email, created_at
            ",
        )
        .bind(name)
        .bind(age)
        .bind(email.as_str())
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Get a user and their password hash by email.
    ///
    /// Returns `None` if no account with that email exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, (i64, String, i64, String, DateTime<Utc>, String)>(
            r"
            SELECT id, nombre, edad, email, created_at, password
            FROM usuarios
            WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some((id, nombre, edad, email, created_at, password_hash)) = row else {
            return Ok(None);
        };

        let user: User = UserRow {
            id,
            nombre,
            edad,
            email,
            created_at,
        }
        .try_into()?;

        Ok(Some((user, password_hash)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_create_and_get_by_email() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let email = Email::parse("ana@example.com").unwrap();
        let created = repo.create("Ana", 30, &email, "hash").await.unwrap();
        assert_eq!(created.name, "Ana");
        assert_eq!(created.age, 30);
        assert_eq!(created.email, email);

        let fetched = repo.get_by_email(&email).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Ana");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let email = Email::parse("bob@example.com").unwrap();
        repo.create("Bob", 25, &email, "hash").await.unwrap();

        let err = repo.create("Bobby", 26, &email, "hash2").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_password_hash() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        let email = Email::parse("carla@example.com").unwrap();
        repo.create("Carla", 41, &email, "stored-hash").await.unwrap();

        let (user, hash) = repo.get_password_hash(&email).await.unwrap().unwrap();
        assert_eq!(user.email, email);
        assert_eq!(hash, "stored-hash");

        let missing = Email::parse("nobody@example.com").unwrap();
        assert!(repo.get_password_hash(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let pool = test_pool().await;
        let repo = UserRepository::new(&pool);

        assert!(repo.get_by_id(UserId::new(999)).await.unwrap().is_none());
    }
}
