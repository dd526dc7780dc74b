//! Credential manager.
//!
//! Handles user registration and password login. Passwords are stored as
//! Argon2id hashes; verification goes through the constant-work Argon2
//! verifier, so an unknown email and a wrong password are
//! indistinguishable to the caller.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::SqlitePool;

use tiendita_core::Email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::UserAlreadyExists` if the email is already registered.
    pub async fn register(
        &self,
        name: &str,
        age: i64,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        // Validate email
        let email = Email::parse(email)?;

        // Validate password
        validate_password(password)?;

        // Hash password
        let password_hash = hash_password(password)?;

        // Create user; the UNIQUE constraint is the duplicate guard
        let user = self
            .users
            .create(name, age, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// Fails closed: an unknown email and a wrong password both come back
    /// as `InvalidCredentials`. No lockout or failed-attempt tracking.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        // Validate email format
        let email = Email::parse(email)?;

        // Get user with password hash
        let (user, password_hash) = self
            .users
            .get_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Verify password
        verify_password(password, &password_hash)?;

        Ok(user)
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password("correct horse battery", &hash).is_ok());
        assert!(matches!(
            verify_password("wrong password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("12345678").is_ok());
        assert!(matches!(
            validate_password("1234567"),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        let user = auth
            .register("Ana", 30, "ana@example.com", "tamarindo-99")
            .await
            .unwrap();
        assert_eq!(user.email.as_str(), "ana@example.com");

        let logged_in = auth
            .authenticate("ana@example.com", "tamarindo-99")
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_authenticate_fails_closed() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        auth.register("Ana", 30, "ana@example.com", "tamarindo-99")
            .await
            .unwrap();

        // Wrong password
        assert!(matches!(
            auth.authenticate("ana@example.com", "guayaba-00").await,
            Err(AuthError::InvalidCredentials)
        ));

        // Unknown email
        assert!(matches!(
            auth.authenticate("nadie@example.com", "tamarindo-99").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        auth.register("Ana", 30, "ana@example.com", "tamarindo-99")
            .await
            .unwrap();

        let err = auth
            .register("Anabel", 31, "ana@example.com", "tamarindo-98")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        assert!(matches!(
            auth.register("Ana", 30, "not-an-email", "tamarindo-99").await,
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.register("Ana", 30, "ana@example.com", "corto").await,
            Err(AuthError::WeakPassword(_))
        ));
    }
}
