//! User domain types.

use chrono::{DateTime, Utc};

use tiendita_core::{Email, UserId};

/// A registered user account.
///
/// Created on registration and read on login; accounts are never updated
/// or deleted. The password hash is deliberately not part of this type -
/// it only travels through the credential manager.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Email address (unique).
    pub email: Email,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
