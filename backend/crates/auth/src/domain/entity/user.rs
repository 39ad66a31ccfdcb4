//! User Entity
//!
//! A registered storefront user. The password digest travels with the
//! entity but is never serialized into responses; DTOs pick the public
//! fields explicitly.

use chrono::{DateTime, Utc};
use platform::password::PasswordDigest;

use crate::domain::value_object::{email::Email, user_id::UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier (UUID v4)
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Unique key, case-sensitive as stored
    pub email: Email,
    /// Optional phone number, stored as entered
    pub phone: Option<String>,
    /// Optional gender field
    pub gender: Option<String>,
    /// Argon2id PHC string; never the plaintext
    pub password_hash: PasswordDigest,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier and creation timestamp
    pub fn new(
        name: String,
        email: Email,
        phone: Option<String>,
        gender: Option<String>,
        password_hash: PasswordDigest,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            phone,
            gender,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
