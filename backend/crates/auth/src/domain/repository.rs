//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! The store is an external collaborator reached only through these
//! find/insert/delete seams; nothing above the infra layer sees SQL.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// The store enforces email uniqueness; a duplicate insert fails with
    /// `AuthError::EmailTaken` regardless of any earlier existence check.
    async fn insert(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (exact match, case-sensitive)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn insert(&self, session: &Session) -> AuthResult<()>;

    /// Find an unexpired session by ID
    ///
    /// Expired rows are treated as absent.
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Delete a session (idempotent)
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove expired sessions, returning the number deleted
    async fn delete_expired(&self) -> AuthResult<u64>;
}
