//! Account Use Case
//!
//! Loads the profile of the session's bound user.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Account output (public profile fields only)
pub struct AccountOutput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Account use case
pub struct AccountUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AccountUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Load account details for a resolved session identity
    ///
    /// The user can vanish between session creation and this lookup
    /// (deleted account with a live cookie); that surfaces as not-found,
    /// not as a server error.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<AccountOutput> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(AccountOutput {
            name: user.name,
            email: user.email.to_string(),
            phone: user.phone,
        })
    }
}
