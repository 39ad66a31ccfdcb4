//! Sign Up Use Case
//!
//! Registers a new user account.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub gender: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user_id: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Required fields
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
            || input.confirm_password.is_empty()
        {
            return Err(AuthError::Validation("Please enter all fields".to_string()));
        }

        if input.password != input.confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }

        let email =
            Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Fast path; the store's UNIQUE constraint is the authoritative
        // guard and maps a losing concurrent insert to the same error.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password = PlainPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = password
            .hash(&self.config.work_factor)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(
            input.name.trim().to_string(),
            email,
            normalize_optional(input.phone),
            normalize_optional(input.gender),
            password_hash,
        );

        self.user_repo.insert(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        Ok(SignUpOutput {
            user_id: user.user_id.to_string(),
        })
    }
}

/// Collapse empty/whitespace-only optional fields to None
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
