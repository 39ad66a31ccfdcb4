//! Check Session Use Case
//!
//! Verifies a session token and resolves the bound identity.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token to the bound user identifier
    pub async fn resolve(&self, session_token: &str) -> AuthResult<UserId> {
        self.get_session(session_token).await.map(|s| s.user_id)
    }

    /// Just check if the session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.get_session(session_token).await.is_ok()
    }

    /// Verify the token signature and load the session
    ///
    /// Expired sessions are deleted on sight and reported as invalid, so
    /// they behave exactly like absent ones.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::parse(&self.config.session_secret, session_token)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }
}
