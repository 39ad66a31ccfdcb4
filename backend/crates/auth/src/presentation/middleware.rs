//! Auth Middleware
//!
//! Route protection: requests lacking a resolvable session are rejected
//! before reaching business logic. API routes answer 401; page routes
//! bounce to the login page (redirects are a presentation decision, not
//! an error channel).

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Require a valid session for API routes (401 on failure)
pub async fn require_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    if session_is_valid(&state, req.headers()).await {
        Ok(next.run(req).await)
    } else {
        Err(AuthError::SessionInvalid.into_response())
    }
}

/// Require a valid session for page routes (redirect to /login on failure)
pub async fn require_session_or_login<R>(
    State(state): State<AuthMiddlewareState<R>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    if session_is_valid(&state, req.headers()).await {
        Ok(next.run(req).await)
    } else {
        Err(Redirect::to("/login").into_response())
    }
}

async fn session_is_valid<R>(state: &AuthMiddlewareState<R>, headers: &HeaderMap) -> bool
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(headers, &state.config.session_cookie_name);

    match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
            use_case.is_valid(&token).await
        }
        None => false,
    }
}
