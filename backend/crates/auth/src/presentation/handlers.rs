//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect};
use std::sync::Arc;

use crate::application::{
    AccountUseCase, CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, SignUpInput,
    SignUpUseCase,
};
use crate::application::config::AuthConfig;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AccountResponse, LoginRequest, SignUpRequest, SignUpResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        phone: req.phone,
        password: req.password,
        confirm_password: req.confirm_password,
        gender: req.gender,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            user_id: output.user_id,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// On success: 302 to the products page with the session cookie set.
/// Failures come back as structured errors; clients decide how to render
/// them.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.session_cookie().build_set_cookie(&output.session_token);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, "/products".to_string()),
            (header::SET_COOKIE, cookie),
        ],
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
///
/// Destroys the session (idempotent), clears the cookie, and sends the
/// client back to the login page. Only a store failure aborts the
/// request.
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
        use_case.execute(&token).await?;
    }

    let cookie = state.config.session_cookie().build_delete_cookie();

    Ok((
        [(header::SET_COOKIE, cookie)],
        Redirect::to("/login"),
    ))
}

// ============================================================================
// Account
// ============================================================================

/// GET /api/account
pub async fn account<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<AccountResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config.session_cookie_name)
        .ok_or(AuthError::SessionInvalid)?;

    let check = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    let user_id = check.resolve(&token).await?;

    let use_case = AccountUseCase::new(state.repo.clone());
    let output = use_case.execute(&user_id).await?;

    Ok(Json(AccountResponse {
        name: output.name,
        email: output.email,
        phone: output.phone,
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
