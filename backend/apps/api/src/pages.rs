//! Static Page Routes
//!
//! Named page routes over the public directory, with the member pages
//! behind the session guard (unauthenticated visitors bounce to /login).
//! Everything else in the directory is served as-is, like the original
//! storefront's static middleware.

use auth::domain::repository::SessionRepository;
use auth::middleware::{AuthMiddlewareState, require_session_or_login};
use axum::{Router, middleware};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub fn pages_router<R>(public_dir: &Path, guard_state: AuthMiddlewareState<R>) -> Router
where
    R: SessionRepository + Clone + Send + Sync + 'static,
{
    let page = |file: &str| ServeFile::new(public_dir.join(file));

    let public_pages = Router::new()
        .route_service("/home", page("home.html"))
        .route_service("/signup", page("signup.html"))
        .route_service("/login", page("login.html"));

    let member_pages = Router::new()
        .route_service("/products", page("products.html"))
        .route_service("/add-product", page("add-product.html"))
        .route_service("/manage-products", page("manage-products.html"))
        .route_service("/account", page("account.html"))
        .route_layer(middleware::from_fn_with_state(
            guard_state,
            require_session_or_login::<R>,
        ));

    public_pages
        .merge(member_pages)
        .fallback_service(ServeDir::new(public_dir))
}
