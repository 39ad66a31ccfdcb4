//! Catalog Routers
//!
//! Reads and writes are separate routers so the API binary can layer the
//! auth session guard over the mutating routes only (uniform gating
//! policy: every mutation requires a session, every read is public).

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Public read routes: list and fetch
pub fn catalog_read_router<R>(repo: R) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_products::<R>))
        .route("/{id}", get(handlers::get_product::<R>))
        .with_state(state)
}

/// Mutating routes: create, update, delete
pub fn catalog_write_router<R>(repo: R) -> Router
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", post(handlers::create_product::<R>))
        .route(
            "/{id}",
            put(handlers::update_product::<R>).delete(handlers::delete_product::<R>),
        )
        .with_state(state)
}
