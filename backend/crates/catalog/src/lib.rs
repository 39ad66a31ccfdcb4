//! Catalog Backend Module
//!
//! Product CRUD for the storefront, structured like the auth crate:
//! - `domain/` - Product entity, validation, repository trait
//! - `infra/` - Database implementation
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! Reads are public; the mutating routes are wired behind the auth
//! session middleware by the API binary.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgCatalogRepository;
pub use presentation::router::{catalog_read_router, catalog_write_router};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCatalogRepository as CatalogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
