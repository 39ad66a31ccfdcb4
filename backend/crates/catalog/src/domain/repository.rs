//! Repository Trait
//!
//! Interface for product persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{Product, ProductId};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// List all products
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Insert a new product
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// Update an existing product; returns false when no row matched
    async fn update(&self, product: &Product) -> CatalogResult<bool>;

    /// Delete a product; returns false when no row matched
    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool>;
}
