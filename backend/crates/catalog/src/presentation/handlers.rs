//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::domain::entity::{Product, ProductId};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{ProductPayload, ProductResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let products = state.repo.list().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&id)?;

    let product = state
        .repo
        .find_by_id(&product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound)?;

    Ok(Json(product.into()))
}

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    Json(payload): Json<ProductPayload>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let product = Product::new(payload.into_draft()?)?;

    state.repo.insert(&product).await?;

    tracing::info!(product_id = %product.product_id, "Product created");

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /api/products/{id}
///
/// Returns the updated product, matching the read-back the storefront
/// pages expect.
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&id)?;

    let mut product = state
        .repo
        .find_by_id(&product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound)?;

    product.apply(payload.into_draft()?)?;

    // The row can vanish between the read and the write
    if !state.repo.update(&product).await? {
        return Err(CatalogError::ProductNotFound);
    }

    tracing::info!(product_id = %product.product_id, "Product updated");

    Ok(Json(product.into()))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Clone + Send + Sync + 'static,
{
    let product_id = parse_product_id(&id)?;

    if !state.repo.delete(&product_id).await? {
        return Err(CatalogError::ProductNotFound);
    }

    tracing::info!(product_id = %product_id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_product_id(id: &str) -> CatalogResult<ProductId> {
    ProductId::parse_str(id).map_err(|_| CatalogError::InvalidId)
}
