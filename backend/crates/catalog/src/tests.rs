//! Unit tests for the catalog crate
//!
//! Drives the HTTP handlers directly against an in-memory repository
//! double, so status mapping and store effects are both observable.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::domain::entity::{Product, ProductId};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::ProductPayload;
use crate::presentation::handlers::{self, CatalogAppState};

// ============================================================================
// In-memory repository double
// ============================================================================

#[derive(Clone, Default)]
struct MemCatalogRepository {
    products: Arc<Mutex<Vec<Product>>>,
}

impl MemCatalogRepository {
    fn count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

impl ProductRepository for MemCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.product_id == product_id)
            .cloned())
    }

    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let mut products = self.products.lock().unwrap();
        match products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
        {
            Some(slot) => {
                *slot = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, product_id: &ProductId) -> CatalogResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| &p.product_id != product_id);
        Ok(products.len() < before)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn state() -> (MemCatalogRepository, State<CatalogAppState<MemCatalogRepository>>) {
    let repo = MemCatalogRepository::default();
    let state = State(CatalogAppState {
        repo: Arc::new(repo.clone()),
    });
    (repo, state)
}

fn payload(name: &str) -> ProductPayload {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "description": "Adjustable brass desk lamp",
        "quantity": 12,
        "imageUrl": "/images/desk-lamp.jpg",
        "priceCents": 4900
    }))
    .unwrap()
}

// ============================================================================
// Create / List
// ============================================================================

#[tokio::test]
async fn test_create_then_list() {
    let (repo, state) = state();

    let (status, Json(created)) = handlers::create_product(state.clone(), Json(payload("Lamp")))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.name, "Lamp");
    assert_eq!(repo.count(), 1);

    let Json(listed) = handlers::list_products(state).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].product_id, created.product_id);
}

#[tokio::test]
async fn test_create_missing_fields_rejected() {
    let (repo, state) = state();

    let incomplete: ProductPayload =
        serde_json::from_value(serde_json::json!({ "name": "Lamp" })).unwrap();

    let result = handlers::create_product(state, Json(incomplete)).await;
    assert!(matches!(result, Err(CatalogError::Validation(_))));
    assert_eq!(repo.count(), 0);
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let (_repo, state) = state();

    let result = handlers::get_product(state, Path(Uuid::new_v4().to_string())).await;
    assert!(matches!(result, Err(CatalogError::ProductNotFound)));
}

#[tokio::test]
async fn test_get_malformed_id_is_bad_request() {
    let (_repo, state) = state();

    let result = handlers::get_product(state, Path("not-a-uuid".to_string())).await;
    assert!(matches!(result, Err(CatalogError::InvalidId)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_returns_updated_product() {
    let (_repo, state) = state();

    let (_, Json(created)) = handlers::create_product(state.clone(), Json(payload("Lamp")))
        .await
        .unwrap();

    let mut updated_payload = payload("Lamp");
    updated_payload.quantity = Some(3);

    let Json(updated) = handlers::update_product(
        state.clone(),
        Path(created.product_id.clone()),
        Json(updated_payload),
    )
    .await
    .unwrap();

    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.product_id, created.product_id);

    // Read-back agrees
    let Json(fetched) = handlers::get_product(state, Path(created.product_id))
        .await
        .unwrap();
    assert_eq!(fetched.quantity, 3);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (_repo, state) = state();

    let result = handlers::update_product(
        state,
        Path(Uuid::new_v4().to_string()),
        Json(payload("Lamp")),
    )
    .await;
    assert!(matches!(result, Err(CatalogError::ProductNotFound)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_product() {
    let (repo, state) = state();

    let (_, Json(created)) = handlers::create_product(state.clone(), Json(payload("Lamp")))
        .await
        .unwrap();

    let status = handlers::delete_product(state, Path(created.product_id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found_and_store_unchanged() {
    let (repo, state) = state();

    handlers::create_product(state.clone(), Json(payload("Lamp")))
        .await
        .unwrap();

    let result = handlers::delete_product(state, Path(Uuid::new_v4().to_string())).await;
    assert!(matches!(result, Err(CatalogError::ProductNotFound)));
    assert_eq!(repo.count(), 1);
}
