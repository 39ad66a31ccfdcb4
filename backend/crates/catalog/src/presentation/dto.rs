//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Product, ProductDraft};
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// Requests
// ============================================================================

/// Create/update payload
///
/// String fields default to empty and `quantity` to absent, so a missing
/// field lands in our validation (400) instead of a body-rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: Option<i32>,
    #[serde(default)]
    pub image_url: String,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
}

impl ProductPayload {
    /// Convert into a validated draft
    pub fn into_draft(self) -> CatalogResult<ProductDraft> {
        let quantity = self
            .quantity
            .ok_or_else(|| CatalogError::Validation("Please enter all fields".to_string()))?;

        Ok(ProductDraft {
            name: self.name,
            description: self.description,
            quantity,
            image_url: self.image_url,
            category: self.category,
            price_cents: self.price_cents,
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Product response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id.to_string(),
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            image_url: product.image_url,
            category: product.category,
            price_cents: product.price_cents,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_quantity_is_validation_error() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Lamp","description":"d","imageUrl":"/i.jpg"}"#)
                .unwrap();
        assert!(matches!(
            payload.into_draft(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_full_payload_converts() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"name":"Lamp","description":"d","quantity":4,"imageUrl":"/i.jpg","priceCents":1200}"#,
        )
        .unwrap();
        let draft = payload.into_draft().unwrap();
        assert_eq!(draft.quantity, 4);
        assert_eq!(draft.price_cents, Some(1200));
        assert_eq!(draft.category, None);
    }
}
