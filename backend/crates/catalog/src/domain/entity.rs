//! Product Entity
//!
//! Catalog product record plus the draft type carrying validated
//! client input. Create and update share the same validation rules.

use chrono::{DateTime, Utc};
use kernel::id::Id;

use crate::error::{CatalogError, CatalogResult};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    /// Store-assigned identifier (UUID v4)
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    /// Units in stock
    pub quantity: i32,
    /// Reference to the product image
    pub image_url: String,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or updating a product
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub image_url: String,
    pub category: Option<String>,
    pub price_cents: Option<i64>,
}

impl ProductDraft {
    fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.image_url.trim().is_empty()
        {
            return Err(CatalogError::Validation(
                "Please enter all fields".to_string(),
            ));
        }

        if self.quantity < 0 {
            return Err(CatalogError::Validation(
                "Quantity cannot be negative".to_string(),
            ));
        }

        if matches!(self.price_cents, Some(p) if p < 0) {
            return Err(CatalogError::Validation(
                "Price cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl Product {
    /// Create a new product from a validated draft
    pub fn new(draft: ProductDraft) -> CatalogResult<Self> {
        draft.validate()?;
        let now = Utc::now();

        Ok(Self {
            product_id: ProductId::new(),
            name: draft.name,
            description: draft.description,
            quantity: draft.quantity,
            image_url: draft.image_url,
            category: draft.category,
            price_cents: draft.price_cents,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a draft to an existing product, bumping `updated_at`
    pub fn apply(&mut self, draft: ProductDraft) -> CatalogResult<()> {
        draft.validate()?;

        self.name = draft.name;
        self.description = draft.description;
        self.quantity = draft.quantity;
        self.image_url = draft.image_url;
        self.category = draft.category;
        self.price_cents = draft.price_cents;
        self.updated_at = Utc::now();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Desk Lamp".to_string(),
            description: "Adjustable brass desk lamp".to_string(),
            quantity: 12,
            image_url: "/images/desk-lamp.jpg".to_string(),
            category: Some("lighting".to_string()),
            price_cents: Some(4_900),
        }
    }

    #[test]
    fn test_new_product_from_valid_draft() {
        let product = Product::new(draft()).unwrap();
        assert_eq!(product.name, "Desk Lamp");
        assert_eq!(product.quantity, 12);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        for field in ["name", "description", "image_url"] {
            let mut d = draft();
            match field {
                "name" => d.name = "  ".to_string(),
                "description" => d.description = String::new(),
                _ => d.image_url = String::new(),
            }
            assert!(
                matches!(Product::new(d), Err(CatalogError::Validation(_))),
                "expected rejection for empty {field}"
            );
        }
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut d = draft();
        d.quantity = -1;
        assert!(matches!(Product::new(d), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut d = draft();
        d.price_cents = Some(-100);
        assert!(matches!(Product::new(d), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_apply_updates_fields_and_timestamp() {
        let mut product = Product::new(draft()).unwrap();
        let created_at = product.created_at;

        let mut d = draft();
        d.quantity = 3;
        d.category = None;
        product.apply(d).unwrap();

        assert_eq!(product.quantity, 3);
        assert_eq!(product.category, None);
        assert_eq!(product.created_at, created_at);
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn test_apply_invalid_draft_leaves_product_unchanged() {
        let mut product = Product::new(draft()).unwrap();
        let mut d = draft();
        d.name = String::new();

        assert!(product.apply(d).is_err());
        // Validation happens before mutation
        assert_eq!(product.name, "Desk Lamp");
    }
}
