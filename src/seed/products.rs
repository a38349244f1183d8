//! Demo shop product seeds.
//!
//! Products are schemaless documents, so the demo records are plain JSON
//! objects keyed by name.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::COLLECTION_PRODUCTS;
use crate::store::DocumentStore;

use super::{SeedError, SeedModule, SeedOutcome};

/// Ensures the demo products exist, keyed by name.
pub struct ProductSeed;

fn demo_products() -> Vec<Value> {
    vec![
        json!({
            "name": "Premium Cat Food",
            "description": "Grain-free dry food for adult cats, 2kg bag.",
            "price": 29.99,
            "category": "food",
            "stock": 50,
            "image_url": "/uploads/cat-food.png",
        }),
        json!({
            "name": "Clumping Cat Litter",
            "description": "Low-dust clay litter, 10L.",
            "price": 15.50,
            "category": "litter",
            "stock": 80,
            "image_url": "/uploads/cat-litter.png",
        }),
        json!({
            "name": "Feather Wand Toy",
            "description": "Replaceable feather teaser on a spring wand.",
            "price": 8.99,
            "category": "toys",
            "stock": 120,
            "image_url": "/uploads/feather-wand.jpg",
        }),
    ]
}

#[async_trait]
impl SeedModule for ProductSeed {
    fn entity(&self) -> &'static str {
        "products"
    }

    async fn ensure_seeded(&self, store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
        let mut outcome = SeedOutcome::default();

        for product in demo_products() {
            let name = product["name"].as_str().unwrap_or_default().to_string();

            let found = store
                .find_by_field(COLLECTION_PRODUCTS, "name", &name)
                .await
                .map_err(|e| SeedError::new(self.entity(), e))?;

            if found.is_some() {
                outcome.note_existing();
                continue;
            }

            store
                .insert(COLLECTION_PRODUCTS, product)
                .await
                .map_err(|e| SeedError::new(self.entity(), e))?;
            outcome.note_created();
            tracing::info!("Product created: {}", name);
        }

        if outcome.created == 0 {
            tracing::debug!("Products already exist");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_carry_their_natural_key() {
        for product in demo_products() {
            assert!(product["name"].as_str().is_some_and(|n| !n.is_empty()));
            assert!(product["price"].as_f64().is_some());
        }
    }
}
