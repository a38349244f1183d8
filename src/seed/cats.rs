//! Demo cat listing seeds.

use async_trait::async_trait;

use crate::config::COLLECTION_CATS;
use crate::domain::{Cat, CatStatus};
use crate::errors::AppError;
use crate::store::DocumentStore;

use super::{SeedError, SeedModule, SeedOutcome};

/// Ensures the demo cat listings exist, keyed by name.
pub struct CatSeed;

fn demo_cats() -> Vec<Cat> {
    vec![
        Cat {
            name: "Whiskers".to_string(),
            breed: "British Shorthair".to_string(),
            age: 3,
            gender: "male".to_string(),
            description: "Calm lap cat who follows sunbeams around the house.".to_string(),
            image_url: "/uploads/whiskers.png".to_string(),
            status: CatStatus::Available,
        },
        Cat {
            name: "Luna".to_string(),
            breed: "Siamese".to_string(),
            age: 2,
            gender: "female".to_string(),
            description: "Talkative and curious, gets along with other cats.".to_string(),
            image_url: "/uploads/luna.jpg".to_string(),
            status: CatStatus::Available,
        },
        Cat {
            name: "Milo".to_string(),
            breed: "Maine Coon".to_string(),
            age: 4,
            gender: "male".to_string(),
            description: "Gentle giant, loves brushing and long naps.".to_string(),
            image_url: "/uploads/milo.png".to_string(),
            status: CatStatus::Available,
        },
    ]
}

#[async_trait]
impl SeedModule for CatSeed {
    fn entity(&self) -> &'static str {
        "cats"
    }

    async fn ensure_seeded(&self, store: &dyn DocumentStore) -> Result<SeedOutcome, SeedError> {
        let mut outcome = SeedOutcome::default();

        for cat in demo_cats() {
            let found = store
                .find_by_field(COLLECTION_CATS, "name", &cat.name)
                .await
                .map_err(|e| SeedError::new(self.entity(), e))?;

            if found.is_some() {
                outcome.note_existing();
                continue;
            }

            let data = serde_json::to_value(&cat)
                .map_err(|e| AppError::internal(format!("Failed to encode cat: {}", e)))
                .map_err(|e| SeedError::new(self.entity(), e))?;
            store
                .insert(COLLECTION_CATS, data)
                .await
                .map_err(|e| SeedError::new(self.entity(), e))?;
            outcome.note_created();
            tracing::info!("Cat listing created: {}", cat.name);
        }

        if outcome.created == 0 {
            tracing::debug!("Cat listings already exist");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_cats_are_available_and_uniquely_named() {
        let cats = demo_cats();
        assert!(cats.iter().all(Cat::is_available));

        let mut names: Vec<_> = cats.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), cats.len());
    }
}
