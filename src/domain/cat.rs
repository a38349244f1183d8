//! Cat domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Adoption status of a cat listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatStatus {
    Available,
    Adopted,
}

impl std::fmt::Display for CatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatStatus::Available => write!(f, "available"),
            CatStatus::Adopted => write!(f, "adopted"),
        }
    }
}

/// Cat listing payload as persisted in the `cats` collection.
///
/// Typed (unlike products and orders) because the recommendation filter
/// reads breed, age, and status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    pub name: String,
    pub breed: String,
    /// Age in years
    pub age: u8,
    pub gender: String,
    pub description: String,
    pub image_url: String,
    pub status: CatStatus,
}

impl Cat {
    pub fn is_available(&self) -> bool {
        self.status == CatStatus::Available
    }
}

/// Cat response returned by the listing and recommendation endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatResponse {
    /// Unique cat identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Cat name
    #[schema(example = "Whiskers")]
    pub name: String,
    /// Breed name
    #[schema(example = "British Shorthair")]
    pub breed: String,
    /// Age in years
    #[schema(example = 3)]
    pub age: u8,
    /// Cat gender
    #[schema(example = "male")]
    pub gender: String,
    /// Free-form description
    pub description: String,
    /// Image path under the uploads mount
    #[schema(example = "/uploads/whiskers.png")]
    pub image_url: String,
    /// Adoption status
    pub status: CatStatus,
    /// Listing creation timestamp
    pub created_at: DateTime<Utc>,
}

impl CatResponse {
    pub fn new(id: Uuid, created_at: DateTime<Utc>, cat: Cat) -> Self {
        Self {
            id,
            name: cat.name,
            breed: cat.breed,
            age: cat.age,
            gender: cat.gender,
            description: cat.description,
            image_url: cat.image_url,
            status: cat.status,
            created_at,
        }
    }
}
