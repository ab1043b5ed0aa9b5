//! In-memory repository for property listings.
//!
//! The collection lives behind an `RwLock`; every mutation completes
//! synchronously under one guard within a single handler turn, so there is no
//! cross-request interleaving to coordinate. All reads hand out clones - the
//! repository is the sole owner of the stored records, and mutating a returned
//! record never affects stored state.

use crate::api::models::properties::PropertyType;
use crate::store::errors::{Result, StoreError};
use crate::store::models::{PropertyCreateStoreRequest, PropertyRecord, PropertyUpdateStoreRequest};
use crate::store::repository::Repository;
use crate::types::PropertyId;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Repository for property listings, backed by an in-memory collection.
///
/// Cheap to clone; clones share the same underlying collection. State does not
/// survive a process restart.
#[derive(Clone, Default)]
pub struct Properties {
    records: Arc<RwLock<Vec<PropertyRecord>>>,
}

impl Properties {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-loaded with the fixed sample listings.
    pub fn with_sample_data() -> Result<Self> {
        let repo = Self::new();
        {
            let mut records = repo.records.write().map_err(|_| StoreError::LockPoisoned)?;
            *records = sample_records();
        }
        Ok(repo)
    }
}

#[async_trait::async_trait]
impl Repository for Properties {
    type CreateRequest = PropertyCreateStoreRequest;
    type UpdateRequest = PropertyUpdateStoreRequest;
    type Response = PropertyRecord;
    type Id = PropertyId;

    async fn create(&self, request: &Self::CreateRequest) -> Result<PropertyRecord> {
        let now = Utc::now();
        let record = PropertyRecord {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            city: request.city.clone(),
            price: request.price,
            currency: request.currency.clone(),
            image: request.image.clone(),
            description: request.description.clone(),
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            surface: request.surface,
            kind: request.kind,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: PropertyId) -> Result<Option<PropertyRecord>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<PropertyRecord>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.clone())
    }

    async fn update(&self, id: PropertyId, request: &Self::UpdateRequest) -> Result<Option<PropertyRecord>> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let Some(existing) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };

        // Replace the record in place, merging provided fields over the
        // existing ones. `id` and `created_at` are preserved.
        let updated = PropertyRecord {
            id: existing.id,
            title: request.title.clone().unwrap_or_else(|| existing.title.clone()),
            city: request.city.clone().unwrap_or_else(|| existing.city.clone()),
            price: request.price.unwrap_or(existing.price),
            currency: request.currency.clone().unwrap_or_else(|| existing.currency.clone()),
            image: request.image.clone().or_else(|| existing.image.clone()),
            description: request.description.clone().or_else(|| existing.description.clone()),
            bedrooms: request.bedrooms.or(existing.bedrooms),
            bathrooms: request.bathrooms.or(existing.bathrooms),
            surface: request.surface.or(existing.surface),
            kind: request.kind.or(existing.kind),
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        *existing = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: PropertyId) -> Result<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = records.len();
        records.retain(|record| record.id != id);
        Ok(records.len() < before)
    }
}

/// The fixed sample listings loaded on startup when seeding is enabled.
fn sample_records() -> Vec<PropertyRecord> {
    let seeds = [
        (
            "Modern Apartment in City Center",
            "Paris",
            850_000.0,
            Some("https://via.placeholder.com/400x300/4f46e5/white?text=Property+Image"),
            "Beautiful modern apartment located in the heart of Paris. This stunning property features high-end finishes, floor-to-ceiling windows with city views, and premium appliances throughout.",
            85.0,
            2,
            2.0,
            PropertyType::Apartment,
        ),
        (
            "Luxury Villa with Garden",
            "Nice",
            1_200_000.0,
            Some("https://via.placeholder.com/400x300/059669/white?text=Villa+Image"),
            "Stunning luxury villa with beautiful garden and pool area. Perfect for families seeking luxury living in the French Riviera.",
            220.0,
            4,
            3.0,
            PropertyType::Villa,
        ),
        (
            "Cozy Studio Near Metro",
            "Lyon",
            320_000.0,
            None,
            "Perfect starter home or investment property. Located just minutes from metro station with easy access to city center.",
            35.0,
            1,
            1.0,
            PropertyType::Studio,
        ),
        (
            "Penthouse with Terrace",
            "Cannes",
            2_500_000.0,
            Some("https://via.placeholder.com/400x300/6366f1/white?text=Penthouse"),
            "Exclusive penthouse with panoramic views and private terrace. Ultimate luxury living on the French Riviera.",
            150.0,
            3,
            3.0,
            PropertyType::Penthouse,
        ),
        (
            "Family House with Garden",
            "Bordeaux",
            680_000.0,
            Some("https://via.placeholder.com/400x300/059669/white?text=House+Image"),
            "Spacious family home with large garden. Perfect for families with children, quiet neighborhood with good schools nearby.",
            180.0,
            4,
            2.0,
            PropertyType::House,
        ),
        (
            "Modern Townhouse",
            "Toulouse",
            450_000.0,
            Some("https://via.placeholder.com/400x300/4f46e5/white?text=Townhouse"),
            "Contemporary townhouse with modern amenities and small private garden. Great location near public transport.",
            125.0,
            3,
            2.0,
            PropertyType::Townhouse,
        ),
    ];

    let now = Utc::now();
    seeds
        .into_iter()
        .map(|(title, city, price, image, description, surface, bedrooms, bathrooms, kind)| PropertyRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            city: city.to_string(),
            price,
            currency: "€".to_string(),
            image: image.map(str::to_string),
            description: Some(description.to_string()),
            bedrooms: Some(bedrooms),
            bathrooms: Some(bathrooms),
            surface: Some(surface),
            kind: Some(kind),
            created_at: now,
            updated_at: now,
        })
        .collect()
}
