//! Business logic for property listings.
//!
//! [`PropertyService`] is thin orchestration: it calls the repository, applies
//! defaulting, and converts internal records into response-shaped DTOs. It
//! performs no validation of its own and introduces no error taxonomy beyond
//! [`crate::errors::Error`].

use crate::api::models::properties::{PropertyCreate, PropertyListResponse, PropertyResponse, PropertyUpdate};
use crate::errors::Result;
use crate::store::models::{PropertyCreateStoreRequest, PropertyUpdateStoreRequest};
use crate::store::{Properties, Repository};
use crate::types::PropertyId;
use crate::validation::DEFAULT_CURRENCY;

/// Service for property listing operations.
///
/// The repository is injected at construction, so the in-memory store can be
/// swapped for a persistent one without touching this layer.
#[derive(Clone)]
pub struct PropertyService {
    repository: Properties,
}

impl PropertyService {
    pub fn new(repository: Properties) -> Self {
        Self { repository }
    }

    /// All listings plus their count; `total` always equals `items.len()`.
    pub async fn get_all_properties(&self) -> Result<PropertyListResponse> {
        let records = self.repository.list().await?;
        let items: Vec<PropertyResponse> = records.into_iter().map(PropertyResponse::from).collect();
        let total = items.len();

        Ok(PropertyListResponse { items, total })
    }

    pub async fn get_property(&self, id: PropertyId) -> Result<Option<PropertyResponse>> {
        let record = self.repository.get_by_id(id).await?;
        Ok(record.map(PropertyResponse::from))
    }

    pub async fn create_property(&self, input: PropertyCreate) -> Result<PropertyResponse> {
        let request = PropertyCreateStoreRequest {
            title: input.title,
            city: input.city,
            price: input.price,
            currency: input.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            image: input.image,
            description: input.description,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            surface: input.surface,
            kind: input.kind,
        };

        let record = self.repository.create(&request).await?;
        Ok(PropertyResponse::from(record))
    }

    pub async fn update_property(&self, id: PropertyId, input: PropertyUpdate) -> Result<Option<PropertyResponse>> {
        let request = PropertyUpdateStoreRequest {
            title: input.title,
            city: input.city,
            price: input.price,
            currency: input.currency,
            image: input.image,
            description: input.description,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            surface: input.surface,
            kind: input.kind,
        };

        let record = self.repository.update(id, &request).await?;
        Ok(record.map(PropertyResponse::from))
    }

    pub async fn delete_property(&self, id: PropertyId) -> Result<bool> {
        Ok(self.repository.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PropertyService {
        PropertyService::new(Properties::new())
    }

    fn minimal_create() -> PropertyCreate {
        PropertyCreate {
            title: "Loft".to_string(),
            city: "Lyon".to_string(),
            price: 100_000.0,
            currency: None,
            image: None,
            description: None,
            bedrooms: None,
            bathrooms: None,
            surface: None,
            kind: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_currency_default() {
        let service = service();
        let created = service.create_property(minimal_create()).await.unwrap();

        assert_eq!(created.currency, DEFAULT_CURRENCY);
        assert!(created.size.is_none());
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_surface_is_exposed_as_size() {
        let service = service();
        let input = PropertyCreate {
            surface: Some(85.0),
            ..minimal_create()
        };

        let created = service.create_property(input).await.unwrap();
        assert_eq!(created.size, Some(85.0));
    }

    #[tokio::test]
    async fn test_total_tracks_items_length() {
        let service = service();
        assert_eq!(service.get_all_properties().await.unwrap().total, 0);

        service.create_property(minimal_create()).await.unwrap();
        service.create_property(minimal_create()).await.unwrap();

        let listing = service.get_all_properties().await.unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.total, listing.items.len());
    }

    #[tokio::test]
    async fn test_update_and_delete_report_absence() {
        let service = service();
        let unknown = uuid::Uuid::new_v4();

        assert!(service.update_property(unknown, PropertyUpdate::default()).await.unwrap().is_none());
        assert!(!service.delete_property(unknown).await.unwrap());
    }
}
