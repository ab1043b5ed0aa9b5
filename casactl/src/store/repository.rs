//! Base repository trait for store operations.

use crate::store::errors::Result;

/// Data access seam for a collection of entities.
///
/// The trait has separate associated types for create requests, update
/// requests, and responses, so an implementation backed by a database can
/// later replace the in-memory one without touching the service layer.
///
/// Missing ids are normal outcomes: `get_by_id` and `update` return
/// `Ok(None)`, `delete` returns `Ok(false)`. Errors are reserved for
/// failures of the store itself.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The entity type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity, assigning its identifier and timestamps
    async fn create(&self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List all entities in insertion order
    async fn list(&self) -> Result<Vec<Self::Response>>;

    /// Merge the provided fields over an existing entity
    async fn update(&self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Option<Self::Response>>;

    /// Delete an entity by ID, reporting whether it existed
    async fn delete(&self, id: Self::Id) -> Result<bool>;
}
