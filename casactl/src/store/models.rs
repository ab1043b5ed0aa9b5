//! Internal entity and request types for the property store.
//!
//! These are the shapes the store owns and persists. The API layer has its own
//! request/response models ([`crate::api::models::properties`]) and converts at
//! the service boundary, so wire-format concerns (field renames, string
//! timestamps) never leak in here.

use crate::api::models::properties::PropertyType;
use crate::types::PropertyId;
use chrono::{DateTime, Utc};

/// A property listing as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    pub city: String,
    pub price: f64,
    pub currency: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub surface: Option<f64>,
    pub kind: Option<PropertyType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a property record. The store assigns `id` and both
/// timestamps; everything else comes from the caller, already validated
/// and with defaults applied.
#[derive(Debug, Clone)]
pub struct PropertyCreateStoreRequest {
    pub title: String,
    pub city: String,
    pub price: f64,
    pub currency: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub surface: Option<f64>,
    pub kind: Option<PropertyType>,
}

/// Request to update a property record. `None` fields are left untouched;
/// `id` and `created_at` are never writable.
#[derive(Debug, Clone, Default)]
pub struct PropertyUpdateStoreRequest {
    pub title: Option<String>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<f64>,
    pub surface: Option<f64>,
    pub kind: Option<PropertyType>,
}
