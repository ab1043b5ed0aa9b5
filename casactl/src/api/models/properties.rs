//! API request/response models for property listings.

use crate::store::models::PropertyRecord;
use crate::types::PropertyId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The closed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Studio,
    Penthouse,
    Townhouse,
}

/// Request body for creating a new property listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyCreate {
    /// Listing headline (1-200 characters)
    #[schema(example = "Modern Apartment in City Center")]
    pub title: String,
    /// City the property is located in (1-100 characters)
    #[schema(example = "Paris")]
    pub city: String,
    /// Asking price, must be positive
    #[schema(example = 850000.0)]
    pub price: f64,
    /// Single-character currency symbol; defaults to "€" when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Image URL (a well-formed URL, or empty string for none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-text description (up to 1000 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of bedrooms (0-50)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    /// Number of bathrooms (0-20)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    /// Living surface in square meters (0-10000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<f64>,
    /// Listing category
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
}

/// Request body for updating an existing property listing. All fields are
/// optional; only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PropertyUpdate {
    /// New headline (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New city (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// New asking price (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// New currency symbol (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// New image URL (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// New description (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New bedroom count (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    /// New bathroom count (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    /// New surface in square meters (null to keep unchanged)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<f64>,
    /// New listing category (null to keep unchanged)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
}

/// Full property details returned by the API.
///
/// The internal `surface` field is exposed as `size`, and timestamps are
/// rendered as ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyResponse {
    /// Unique identifier for the listing
    #[schema(value_type = String, format = "uuid")]
    pub id: PropertyId,
    /// Listing headline
    pub title: String,
    /// City the property is located in
    pub city: String,
    /// Asking price
    pub price: f64,
    /// Single-character currency symbol
    pub currency: String,
    /// Image URL, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Free-text description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Number of bedrooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<i64>,
    /// Number of bathrooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    /// Living surface in square meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Listing category
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
    /// When the listing was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// When the listing was last modified
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<PropertyRecord> for PropertyResponse {
    fn from(record: PropertyRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            city: record.city,
            price: record.price,
            currency: record.currency,
            image: record.image,
            description: record.description,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size: record.surface,
            kind: record.kind,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Collection wrapper returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyListResponse {
    /// All listings, in insertion order
    pub items: Vec<PropertyResponse>,
    /// Number of listings; always equals `items.len()`
    pub total: usize,
}
