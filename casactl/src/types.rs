//! Common type definitions.

use uuid::Uuid;

/// Identifier for a property listing.
pub type PropertyId = Uuid;
