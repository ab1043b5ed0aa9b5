//! Axum route handlers for the API endpoints.

pub mod properties;
