//! Store layer: entity models and the in-memory repository.
//!
//! Access goes through the [`repository::Repository`] trait so that the
//! in-memory implementation can later be swapped for a persistent one without
//! touching the service layer. The store does not re-validate field
//! constraints; validation is the route layer's responsibility.

pub mod errors;
pub mod models;
pub mod properties;
pub mod repository;

pub use properties::Properties;
pub use repository::Repository;
