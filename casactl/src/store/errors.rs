//! Error types for the store layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the store.
///
/// "Not found" is deliberately not represented here: repositories return
/// `Option`/`bool` for missing ids, and callers decide what absence means.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A lock guarding the collection was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}
