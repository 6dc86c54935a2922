//! Catalog file support for symcheck.
//!
//! This crate provides the **wire model** and **format/translation helpers** for the YAML file
//! that can replace the built-in symptom taxonomy and condition profiles:
//! - body regions with their ordered symptom lists
//! - conditions with their symptom weights
//!
//! This crate focuses on:
//! - strict serialisation/deserialisation
//! - translation between validated domain primitives and wire structs
//!
//! Scoring and taxonomy lookups live in `symcheck-core`; nothing here interprets weights.

pub mod catalog;

pub use catalog::{Catalog, CatalogData, ConditionData, RegionData};

/// Errors returned by the `symcheck-catalog` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;
