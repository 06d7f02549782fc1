//! Shared types for the catalog admin
//!
//! Data model of the remote product catalog, the request payloads sent to it
//! and the form validation error taxonomy. Used by both `catalog-client` and
//! `catalog-admin`; contains no I/O.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{FieldError, FormField, ValidationError};
pub use models::{Category, Product, ProductCreate, ProductUpdate};
pub use types::ProductId;
