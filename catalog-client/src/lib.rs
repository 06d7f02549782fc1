//! Catalog Client - HTTP client for the remote product catalog
//!
//! Provides network-based calls to the catalog REST API: list, update by id,
//! and create. Everything above the wire talks to [`CatalogClient`] so it can
//! be exercised without a network.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;

pub use catalog::{CatalogClient, ProductCatalog};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{Product, ProductCreate, ProductUpdate};
