//! Client configuration

use crate::{ClientResult, ProductCatalog};

/// Public product collection endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.escuelajs.co/api/v1/products";

/// Client configuration for connecting to the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Collection endpoint (e.g., "https://api.escuelajs.co/api/v1/products")
    ///
    /// List and create go to the endpoint itself, updates to `{endpoint}/{id}`.
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration for the given collection endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a catalog client from this configuration
    pub fn build_catalog(&self) -> ClientResult<ProductCatalog> {
        ProductCatalog::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new("http://localhost:8080/products").with_timeout(5);
        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert_eq!(config.timeout, 5);
    }
}
