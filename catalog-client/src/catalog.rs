//! Product catalog operations
//!
//! The three calls the dashboard makes against the collection endpoint.

use async_trait::async_trait;
use shared::ProductId;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientResult, Product, ProductCreate, ProductUpdate};

/// Remote product collection
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// `GET {endpoint}`: the whole collection
    async fn fetch_all(&self) -> ClientResult<Vec<Product>>;

    /// `PUT {endpoint}/{id}` with `{title, price, description}`
    async fn update(&self, id: ProductId, fields: &ProductUpdate) -> ClientResult<()>;

    /// `POST {endpoint}` with `{title, price, description, categoryId, images}`
    async fn create(&self, fields: &ProductCreate) -> ClientResult<()>;
}

/// [`CatalogClient`] over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ProductCatalog<H = NetworkHttpClient> {
    http: H,
}

impl ProductCatalog<NetworkHttpClient> {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_http(NetworkHttpClient::new(config)?))
    }
}

impl<H: HttpClient> ProductCatalog<H> {
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }
}

#[async_trait]
impl<H: HttpClient> CatalogClient for ProductCatalog<H> {
    async fn fetch_all(&self) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self.http.get("").await?;
        tracing::info!(count = products.len(), "Fetched product list");
        Ok(products)
    }

    async fn update(&self, id: ProductId, fields: &ProductUpdate) -> ClientResult<()> {
        self.http.put(&id.to_string(), fields).await?;
        tracing::info!(id, "Product updated");
        Ok(())
    }

    async fn create(&self, fields: &ProductCreate) -> ClientResult<()> {
        self.http.post("", fields).await?;
        tracing::info!(title = %fields.title, "Product created");
        Ok(())
    }
}
