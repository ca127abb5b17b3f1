//! Products Client
//!
//! Client for the products resource, combining the configured base URL and
//! the HTTP wrapper.

use super::http::{ApiError, ApiHttpClient};
use super::products::{CreatedProduct, NewProduct, Product};
use crate::command::RESOURCE;
use crate::config::Config;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Client bound to one products API
#[derive(Clone)]
pub struct ProductsClient {
    http: ApiHttpClient,
    base_url: Url,
}

impl ProductsClient {
    /// Create a new client from the runtime configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            http: ApiHttpClient::new(&config.user_agent)?,
            base_url: config.base_url.clone(),
        })
    }

    /// URL of the collection
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, RESOURCE)
    }

    /// URL of a single product
    pub fn product_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// GET /products
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.http.get(&self.collection_url()).await?;
        decode(response)
    }

    /// GET /products/<id>
    pub async fn get_product(&self, id: u64) -> Result<Product, ApiError> {
        let response = self.http.get(&self.product_url(id)).await?;
        decode(response)
    }

    /// POST /products
    pub async fn create_product(&self, product: &NewProduct) -> Result<CreatedProduct, ApiError> {
        let response = self.http.post(&self.collection_url(), product).await?;
        if response.is_null() {
            return Ok(CreatedProduct::default());
        }
        decode(response)
    }

    /// DELETE /products/<id>, returning the raw server response
    pub async fn delete_product(&self, id: u64) -> Result<Value, ApiError> {
        self.http.delete(&self.product_url(id)).await
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}
