//! Products API interaction module
//!
//! This module provides everything needed to talk to the remote products
//! REST API: the HTTP wrapper, the product client and the data model.
//!
//! # Module Structure
//!
//! - [`http`] - HTTP utilities for REST API calls
//! - [`client`] - Products client bound to a base URL
//! - [`products`] - Product data model and creation payload
//!
//! # Example
//!
//! ```ignore
//! use prodcli::api::client::ProductsClient;
//! use prodcli::config::Config;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let client = ProductsClient::new(&Config::default())?;
//!     let products = client.list_products().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod http;
pub mod products;

pub use client::ProductsClient;
pub use http::ApiError;
pub use products::{CreatedProduct, NewProduct, Product, Rating};
