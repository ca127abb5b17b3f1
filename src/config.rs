//! Configuration
//!
//! Runtime settings for prodcli. Everything comes from command-line flags;
//! nothing is read from disk or the environment.

use crate::cli::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use url::Url;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the products API, always ending in `/`
    pub base_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Config {
    /// Build a configuration for the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            user_agent: format!("prodcli/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{}/", DEFAULT_BASE_URL))
                .expect("default base URL is valid"),
            user_agent: format!("prodcli/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Parse a base URL and make sure relative joins keep its path
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("Invalid base URL: {}", raw))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("Unsupported URL scheme '{}' in base URL", url.scheme());
    }

    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
