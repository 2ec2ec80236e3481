use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{GameFinderError, Result};
use crate::providers::{SteamPrice, SteamPriceLookup};

/// Production Steam storefront endpoint
pub const DEFAULT_BASE_URL: &str = "https://store.steampowered.com";

/// Steam storefront search client
///
/// Resolves a title through `/api/storesearch` and reads the first
/// result's price overview. Prices arrive in cents.
pub struct SteamStoreClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct StoreSearchResponse {
    #[serde(default)]
    items: Vec<StoreSearchItem>,
}

#[derive(Debug, Deserialize)]
struct StoreSearchItem {
    #[allow(dead_code)]
    id: u64,
    name: String,
    #[serde(default)]
    price: Option<StoreSearchPrice>,
}

#[derive(Debug, Deserialize)]
struct StoreSearchPrice {
    initial: u64,
    #[serde(rename = "final")]
    final_: u64,
    #[serde(default)]
    discount_percent: u8,
}

impl SteamStoreClient {
    /// Create a client against the production storefront
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for SteamStoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SteamPriceLookup for SteamStoreClient {
    async fn lookup(&self, game_name: &str) -> Result<Option<SteamPrice>> {
        let url = format!(
            "{}/api/storesearch/?term={}&l=en&cc=us",
            self.base_url,
            urlencoding::encode(game_name)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GameFinderError::Provider {
                provider: "steam".to_string(),
                message: format!("Search request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(GameFinderError::Provider {
                provider: "steam".to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let search: StoreSearchResponse =
            response
                .json()
                .await
                .map_err(|e| GameFinderError::Provider {
                    provider: "steam".to_string(),
                    message: format!("Invalid JSON: {}", e),
                })?;

        let Some(item) = search.items.into_iter().next() else {
            tracing::debug!("no Steam results for '{}'", game_name);
            return Ok(None);
        };

        // Unpriced items (delisted, free, region-locked) resolve to None
        let Some(price) = item.price else {
            tracing::debug!("Steam item '{}' has no price overview", item.name);
            return Ok(None);
        };

        Ok(Some(SteamPrice {
            final_price: price.final_ as f64 / 100.0,
            initial_price: price.initial as f64 / 100.0,
            discount_percent: price.discount_percent,
        }))
    }
}
