//! # GameFinder Engine
//!
//! Mood-based game recommendation engine with:
//! - LLM response normalization (fence stripping, JSON repair, schema defaults)
//! - Deterministic fallback catalogue keyed by query mood
//! - Multi-store price estimation derived from a Steam baseline
//! - Transient TTL caching with an injectable clock
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use gamefinder_engine::{Currency, DeepSeekClient, GameFinder, SteamStoreClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let llm = Arc::new(DeepSeekClient::new("sk-..."));
//!     let steam = Arc::new(SteamStoreClient::new());
//!     let finder = GameFinder::new(llm, steam);
//!
//!     let results = finder.search("something cozy for a rainy evening").await;
//!     for game in &results.games {
//!         let quotes = finder.store_quotes(&game.name, Currency::USD).await;
//!         println!("{} ({}%): {}", game.name, game.match_percent(), quotes[0].display_price());
//!     }
//! }
//! ```

pub mod cache;
pub mod core;
pub mod engine;
pub mod error;
pub mod normalizer;
pub mod pricing;
pub mod providers;

// Re-export primary types
pub use crate::cache::{Clock, SystemClock, TtlCache};
pub use crate::core::{
    Currency, GameRecommendation, PriceProvenance, PriceQuote, SearchAnalysis, SearchResult, Store,
};
pub use crate::engine::GameFinder;
pub use crate::error::{GameFinderError, Result};
pub use crate::normalizer::{normalize, MoodBucket};
pub use crate::pricing::PriceReconciler;
pub use crate::providers::{
    DeepSeekClient, LlmProvider, SteamPrice, SteamPriceLookup, SteamStoreClient,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
