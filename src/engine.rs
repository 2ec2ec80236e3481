use std::sync::Arc;

use chrono::Duration;

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::core::{Currency, PriceQuote, SearchResult, Store};
use crate::normalizer::normalize;
use crate::pricing::PriceReconciler;
use crate::providers::{LlmProvider, SteamPriceLookup};

/// How long search results and price quotes stay cached
pub const CACHE_TTL_MINUTES: i64 = 10;

/// System prompt sent with every search completion. The response
/// contract mirrors what the normalizer expects.
const SYSTEM_PROMPT: &str = r#"You are a game recommendation AI. RESPOND ONLY IN JSON FORMAT WITHOUT ANY ADDITIONAL TEXT.

Required JSON format:
{
  "analysis": {
    "understoodMood": "The mood you understood",
    "recommendedStyle": "Recommended style",
    "keyFactors": ["factor1", "factor2", "factor3"],
    "reasoning": "Short explanation of the selection"
  },
  "games": [
    {
      "name": "Game title",
      "genre": "Genre",
      "description": "Short description up to 100 characters",
      "moodMatch": 0.85,
      "playtime": "10-20 hours",
      "vibe": "Atmosphere",
      "whyPerfect": "Why it fits the request",
      "platforms": ["PC"]
    }
  ]
}

RULES:
- games: 3-5 entries
- moodMatch: from 0.7 to 0.99
- description: at most 100 characters
- whyPerfect: at most 80 characters
- reasoning: at most 150 characters
- keyFactors: 3-5 factors

RETURN ONLY JSON WITHOUT CODE FENCES OR ADDITIONAL TEXT."#;

/// Main game finder orchestrator
///
/// Owns the LLM and Steam collaborators plus the transient caches.
/// Every public operation is total: provider failures degrade to the
/// normalizer fallback or to estimated quotes.
pub struct GameFinder {
    llm: Arc<dyn LlmProvider>,
    steam: Arc<dyn SteamPriceLookup>,
    reconciler: PriceReconciler,
    results: TtlCache<SearchResult>,
    quotes: TtlCache<PriceQuote>,
}

impl GameFinder {
    /// Create a finder with the system clock
    pub fn new(llm: Arc<dyn LlmProvider>, steam: Arc<dyn SteamPriceLookup>) -> Self {
        Self::with_clock(llm, steam, Arc::new(SystemClock))
    }

    /// Create a finder with an explicit clock (tests)
    pub fn with_clock(
        llm: Arc<dyn LlmProvider>,
        steam: Arc<dyn SteamPriceLookup>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ttl = Duration::minutes(CACHE_TTL_MINUTES);
        Self {
            llm,
            steam,
            reconciler: PriceReconciler::new(),
            results: TtlCache::new(ttl, clock.clone()),
            quotes: TtlCache::new(ttl, clock),
        }
    }

    /// Normalize a query into its cache key
    fn result_key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    fn quote_key(game_name: &str, store: Store, currency: Currency) -> String {
        format!("{}:{}:{}", store, currency, game_name.trim().to_lowercase())
    }

    /// Search for game recommendations. Never fails: LLM transport
    /// errors are treated like unparsable output and fall back to the
    /// canned catalogue.
    pub async fn search(&self, query: &str) -> SearchResult {
        let key = Self::result_key(query);
        if let Some(hit) = self.results.get(&key) {
            tracing::debug!("result cache hit for '{}'", key);
            return hit;
        }

        let user_prompt = format!(
            "User request: \"{}\". Return ONLY JSON without additional text.",
            query.trim()
        );

        let raw = match self.llm.complete(SYSTEM_PROMPT, &user_prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("LLM provider '{}' failed: {}", self.llm.name(), e);
                String::new()
            }
        };

        let result = normalize(&raw, query);
        tracing::debug!("'{}' -> {} games", key, result.games.len());

        self.results.insert(key, result.clone());
        result
    }

    /// Quote one store for a game. Never fails; see `PriceReconciler`.
    pub async fn price_quote(
        &self,
        game_name: &str,
        store: Store,
        currency: Currency,
    ) -> PriceQuote {
        let key = Self::quote_key(game_name, store, currency);
        if let Some(hit) = self.quotes.get(&key) {
            tracing::debug!("quote cache hit for '{}'", key);
            return hit;
        }

        let quote = self
            .reconciler
            .quote(game_name, store, currency, self.steam.as_ref())
            .await;

        self.quotes.insert(key, quote.clone());
        quote
    }

    /// Quote all stores for a game, resolving the Steam baseline once
    /// and priming the per-store quote cache.
    pub async fn store_quotes(&self, game_name: &str, currency: Currency) -> Vec<PriceQuote> {
        let quotes = self
            .reconciler
            .quote_all(game_name, currency, self.steam.as_ref())
            .await;

        for quote in &quotes {
            self.quotes
                .insert(Self::quote_key(game_name, quote.store, currency), quote.clone());
        }

        quotes
    }

    /// Sweep expired cache entries, returning how many were removed
    pub fn purge_caches(&self) -> usize {
        self.results.purge_expired() + self.quotes.purge_expired()
    }
}
