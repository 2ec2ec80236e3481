use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gamefinder_engine::{
    Currency, GameFinder, GameFinderError, LlmProvider, PriceProvenance, Result, SteamPrice,
    SteamPriceLookup, Store,
};

/// LLM stub returning a fixed response (or failing) and counting calls
struct ScriptedLlm {
    response: Option<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    fn returning(response: &'static str) -> Self {
        Self {
            response: Some(response),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.response {
            Some(text) => Ok(text.to_string()),
            None => Err(GameFinderError::Provider {
                provider: "scripted".to_string(),
                message: "unreachable".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Steam stub with a fixed price (or failure) and a call counter
struct StubSteam {
    price: Option<SteamPrice>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubSteam {
    fn returning(price: SteamPrice) -> Self {
        Self {
            price: Some(price),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            price: None,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SteamPriceLookup for StubSteam {
    async fn lookup(&self, _game_name: &str) -> Result<Option<SteamPrice>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GameFinderError::Provider {
                provider: "steam".to_string(),
                message: "unreachable".to_string(),
            });
        }
        Ok(self.price)
    }
}

const FENCED_RESPONSE: &str = "```json\n{\"analysis\":{\"understoodMood\":\"fast and furious\",\"recommendedStyle\":\"action\",\"keyFactors\":[\"speed\",\"skill\",\"intensity\"],\"reasoning\":\"high energy request\"},\"games\":[{\"name\":\"Hades\",\"genre\":\"Roguelike\",\"description\":\"Escape the underworld\",\"moodMatch\":0.94,\"playtime\":\"20-40 hours\",\"vibe\":\"Relentless\",\"whyPerfect\":\"Pure speed\",\"platforms\":[\"PC\",\"Switch\"]}]}\n```";

#[tokio::test]
async fn test_search_end_to_end() {
    let finder = GameFinder::new(
        Arc::new(ScriptedLlm::returning(FENCED_RESPONSE)),
        Arc::new(StubSteam::failing()),
    );

    let result = finder.search("something fast and intense").await;

    assert_eq!(result.analysis.understood_mood, "fast and furious");
    assert_eq!(result.games.len(), 1);
    let game = &result.games[0];
    assert_eq!(game.name, "Hades");
    assert_eq!(game.platforms, vec!["PC", "Switch"]);
    assert_eq!(game.mood_match, 0.94);
}

#[tokio::test]
async fn test_search_hits_cache_on_repeat() {
    let llm = Arc::new(ScriptedLlm::returning(FENCED_RESPONSE));
    let finder = GameFinder::new(llm.clone(), Arc::new(StubSteam::failing()));

    let first = finder.search("Fast Please").await;
    let second = finder.search("fast please").await;

    assert_eq!(first, second);
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_survives_llm_outage() {
    let finder = GameFinder::new(
        Arc::new(ScriptedLlm::failing()),
        Arc::new(StubSteam::failing()),
    );

    let result = finder.search("need some adrenaline tonight").await;

    // Fallback catalogue, adrenaline bucket, invariants intact
    assert!(!result.games.is_empty());
    assert!(result.games.iter().any(|g| g.name == "Hades"));
    for game in &result.games {
        assert!(game.mood_match >= 0.70 && game.mood_match <= 0.99);
        assert!(!game.platforms.is_empty());
    }
}

#[tokio::test]
async fn test_epic_quote_carries_bumped_discount() {
    let finder = GameFinder::new(
        Arc::new(ScriptedLlm::failing()),
        Arc::new(StubSteam::returning(SteamPrice {
            final_price: 24.99,
            initial_price: 24.99,
            discount_percent: 20,
        })),
    );

    let quote = finder
        .price_quote("Hades", Store::Epic, Currency::USD)
        .await;

    assert_eq!(quote.discount_percent, 25);
    assert!(!quote.is_real_price);
    assert_eq!(quote.provenance, PriceProvenance::Calculated);
}

#[tokio::test]
async fn test_quotes_degrade_when_steam_is_down() {
    let finder = GameFinder::new(
        Arc::new(ScriptedLlm::failing()),
        Arc::new(StubSteam::failing()),
    );

    for store in Store::ALL {
        let quote = finder
            .price_quote("The Witcher 3: Wild Hunt", store, Currency::EUR)
            .await;
        assert_ne!(quote.provenance, PriceProvenance::SteamApi);
        assert!(!quote.is_real_price);
        assert_eq!(quote.currency, Currency::EUR);
        assert!(quote.price > 0.0);
    }
}

#[tokio::test]
async fn test_store_quotes_resolves_steam_once() {
    let steam = Arc::new(StubSteam::returning(SteamPrice {
        final_price: 19.99,
        initial_price: 19.99,
        discount_percent: 0,
    }));
    let finder = GameFinder::new(Arc::new(ScriptedLlm::failing()), steam.clone());

    let quotes = finder.store_quotes("Hades", Currency::USD).await;

    assert_eq!(quotes.len(), Store::ALL.len());
    assert_eq!(steam.calls.load(Ordering::SeqCst), 1);

    let stores: Vec<Store> = quotes.iter().map(|q| q.store).collect();
    assert_eq!(stores, Store::ALL.to_vec());

    // Steam quote is real; the rest are derived
    assert!(quotes[0].is_real_price);
    assert!(quotes[1..].iter().all(|q| !q.is_real_price));
}
