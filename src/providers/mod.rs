pub mod deepseek;
pub mod steam;

use async_trait::async_trait;

use crate::error::Result;

pub use deepseek::DeepSeekClient;
pub use steam::SteamStoreClient;

/// Trait for chat-completion LLM providers (DeepSeek, etc.)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// One-shot completion: system prompt + user prompt, raw text back.
    /// No retries or streaming; the caller owns degradation.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Resolved Steam price data, whole currency units (USD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamPrice {
    pub final_price: f64,
    pub initial_price: f64,
    pub discount_percent: u8,
}

/// Trait for resolving a game title to its current Steam price
///
/// `Ok(None)` means the title is unknown or unpriced; errors mean the
/// lookup transport failed. The reconciler degrades on both.
#[async_trait]
pub trait SteamPriceLookup: Send + Sync {
    async fn lookup(&self, game_name: &str) -> Result<Option<SteamPrice>>;
}
