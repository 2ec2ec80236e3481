use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{GameFinderError, Result};
use crate::providers::LlmProvider;

/// Production DeepSeek endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

const MODEL: &str = "deepseek-chat";
const TEMPERATURE: f64 = 0.1;
const MAX_TOKENS: u32 = 1500;

/// DeepSeek chat-completions client
pub struct DeepSeekClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl DeepSeekClient {
    /// Create a client against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint (tests, gateways)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for DeepSeekClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GameFinderError::Provider {
                provider: "deepseek".to_string(),
                message: format!("Completion request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(GameFinderError::Provider {
                provider: "deepseek".to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let completion: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| GameFinderError::Provider {
                    provider: "deepseek".to_string(),
                    message: format!("Invalid JSON: {}", e),
                })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GameFinderError::Provider {
                provider: "deepseek".to_string(),
                message: "No choices in response".to_string(),
            })?;

        tracing::debug!(
            "deepseek returned {} chars",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }

    fn name(&self) -> &str {
        "deepseek"
    }
}
