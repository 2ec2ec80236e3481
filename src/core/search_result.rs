use serde::{Deserialize, Serialize};

use crate::core::recommendation::GameRecommendation;
use crate::core::truncate_chars;

/// Maximum character count for the analysis reasoning
pub const REASONING_MAX: usize = 150;
/// keyFactors must hold between 3 and 5 entries
pub const KEY_FACTORS_RANGE: (usize, usize) = (3, 5);

fn default_understood_mood() -> String {
    "General preferences".to_string()
}

fn default_recommended_style() -> String {
    "Varied styles".to_string()
}

fn default_key_factors() -> Vec<String> {
    vec![
        "gameplay".to_string(),
        "atmosphere".to_string(),
        "mood".to_string(),
    ]
}

fn default_reasoning() -> String {
    "Derived from your query".to_string()
}

/// Metadata about how the query was interpreted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchAnalysis {
    #[serde(default = "default_understood_mood")]
    pub understood_mood: String,

    #[serde(default = "default_recommended_style")]
    pub recommended_style: String,

    /// 3-5 factors that drove the selection
    #[serde(default = "default_key_factors")]
    pub key_factors: Vec<String>,

    /// Selection rationale, at most 150 characters
    #[serde(default = "default_reasoning")]
    pub reasoning: String,
}

impl SearchAnalysis {
    /// Repair the analysis back into its invariants.
    pub fn sanitize(&mut self) {
        if self.understood_mood.trim().is_empty() {
            self.understood_mood = default_understood_mood();
        }
        if self.recommended_style.trim().is_empty() {
            self.recommended_style = default_recommended_style();
        }
        self.key_factors.retain(|f| !f.trim().is_empty());
        if self.key_factors.len() < KEY_FACTORS_RANGE.0 {
            self.key_factors = default_key_factors();
        }
        self.key_factors.truncate(KEY_FACTORS_RANGE.1);
        if self.reasoning.trim().is_empty() {
            self.reasoning = default_reasoning();
        }
        self.reasoning = truncate_chars(&self.reasoning, REASONING_MAX);
    }
}

impl Default for SearchAnalysis {
    fn default() -> Self {
        Self {
            understood_mood: default_understood_mood(),
            recommended_style: default_recommended_style(),
            key_factors: default_key_factors(),
            reasoning: default_reasoning(),
        }
    }
}

/// The unit returned to the caller: interpreted query plus recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub analysis: SearchAnalysis,
    pub games: Vec<GameRecommendation>,
}

impl SearchResult {
    pub fn new(analysis: SearchAnalysis, games: Vec<GameRecommendation>) -> Self {
        Self { analysis, games }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
