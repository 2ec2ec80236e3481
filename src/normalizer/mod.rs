//! Turns raw LLM text into a canonical [`SearchResult`].
//!
//! The entry point is [`normalize`]: total over all inputs, it either
//! recovers a game list from the text or serves the fixed fallback
//! catalogue keyed by the original query's mood. Malformed entries are
//! repaired with defaults rather than rejected wherever possible.

mod extract;
pub mod fallback;
mod repair;

use serde_json::Value;

use crate::core::recommendation::{clamp_mood_match, MOOD_MATCH_DEFAULT};
use crate::core::{GameRecommendation, SearchAnalysis, SearchResult};

pub use fallback::MoodBucket;

/// Normalize raw LLM output into a `SearchResult`. Never fails.
///
/// `original_query` is only consulted on the irrecoverable path, where
/// it selects the fallback bucket; the LLM text plays no part in that
/// selection.
pub fn normalize(raw_text: &str, original_query: &str) -> SearchResult {
    match try_normalize(raw_text) {
        Some(result) => result,
        None => {
            let bucket = fallback::detect_mood(original_query);
            tracing::debug!(?bucket, "unrecoverable LLM response, serving fallback");
            fallback::catalogue_for(bucket)
        }
    }
}

/// The recoverable path: extraction, parse (with one repair retry),
/// shape validation, per-game coercion. `None` means fallback.
fn try_normalize(raw_text: &str) -> Option<SearchResult> {
    let candidate = extract::extract_json_candidate(raw_text)?;

    let value: Value = match serde_json::from_str(candidate) {
        Ok(v) => v,
        Err(first_err) => {
            let repaired = repair::repair_json(candidate);
            match serde_json::from_str(&repaired) {
                Ok(v) => v,
                Err(_) => {
                    tracing::debug!("JSON unparsable even after repair: {}", first_err);
                    return None;
                }
            }
        }
    };

    let obj = value.as_object()?;

    // Extra top-level keys are ignored, a missing analysis is synthesized;
    // only a missing or empty game list is irrecoverable.
    let mut analysis = obj
        .get("analysis")
        .and_then(|v| serde_json::from_value::<SearchAnalysis>(v.clone()).ok())
        .unwrap_or_default();
    analysis.sanitize();

    let games: Vec<GameRecommendation> = obj
        .get("games")?
        .as_array()?
        .iter()
        .filter_map(coerce_game)
        .collect();

    if games.is_empty() {
        return None;
    }

    Some(SearchResult::new(analysis, games))
}

/// Coerce one raw entry, filling gaps with defaults. An entry is
/// dropped only when both `name` and `genre` are absent.
fn coerce_game(value: &Value) -> Option<GameRecommendation> {
    let obj = value.as_object()?;

    let name = non_empty_str(obj.get("name"));
    let genre = non_empty_str(obj.get("genre"));
    if name.is_none() && genre.is_none() {
        return None;
    }

    let mut game = GameRecommendation::default();
    if let Some(name) = name {
        game.name = name;
    }
    if let Some(genre) = genre {
        game.genre = genre;
    }
    if let Some(description) = non_empty_str(obj.get("description")) {
        game.description = description;
    }
    game.mood_match = clamp_mood_match(
        obj.get("moodMatch")
            .and_then(Value::as_f64)
            .unwrap_or(MOOD_MATCH_DEFAULT),
    );
    if let Some(playtime) = non_empty_str(obj.get("playtime")) {
        game.playtime = playtime;
    }
    if let Some(vibe) = non_empty_str(obj.get("vibe")) {
        game.vibe = vibe;
    }
    if let Some(why_perfect) = non_empty_str(obj.get("whyPerfect")) {
        game.why_perfect = why_perfect;
    }
    if let Some(platforms) = obj.get("platforms").and_then(Value::as_array) {
        let platforms: Vec<String> = platforms
            .iter()
            .filter_map(Value::as_str)
            .filter(|p| !p.trim().is_empty())
            .map(str::to_string)
            .collect();
        if !platforms.is_empty() {
            game.platforms = platforms;
        }
    }

    game.sanitize();
    Some(game)
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
