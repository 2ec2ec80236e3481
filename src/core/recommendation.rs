use serde::{Deserialize, Serialize};

use crate::core::truncate_chars;

/// Maximum character count for the description field
pub const DESCRIPTION_MAX: usize = 100;
/// Maximum character count for the why-perfect blurb
pub const WHY_PERFECT_MAX: usize = 80;
/// Allowed range for the mood match score
pub const MOOD_MATCH_RANGE: (f64, f64) = (0.70, 0.99);
/// Score used when the source omits or mangles moodMatch
pub const MOOD_MATCH_DEFAULT: f64 = 0.8;

fn default_name() -> String {
    "Unknown".to_string()
}

fn default_genre() -> String {
    "Unspecified".to_string()
}

fn default_description() -> String {
    "No description available".to_string()
}

fn default_mood_match() -> f64 {
    MOOD_MATCH_DEFAULT
}

fn default_playtime() -> String {
    "Varies".to_string()
}

fn default_vibe() -> String {
    "Not specified".to_string()
}

fn default_why_perfect() -> String {
    "Matches your request".to_string()
}

fn default_platforms() -> Vec<String> {
    vec!["PC".to_string()]
}

/// One suggested game as rendered to the caller
///
/// Every field carries a non-empty default so a partially populated
/// LLM response never breaks rendering downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameRecommendation {
    /// Game title
    #[serde(default = "default_name")]
    pub name: String,

    /// Genre label, free-form
    #[serde(default = "default_genre")]
    pub genre: String,

    /// Short description, at most 100 characters
    #[serde(default = "default_description")]
    pub description: String,

    /// How well the game matches the query mood, clamped to [0.70, 0.99]
    #[serde(default = "default_mood_match")]
    pub mood_match: f64,

    /// Expected playtime, free-form ("10-20 hours")
    #[serde(default = "default_playtime")]
    pub playtime: String,

    /// Atmosphere one-liner
    #[serde(default = "default_vibe")]
    pub vibe: String,

    /// Why this game fits the query, at most 80 characters
    #[serde(default = "default_why_perfect")]
    pub why_perfect: String,

    /// Platforms, ordered as the source listed them
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
}

impl GameRecommendation {
    /// Create a recommendation with the given title and defaults elsewhere
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Clamp and truncate fields back into their invariants.
    ///
    /// Idempotent: applying it to an already-canonical value is a no-op.
    pub fn sanitize(&mut self) {
        if self.name.trim().is_empty() {
            self.name = default_name();
        }
        if self.genre.trim().is_empty() {
            self.genre = default_genre();
        }
        if self.description.trim().is_empty() {
            self.description = default_description();
        }
        self.description = truncate_chars(&self.description, DESCRIPTION_MAX);
        self.mood_match = clamp_mood_match(self.mood_match);
        if self.playtime.trim().is_empty() {
            self.playtime = default_playtime();
        }
        if self.vibe.trim().is_empty() {
            self.vibe = default_vibe();
        }
        if self.why_perfect.trim().is_empty() {
            self.why_perfect = default_why_perfect();
        }
        self.why_perfect = truncate_chars(&self.why_perfect, WHY_PERFECT_MAX);
        if self.platforms.is_empty() {
            self.platforms = default_platforms();
        }
    }

    /// Match score as a whole percentage, for display
    pub fn match_percent(&self) -> u32 {
        (self.mood_match * 100.0).round() as u32
    }
}

impl Default for GameRecommendation {
    fn default() -> Self {
        Self {
            name: default_name(),
            genre: default_genre(),
            description: default_description(),
            mood_match: default_mood_match(),
            playtime: default_playtime(),
            vibe: default_vibe(),
            why_perfect: default_why_perfect(),
            platforms: default_platforms(),
        }
    }
}

/// Clamp a mood match score into the allowed range; non-finite input
/// falls back to the default score.
pub fn clamp_mood_match(value: f64) -> f64 {
    if !value.is_finite() {
        return MOOD_MATCH_DEFAULT;
    }
    value.clamp(MOOD_MATCH_RANGE.0, MOOD_MATCH_RANGE.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_non_empty() {
        let game = GameRecommendation::default();
        assert!(!game.name.is_empty());
        assert!(!game.genre.is_empty());
        assert!(!game.description.is_empty());
        assert!(!game.playtime.is_empty());
        assert!(!game.vibe.is_empty());
        assert!(!game.why_perfect.is_empty());
        assert_eq!(game.platforms, vec!["PC"]);
        assert_eq!(game.mood_match, MOOD_MATCH_DEFAULT);
    }

    #[test]
    fn test_clamp_mood_match() {
        assert_eq!(clamp_mood_match(0.5), 0.70);
        assert_eq!(clamp_mood_match(1.2), 0.99);
        assert_eq!(clamp_mood_match(0.85), 0.85);
        assert_eq!(clamp_mood_match(f64::NAN), MOOD_MATCH_DEFAULT);
    }

    #[test]
    fn test_sanitize_truncates_long_text() {
        let mut game = GameRecommendation::new("Hades");
        game.description = "d".repeat(150);
        game.why_perfect = "w".repeat(120);
        game.sanitize();
        assert_eq!(game.description.chars().count(), DESCRIPTION_MAX);
        assert_eq!(game.why_perfect.chars().count(), WHY_PERFECT_MAX);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let mut game = GameRecommendation::new("Hades");
        game.mood_match = 1.5;
        game.sanitize();
        let once = game.clone();
        game.sanitize();
        assert_eq!(game, once);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let game = GameRecommendation::new("Hades");
        let json = serde_json::to_string(&game).unwrap();
        assert!(json.contains("\"moodMatch\""));
        assert!(json.contains("\"whyPerfect\""));
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let game: GameRecommendation =
            serde_json::from_str(r#"{"name":"Hades","genre":"Roguelike"}"#).unwrap();
        assert_eq!(game.name, "Hades");
        assert_eq!(game.mood_match, MOOD_MATCH_DEFAULT);
        assert_eq!(game.platforms, vec!["PC"]);
    }
}
