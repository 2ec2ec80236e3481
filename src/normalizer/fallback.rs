//! Hand-authored catalogue served when no valid game list can be
//! extracted from the LLM output.
//!
//! Bucket selection looks at the original user query, never at whatever
//! the model returned: a broken response for "something relaxing" must
//! still land in the relaxing bucket.

use crate::core::{GameRecommendation, SearchAnalysis, SearchResult};

/// Coarse sentiment bucket for a user query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodBucket {
    Relaxing,
    Adrenaline,
    StoryDriven,
}

const RELAXING_KEYWORDS: &[&str] = &["relax", "chill", "cozy", "calm", "peaceful"];
const ADRENALINE_KEYWORDS: &[&str] = &["adrenaline", "action", "intense", "shooter", "fast"];

/// Substring keyword match, story-driven when nothing recognizable.
pub fn detect_mood(query: &str) -> MoodBucket {
    let q = query.to_lowercase();
    if RELAXING_KEYWORDS.iter().any(|k| q.contains(k)) {
        MoodBucket::Relaxing
    } else if ADRENALINE_KEYWORDS.iter().any(|k| q.contains(k)) {
        MoodBucket::Adrenaline
    } else {
        MoodBucket::StoryDriven
    }
}

/// The fixed result for a bucket.
pub fn catalogue_for(bucket: MoodBucket) -> SearchResult {
    match bucket {
        MoodBucket::Relaxing => relaxing(),
        MoodBucket::Adrenaline => adrenaline(),
        MoodBucket::StoryDriven => story_driven(),
    }
}

fn game(
    name: &str,
    genre: &str,
    description: &str,
    mood_match: f64,
    playtime: &str,
    vibe: &str,
    why_perfect: &str,
    platforms: &[&str],
) -> GameRecommendation {
    GameRecommendation {
        name: name.to_string(),
        genre: genre.to_string(),
        description: description.to_string(),
        mood_match,
        playtime: playtime.to_string(),
        vibe: vibe.to_string(),
        why_perfect: why_perfect.to_string(),
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
    }
}

fn analysis(mood: &str, style: &str, factors: &[&str], reasoning: &str) -> SearchAnalysis {
    SearchAnalysis {
        understood_mood: mood.to_string(),
        recommended_style: style.to_string(),
        key_factors: factors.iter().map(|f| f.to_string()).collect(),
        reasoning: reasoning.to_string(),
    }
}

fn relaxing() -> SearchResult {
    SearchResult::new(
        analysis(
            "Calm, low-pressure mood",
            "Cozy sims and gentle exploration",
            &["low pressure", "cozy atmosphere", "gentle pacing"],
            "Picked soothing games with no fail states and soft pacing for winding down.",
        ),
        vec![
            game(
                "Stardew Valley",
                "Simulation, Indie",
                "Build a farm, befriend the valley, and settle into gentle seasonal routines.",
                0.92,
                "Endless",
                "Cozy, warm, unhurried",
                "Pure comfort with zero pressure and endless small goals",
                &["PC", "PS5", "Xbox", "Switch", "Mobile"],
            ),
            game(
                "A Short Hike",
                "Adventure, Indie",
                "Hike and glide around a peaceful island park entirely at your own pace.",
                0.89,
                "2-4 hours",
                "Sunny, breezy, kind",
                "A tiny world that asks nothing and soothes everything",
                &["PC", "Switch"],
            ),
            game(
                "Unpacking",
                "Puzzle, Indie",
                "Unpack boxes across a life of moves in this meditative zen puzzler.",
                0.85,
                "4-6 hours",
                "Meditative, nostalgic",
                "Quiet, methodical satisfaction in every room",
                &["PC", "Xbox", "Switch"],
            ),
        ],
    )
}

fn adrenaline() -> SearchResult {
    SearchResult::new(
        analysis(
            "High-energy, action-hungry mood",
            "Fast, kinetic action games",
            &["speed", "tight controls", "escalating intensity"],
            "Picked fast, skill-driven games that reward aggression and keep the pace high.",
        ),
        vec![
            game(
                "Hades",
                "Roguelike, Action",
                "Fight your way out of the underworld in stylish, lightning-fast runs.",
                0.94,
                "20-40 hours",
                "Fast, stylish, relentless",
                "Every run is a burst of speed, skill and escalation",
                &["PC", "PS5", "Xbox", "Switch"],
            ),
            game(
                "DOOM Eternal",
                "Shooter, Action",
                "Rip through demon hordes in a ballet of movement and shotguns.",
                0.91,
                "15-25 hours",
                "Loud, brutal, precise",
                "Unmatched momentum and aggression under pressure",
                &["PC", "PS5", "Xbox"],
            ),
            game(
                "Vampire Survivors",
                "Roguelike, Action",
                "Mow down swarming hordes while builds spiral gloriously out of control.",
                0.86,
                "10-30 hours",
                "Chaotic, hypnotic",
                "Instant action with an addictive power curve",
                &["PC", "Xbox", "Switch", "Mobile"],
            ),
        ],
    )
}

fn story_driven() -> SearchResult {
    SearchResult::new(
        analysis(
            "Looking for narrative immersion",
            "Rich story-driven adventures",
            &["strong writing", "memorable characters", "meaningful choices"],
            "Picked acclaimed narratives with deep worlds and choices that carry real weight.",
        ),
        vec![
            game(
                "The Witcher 3: Wild Hunt",
                "RPG, Adventure",
                "Hunt monsters across a vast open world dense with unforgettable stories.",
                0.95,
                "50+ hours",
                "Epic, atmospheric, mature",
                "A benchmark for writing and world-building in games",
                &["PC", "PS5", "Xbox", "Switch"],
            ),
            game(
                "Disco Elysium",
                "RPG, Mystery",
                "Solve a murder as a broken detective in a city that argues back.",
                0.93,
                "20-30 hours",
                "Literary, strange, profound",
                "Prose-first role-play with consequences everywhere",
                &["PC", "PS5", "Xbox", "Switch"],
            ),
            game(
                "Red Dead Redemption 2",
                "Action, Adventure",
                "Ride with a doomed outlaw gang through an elegiac American frontier.",
                0.90,
                "60+ hours",
                "Slow-burn, cinematic",
                "A character study with staggering depth and detail",
                &["PC", "PS4", "Xbox"],
            ),
        ],
    )
}
