use thiserror::Error;

/// Main error type for the game finder engine
///
/// Only the provider/transport layer produces these. The core operations
/// (`normalize`, `quote`) are total and degrade instead of failing.
#[derive(Error, Debug)]
pub enum GameFinderError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for GameFinderError {
    fn from(s: String) -> Self {
        GameFinderError::Other(s)
    }
}

impl From<&str> for GameFinderError {
    fn from(s: &str) -> Self {
        GameFinderError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GameFinderError>;
