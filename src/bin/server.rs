use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamefinder_engine::{
    Currency, DeepSeekClient, GameFinder, PriceQuote, SearchResult, SteamStoreClient,
};

#[derive(Clone)]
struct AppState {
    finder: Arc<GameFinder>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
}

#[derive(Debug, Deserialize)]
struct PricesRequest {
    game: String,
    #[serde(default = "default_currency")]
    currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamefinder_server=debug,gamefinder_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = std::env::var("DEEPSEEK_API_KEY")
        .map_err(|_| anyhow::anyhow!("DEEPSEEK_API_KEY must be set"))?;
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting GameFinder Server");
    tracing::info!("🔌 Port: {}", port);

    let llm = Arc::new(DeepSeekClient::new(api_key));
    let steam = Arc::new(SteamStoreClient::new());
    let state = AppState {
        finder: Arc::new(GameFinder::new(llm, steam)),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .route("/v1/prices", post(prices_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: gamefinder_engine::VERSION.to_string(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResult>, (StatusCode, Json<ErrorResponse>)> {
    if req.query.trim().is_empty() {
        return Err(bad_request("query must not be empty"));
    }

    tracing::debug!("Search request: {:?}", req.query);
    let result = state.finder.search(&req.query).await;

    tracing::info!("✅ '{}' → {} games", req.query, result.games.len());
    Ok(Json(result))
}

async fn prices_handler(
    State(state): State<AppState>,
    Json(req): Json<PricesRequest>,
) -> Result<Json<Vec<PriceQuote>>, (StatusCode, Json<ErrorResponse>)> {
    if req.game.trim().is_empty() {
        return Err(bad_request("game must not be empty"));
    }
    let currency: Currency = req
        .currency
        .parse()
        .map_err(|e: String| bad_request(&e))?;

    let quotes = state.finder.store_quotes(&req.game, currency).await;
    Ok(Json(quotes))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!("rejected request: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
