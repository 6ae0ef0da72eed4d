use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and whether AI-assisted scoring is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let config = state.matcher.config();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "nexjob-matcher",
        "ai_scoring": config.ai_matching_enabled && state.config.openai_api_key.is_some(),
        "minimum_match_threshold": config.minimum_match_threshold
    }))
}
