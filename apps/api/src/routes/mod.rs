pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matching/jobs", post(matching::handle_find_matches))
        .route("/api/v1/matching/score", post(matching::handle_score_pair))
        // Profile API
        .route(
            "/api/v1/profile/validation",
            post(profile::handle_validate_profile),
        )
        .route(
            "/api/v1/profile/completion",
            post(profile::handle_profile_completion),
        )
        .fallback(not_found)
        .with_state(state)
}
