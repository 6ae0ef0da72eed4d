mod config;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod models;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionClient, LlmClient};
use crate::matching::engine::JobMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting NexJob matcher v{}", env!("CARGO_PKG_VERSION"));

    // AI-assisted scoring needs a credential; without one every job is scored rule-based.
    let completion: Option<Arc<dyn CompletionClient>> = match &config.openai_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.openai_api_url.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm) as Arc<dyn CompletionClient>)
        }
        None => {
            if config.matching.ai_matching_enabled {
                warn!("OPENAI_API_KEY not set; AI-assisted matching will use rule-based scoring");
            }
            None
        }
    };

    let matcher = JobMatcher::new(config.matching.clone(), completion)?;
    info!(
        "Matching config: threshold={} strict_filters={} ai={}",
        config.matching.minimum_match_threshold,
        config.matching.enable_strict_filters,
        config.matching.ai_matching_enabled
    );

    let state = AppState {
        config: config.clone(),
        matcher: Arc::new(matcher),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
