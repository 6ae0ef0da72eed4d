use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Matcher built from the process-level matching config. Requests may derive a variant
    /// with overrides; this one is never mutated.
    pub matcher: Arc<JobMatcher>,
}
