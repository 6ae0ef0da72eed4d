//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::matching::config::{MatchingConfig, MatchingConfigOverrides};
use crate::matching::engine::{JobMatcher, MatchRun};
use crate::matching::scoring::{rule_based_breakdown, ScoreBreakdown};
use crate::matching::strict_filter::{apply_strict_filters, StrictFilterResult};
use crate::models::candidate::CandidateProfile;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FindMatchesRequest {
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<Job>,
    pub config: Option<MatchingConfigOverrides>,
}

#[derive(Debug, Deserialize)]
pub struct ScorePairRequest {
    pub candidate: CandidateProfile,
    pub job: Job,
    pub config: Option<MatchingConfigOverrides>,
}

#[derive(Debug, Serialize)]
pub struct ScorePairResponse {
    pub strict_filter: StrictFilterResult,
    pub breakdown: ScoreBreakdown,
}

/// POST /api/v1/matching/jobs
///
/// Runs the full matching pipeline for one candidate against the supplied jobs.
pub async fn handle_find_matches(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FindMatchesRequest>,
) -> Result<Json<MatchRun>, AppError> {
    let run = match &request.config {
        Some(overrides) => {
            let config = state.matcher.config().with_overrides(overrides);
            let matcher = state.matcher.with_config(config)?;
            run_matcher(&matcher, &request).await?
        }
        None => run_matcher(&state.matcher, &request).await?,
    };

    Ok(Json(run))
}

async fn run_matcher(
    matcher: &JobMatcher,
    request: &FindMatchesRequest,
) -> Result<MatchRun, AppError> {
    Ok(matcher.run(&request.candidate, &request.jobs).await?)
}

/// POST /api/v1/matching/score
///
/// Strict-filter outcome and rule-based sub-scores for a single pair. No AI call.
pub async fn handle_score_pair(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ScorePairRequest>,
) -> Result<Json<ScorePairResponse>, AppError> {
    let config: MatchingConfig = match &request.config {
        Some(overrides) => state.matcher.config().with_overrides(overrides),
        None => state.matcher.config().clone(),
    };
    config.validate()?;

    Ok(Json(ScorePairResponse {
        strict_filter: apply_strict_filters(&request.candidate, &request.job, &config),
        breakdown: rule_based_breakdown(&request.candidate, &request.job, &config.calibration),
    }))
}
