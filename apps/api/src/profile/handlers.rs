use axum::Json;
use serde::Deserialize;

use crate::extract::ApiJson;
use crate::models::candidate::CandidateProfile;
use crate::profile::completeness::{completion_status, ProfileCompletionStatus};
use crate::profile::validation::{validate_for_matching, ProfileValidationResult};

#[derive(Deserialize)]
pub struct ProfileRequest {
    pub profile: CandidateProfile,
}

/// POST /api/v1/profile/validation
pub async fn handle_validate_profile(
    ApiJson(req): ApiJson<ProfileRequest>,
) -> Json<ProfileValidationResult> {
    Json(validate_for_matching(&req.profile))
}

/// POST /api/v1/profile/completion
pub async fn handle_profile_completion(
    ApiJson(req): ApiJson<ProfileRequest>,
) -> Json<ProfileCompletionStatus> {
    Json(completion_status(&req.profile))
}
