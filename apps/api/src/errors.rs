use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::matching::MatchingError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Candidate profile incomplete, missing: {}", missing_fields.join(", "))]
    IncompleteProfile { missing_fields: Vec<String> },

    #[error("Job matching is disabled for this candidate")]
    MatchingDisabled,
}

impl From<MatchingError> for AppError {
    fn from(err: MatchingError) -> Self {
        match err {
            MatchingError::IncompleteProfile { missing_fields } => {
                AppError::IncompleteProfile { missing_fields }
            }
            MatchingError::MatchingDisabled => AppError::MatchingDisabled,
            MatchingError::InvalidConfig(msg) => AppError::Validation(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, code, details) = match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", None),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", None),
            AppError::IncompleteProfile { missing_fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INCOMPLETE_PROFILE",
                Some(json!({ "missing_fields": missing_fields })),
            ),
            AppError::MatchingDisabled => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MATCHING_DISABLED", None)
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_profile_maps_to_422() {
        let err: AppError = MatchingError::IncompleteProfile {
            missing_fields: vec!["resume".to_string()],
        }
        .into();
        assert!(err.to_string().contains("resume"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_invalid_config_maps_to_400() {
        let err: AppError = MatchingError::InvalidConfig("bad threshold".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
