// Job-matching engine: strict filter → scorer (rule-based or AI with fallback) → assembler.
// AI calls go through llm_client only.

pub mod ai_scoring;
pub mod assembler;
pub mod config;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod scoring;
pub mod strict_filter;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Candidate profile incomplete, missing: {}", missing_fields.join(", "))]
    IncompleteProfile { missing_fields: Vec<String> },

    #[error("Job matching is disabled for this candidate")]
    MatchingDisabled,

    #[error("Invalid matching configuration: {0}")]
    InvalidConfig(String),
}
