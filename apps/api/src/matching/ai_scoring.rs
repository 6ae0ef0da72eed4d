//! AI-assisted Match Scorer and the strategy selection around it.
//!
//! The AI path returns a typed `Result`; any `Err` makes the caller use the rule-based score
//! for the same pair. There is exactly one attempt per job.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use crate::llm_client::{CompletionClient, LlmError};
use crate::matching::config::MatchingConfig;
use crate::matching::prompts::{MATCH_SCORE_PROMPT_TEMPLATE, MATCH_SCORE_SYSTEM};
use crate::matching::scoring::rule_based_score;
use crate::models::candidate::CandidateProfile;
use crate::models::job::Job;
use crate::models::matching::ScoreSource;

/// How scores are produced for a run.
pub enum ScoringStrategy<'a> {
    RuleBased,
    AiAssisted(&'a dyn CompletionClient),
}

impl<'a> ScoringStrategy<'a> {
    /// AI scoring needs both the config switch and a configured client (i.e. a credential).
    pub fn select(config: &MatchingConfig, client: Option<&'a dyn CompletionClient>) -> Self {
        match client {
            Some(client) if config.ai_matching_enabled => ScoringStrategy::AiAssisted(client),
            _ => ScoringStrategy::RuleBased,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoringStrategy::RuleBased => "rule_based",
            ScoringStrategy::AiAssisted(_) => "ai",
        }
    }
}

/// Scores one candidate/job pair that already passed the strict filter.
pub async fn score_match(
    strategy: &ScoringStrategy<'_>,
    candidate: &CandidateProfile,
    job: &Job,
    config: &MatchingConfig,
) -> (u32, ScoreSource) {
    match strategy {
        ScoringStrategy::RuleBased => (
            rule_based_score(candidate, job, &config.calibration),
            ScoreSource::RuleBased,
        ),
        ScoringStrategy::AiAssisted(client) => match ai_score(*client, candidate, job).await {
            Ok(score) => (score, ScoreSource::Ai),
            Err(e) => {
                warn!(
                    job_id = %job.id,
                    "AI matching failed, falling back to rule-based matching: {e}"
                );
                (
                    rule_based_score(candidate, job, &config.calibration),
                    ScoreSource::RuleBased,
                )
            }
        },
    }
}

pub async fn ai_score(
    client: &dyn CompletionClient,
    candidate: &CandidateProfile,
    job: &Job,
) -> Result<u32, LlmError> {
    let prompt = build_match_prompt(candidate, job);
    let completion = client.complete(MATCH_SCORE_SYSTEM, &prompt).await?;
    parse_percentage(&completion)
}

pub fn build_match_prompt(candidate: &CandidateProfile, job: &Job) -> String {
    let candidate_skills: Vec<&str> = candidate.skill_names().collect();
    let candidate_job_types: Vec<&str> = candidate
        .preferences
        .job_types
        .iter()
        .map(|t| t.as_str())
        .collect();

    MATCH_SCORE_PROMPT_TEMPLATE
        .replace("{candidate_years}", &candidate.total_experience_years.to_string())
        .replace(
            "{candidate_level}",
            candidate
                .current_experience_level
                .map(|l| l.as_str())
                .unwrap_or("unspecified"),
        )
        .replace("{candidate_skills}", &candidate_skills.join(", "))
        .replace("{candidate_location}", &candidate.location)
        .replace("{candidate_job_types}", &candidate_job_types.join(", "))
        .replace("{candidate_summary}", &candidate.summary)
        .replace("{job_title}", &job.title)
        .replace("{company}", &job.company.name)
        .replace("{job_experience_min}", &job.experience_min.to_string())
        .replace(
            "{job_level}",
            job.experience_level
                .map(|l| l.as_str())
                .unwrap_or("unspecified"),
        )
        .replace("{job_skills}", &job.skills.join(", "))
        .replace("{job_location}", &job.location)
        .replace("{job_type}", job.job_type.as_str())
        .replace("{job_description}", &job.description)
        .replace("{job_requirements}", &job.requirements.join(", "))
        .trim()
        .to_string()
}

/// First numeric token (`123` or `12.5`), ASCII digits only.
fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("valid number pattern"))
}

/// Reads the first numeric token of a completion as a percentage, clamped to 0-100 and rounded.
pub fn parse_percentage(text: &str) -> Result<u32, LlmError> {
    let token = number_pattern()
        .find(text)
        .map(|m| m.as_str())
        .ok_or_else(|| LlmError::Unparseable(format!("no number in {:?}", truncate(text, 80))))?;

    let value: f64 = token
        .parse()
        .map_err(|_| LlmError::Unparseable(format!("bad number {token:?}")))?;

    Ok(value.clamp(0.0, 100.0).round() as u32)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
