//! Strict Filter: the salary/experience pass-fail gate applied before any scoring.

use serde::{Deserialize, Serialize};

use crate::matching::config::MatchingConfig;
use crate::models::candidate::CandidateProfile;
use crate::models::job::Job;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrictFilterResult {
    pub passes_filters: bool,
    pub salary_match: bool,
    pub experience_match: bool,
    pub filter_reasons: Vec<String>,
}

/// Applies the enabled strict rules to one candidate/job pair. Disabled rules pass.
///
/// Reasons deliberately omit the job's private salary figure.
pub fn apply_strict_filters(
    candidate: &CandidateProfile,
    job: &Job,
    config: &MatchingConfig,
) -> StrictFilterResult {
    let mut filter_reasons = Vec::new();

    let salary_match = !config.salary_filter_active() || salary_rule(candidate, job);
    if !salary_match {
        filter_reasons.push(format!(
            "Offered salary below expectation ({})",
            candidate.minimum_salary()
        ));
    }

    let experience_match = !config.experience_filter_active() || experience_rule(candidate, job);
    if !experience_match {
        filter_reasons.push(format!(
            "Experience {} years < required {} years",
            candidate.total_experience_years, job.experience_min
        ));
    }

    StrictFilterResult {
        passes_filters: salary_match && experience_match,
        salary_match,
        experience_match,
        filter_reasons,
    }
}

/// A job without an actual salary floor is not filtered on salary.
fn salary_rule(candidate: &CandidateProfile, job: &Job) -> bool {
    match job.actual_salary_min {
        Some(actual_min) => actual_min >= candidate.minimum_salary(),
        None => true,
    }
}

fn experience_rule(candidate: &CandidateProfile, job: &Job) -> bool {
    candidate.total_experience_years >= job.experience_min
}
