//! Rule-based Match Scorer.
//!
//! overall = round(0.40·skills + 0.25·experience_level + 0.15·location + 0.10·job_type
//!                 + 0.10·education)
//!
//! Every sub-score is on a 0-100 scale before weighting.

use serde::{Deserialize, Serialize};

use crate::matching::config::ScoringCalibration;
use crate::models::candidate::{CandidateProfile, ExperienceLevel};
use crate::models::job::{Job, JobType};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience_level: f64,
    pub location: f64,
    pub job_type: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience_level: 0.25,
            location: 0.15,
            job_type: 0.10,
            education: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience_level + self.location + self.job_type + self.education
    }

    pub fn is_valid(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-6
    }
}

/// The five sub-scores behind a rule-based match percentage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience_level: f64,
    pub location: f64,
    pub job_type: f64,
    pub education: f64,
    pub overall: u32,
}

pub fn rule_based_breakdown(
    candidate: &CandidateProfile,
    job: &Job,
    calibration: &ScoringCalibration,
) -> ScoreBreakdown {
    let weights = ScoringWeights::default();
    debug_assert!(weights.is_valid());

    let skills = skills_score(candidate.skill_names(), &job.skills);
    let experience_level =
        experience_level_score(candidate.current_experience_level, job.experience_level);
    let location = location_score(&candidate.location, &job.location, calibration);
    let job_type = job_type_score(&candidate.preferences.job_types, job.job_type);
    let education = education_score(candidate, calibration);

    let weighted = weights.skills * skills
        + weights.experience_level * experience_level
        + weights.location * location
        + weights.job_type * job_type
        + weights.education * education;

    ScoreBreakdown {
        skills,
        experience_level,
        location,
        job_type,
        education,
        overall: weighted.round().clamp(0.0, 100.0) as u32,
    }
}

pub fn rule_based_score(
    candidate: &CandidateProfile,
    job: &Job,
    calibration: &ScoringCalibration,
) -> u32 {
    rule_based_breakdown(candidate, job, calibration).overall
}

/// Case-insensitive substring overlap in either direction. Blank names never overlap.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Job skills that count as requirements. Blank entries require nothing.
pub fn required_skills(job_skills: &[String]) -> impl Iterator<Item = &String> {
    job_skills.iter().filter(|s| !s.trim().is_empty())
}

/// Share of job skills covered by any candidate skill. No required skills scores 100.
pub fn skills_score<'a>(
    candidate_skills: impl Iterator<Item = &'a str>,
    job_skills: &[String],
) -> f64 {
    let required: Vec<&String> = required_skills(job_skills).collect();
    if required.is_empty() {
        return 100.0;
    }

    let candidate_skills: Vec<&str> = candidate_skills.collect();
    let matched = required
        .iter()
        .filter(|js| candidate_skills.iter().any(|cs| skills_overlap(cs, js)))
        .count();

    matched as f64 / required.len() as f64 * 100.0
}

/// Ordinal distance on entry → mid → senior → executive.
///
/// A job with no stated level has nothing to mismatch; a candidate without a level is
/// scored as the farthest distance.
pub fn experience_level_score(
    candidate: Option<ExperienceLevel>,
    job: Option<ExperienceLevel>,
) -> f64 {
    let (candidate, job) = match (candidate, job) {
        (_, None) => return 100.0,
        (None, Some(_)) => return 25.0,
        (Some(c), Some(j)) => (c, j),
    };

    match candidate.ordinal().abs_diff(job.ordinal()) {
        0 => 100.0,
        1 => 75.0,
        2 => 50.0,
        _ => 25.0,
    }
}

pub fn location_score(
    candidate_location: &str,
    job_location: &str,
    calibration: &ScoringCalibration,
) -> f64 {
    let job_location = job_location.trim().to_lowercase();
    if job_location.contains("remote") || job_location == candidate_location.trim().to_lowercase()
    {
        100.0
    } else {
        calibration.location_partial_credit
    }
}

pub fn job_type_score(preferred: &[JobType], job_type: JobType) -> f64 {
    if preferred.contains(&job_type) {
        100.0
    } else {
        50.0
    }
}

/// Coarse heuristic: having any education at all is what counts.
pub fn education_score(candidate: &CandidateProfile, calibration: &ScoringCalibration) -> f64 {
    if candidate.education.is_empty() {
        calibration.education_absent
    } else {
        calibration.education_present
    }
}
