//! Match Assembler: turns a scored pair into a `JobMatch` record.

use chrono::Utc;

use crate::matching::config::ScoringCalibration;
use crate::matching::scoring::{location_score, required_skills, skills_overlap};
use crate::matching::strict_filter::StrictFilterResult;
use crate::models::candidate::CandidateProfile;
use crate::models::job::Job;
use crate::models::matching::{JobMatch, ScoreSource, SkillsBreakdown};

/// Location sub-score above which a match is flagged as a location match.
const LOCATION_MATCH_CUTOFF: f64 = 70.0;

pub fn assemble_match(
    candidate: &CandidateProfile,
    job: &Job,
    match_percentage: u32,
    scored_by: ScoreSource,
    filter_result: &StrictFilterResult,
    calibration: &ScoringCalibration,
) -> JobMatch {
    let skills_match = analyze_skills(candidate, job);
    let match_reasons = build_match_reasons(candidate, job, match_percentage, &skills_match);
    let match_explanation = build_match_explanation(candidate, job, match_percentage, &skills_match);
    let created_at = Utc::now();

    JobMatch {
        id: format!(
            "match-{}-{}-{}",
            candidate.id,
            job.id,
            created_at.timestamp_millis()
        ),
        job: job.clone(),
        match_percentage,
        match_reasons,
        skills_match,
        salary_matches: filter_result.salary_match,
        experience_matches: filter_result.experience_match,
        location_match: location_score(&candidate.location, &job.location, calibration)
            > LOCATION_MATCH_CUTOFF,
        match_explanation,
        scored_by,
        created_at,
    }
}

/// Splits job skills into matched/missing and lists candidate skills the job did not ask for.
/// Original casing is kept; comparisons are case-insensitive.
pub fn analyze_skills(candidate: &CandidateProfile, job: &Job) -> SkillsBreakdown {
    let candidate_skills: Vec<&str> = candidate
        .skill_names()
        .filter(|s| !s.trim().is_empty())
        .collect();

    let required: Vec<&String> = required_skills(&job.skills).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(|js| js.to_string())
        .partition(|js| candidate_skills.iter().any(|cs| skills_overlap(cs, js)));

    let additional = candidate_skills
        .iter()
        .filter(|cs| !required.iter().any(|js| skills_overlap(cs, js)))
        .map(|cs| cs.to_string())
        .collect();

    let percentage = if required.is_empty() {
        100.0
    } else {
        matched.len() as f64 / required.len() as f64 * 100.0
    };

    SkillsBreakdown {
        matched,
        missing,
        additional,
        percentage,
    }
}

fn build_match_reasons(
    candidate: &CandidateProfile,
    job: &Job,
    score: u32,
    skills: &SkillsBreakdown,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if score >= 90 {
        reasons.push("Excellent overall match".to_string());
    } else if score >= 80 {
        reasons.push("Strong match with good alignment".to_string());
    } else if score >= 70 {
        reasons.push("Good match with some areas for growth".to_string());
    }

    if skills.percentage >= 80.0 {
        reasons.push("Strong skills alignment".to_string());
    }

    if let (Some(c), Some(j)) = (candidate.current_experience_level, job.experience_level) {
        if c == j {
            reasons.push("Perfect experience level match".to_string());
        }
    }

    reasons
}

fn build_match_explanation(
    candidate: &CandidateProfile,
    job: &Job,
    score: u32,
    skills: &SkillsBreakdown,
) -> String {
    let skills_pct = skills.percentage.round() as u32;

    if score >= 85 {
        let level = job
            .experience_level
            .map(|l| format!("{} level ", l.as_str()))
            .unwrap_or_default();
        format!(
            "Excellent match! Your {} years of experience and {skills_pct}% skills alignment make you a strong candidate for this {level}position.",
            candidate.total_experience_years
        )
    } else if score >= 75 {
        format!(
            "Good match! Your background aligns well with this role, with {skills_pct}% skills overlap and appropriate experience level."
        )
    } else {
        "Potential match! While there are some gaps, your core skills and experience provide a foundation for this role with room for growth.".to_string()
    }
}
