use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Which scorer produced a match percentage. Surfaced for transparency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    RuleBased,
    Ai,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillsBreakdown {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub additional: Vec<String>,
    pub percentage: f64,
}

/// A computed candidate/job association. Built fresh on every matching run and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub id: String,
    pub job: Job,
    pub match_percentage: u32,
    pub match_reasons: Vec<String>,
    pub skills_match: SkillsBreakdown,
    pub salary_matches: bool,
    pub experience_matches: bool,
    pub location_match: bool,
    pub match_explanation: String,
    pub scored_by: ScoreSource,
    pub created_at: DateTime<Utc>,
}
