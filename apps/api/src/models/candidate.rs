use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::job::JobType;

/// Seniority ladder shared by candidates and job postings. Declaration order is the ordinal
/// used for experience-level distance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    pub fn ordinal(self) -> u32 {
        match self {
            ExperienceLevel::Entry => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
            ExperienceLevel::Executive => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRef {
    pub url: String,
    #[serde(default)]
    pub filename: String,
    pub uploaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(default)]
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub id: String,
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub level: Option<SkillLevel>,
    pub years_of_experience: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(default)]
    pub job_types: Vec<JobType>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary_expectation: Option<SalaryRange>,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub hybrid_work: bool,
}

/// Candidate profile as supplied by the profile store. Collections default to empty so that
/// partially filled profiles still deserialize and can be reported on by the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    pub resume: Option<ResumeRef>,
    #[serde(default)]
    pub preferences: JobPreferences,
    #[serde(default)]
    pub total_experience_years: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub current_experience_level: Option<ExperienceLevel>,
    #[serde(default = "default_true")]
    pub matching_enabled: bool,
    pub profile_completion_percentage: Option<u32>,
}

fn default_true() -> bool {
    true
}

/// Reads a field the validator reports on. A value of the wrong shape (an unknown level,
/// a negative salary) becomes `None` so it surfaces as a missing field.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl CandidateProfile {
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.name.as_str())
    }

    /// Minimum acceptable salary, or 0 when the candidate has not stated one.
    pub fn minimum_salary(&self) -> u64 {
        self.preferences
            .salary_expectation
            .as_ref()
            .map(|s| s.min)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sparse_profile_deserializes_with_defaults() {
        let profile: CandidateProfile = serde_json::from_value(json!({ "id": "c-1" })).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.resume.is_none());
        assert!(profile.matching_enabled);
        assert_eq!(profile.minimum_salary(), 0);
    }

    #[test]
    fn test_malformed_validated_fields_read_as_missing() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": "c-1",
            "current_experience_level": "principal",
            "preferences": {
                "salary_expectation": { "min": -5, "max": 90000, "currency": "USD" }
            }
        }))
        .unwrap();
        assert!(profile.current_experience_level.is_none());
        assert!(profile.preferences.salary_expectation.is_none());
    }

    #[test]
    fn test_known_experience_level_still_parses() {
        let profile: CandidateProfile = serde_json::from_value(json!({
            "id": "c-1",
            "current_experience_level": "senior"
        }))
        .unwrap();
        assert_eq!(profile.current_experience_level, Some(ExperienceLevel::Senior));
    }

    #[test]
    fn test_experience_level_ordinals_follow_ladder() {
        assert!(ExperienceLevel::Entry < ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::Executive.ordinal(), 3);
        assert_eq!(ExperienceLevel::Senior.as_str(), "senior");
    }
}
