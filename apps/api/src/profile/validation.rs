use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::profile::completeness::completion_percentage;

/// Which matching prerequisites the profile currently satisfies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchingPrerequisites {
    pub has_resume: bool,
    pub has_salary_expectation: bool,
    pub has_experience_data: bool,
    pub has_skills: bool,
    pub has_location: bool,
}

impl MatchingPrerequisites {
    /// Resume, salary expectation and experience data are mandatory; skills and location
    /// only improve match quality.
    pub fn mandatory_met(&self) -> bool {
        self.has_resume && self.has_salary_expectation && self.has_experience_data
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileValidationResult {
    pub is_valid: bool,
    pub completion_percentage: u32,
    pub missing_fields: Vec<String>,
    pub required_for_matching: MatchingPrerequisites,
    pub recommendations: Vec<String>,
}

const MIN_SKILLS_FOR_MATCHING: usize = 3;

pub fn has_resume(profile: &CandidateProfile) -> bool {
    profile
        .resume
        .as_ref()
        .is_some_and(|r| !r.url.trim().is_empty())
}

/// `0 < min <= max` with a currency set.
pub fn has_salary_expectation(profile: &CandidateProfile) -> bool {
    profile
        .preferences
        .salary_expectation
        .as_ref()
        .is_some_and(|s| s.min > 0 && s.min <= s.max && !s.currency.trim().is_empty())
}

/// Non-negative year count plus a recognized experience level.
pub fn has_experience_data(profile: &CandidateProfile) -> bool {
    profile.total_experience_years.is_finite()
        && profile.total_experience_years >= 0.0
        && profile.current_experience_level.is_some()
}

pub fn has_skills(profile: &CandidateProfile) -> bool {
    profile.skills.len() >= MIN_SKILLS_FOR_MATCHING
}

pub fn has_location(profile: &CandidateProfile) -> bool {
    !profile.location.trim().is_empty()
}

pub fn matching_prerequisites(profile: &CandidateProfile) -> MatchingPrerequisites {
    MatchingPrerequisites {
        has_resume: has_resume(profile),
        has_salary_expectation: has_salary_expectation(profile),
        has_experience_data: has_experience_data(profile),
        has_skills: has_skills(profile),
        has_location: has_location(profile),
    }
}

/// Checks whether a profile may take part in job matching and reports what is missing.
pub fn validate_for_matching(profile: &CandidateProfile) -> ProfileValidationResult {
    let prereqs = matching_prerequisites(profile);
    let mut missing_fields = Vec::new();
    let mut recommendations = Vec::new();

    let checks = [
        (
            prereqs.has_resume,
            "resume",
            "Upload your resume - required for all candidates",
        ),
        (
            prereqs.has_salary_expectation,
            "salary_expectation",
            "Add your salary expectations to see relevant job matches",
        ),
        (
            prereqs.has_experience_data,
            "experience_years",
            "Update your total years of experience for accurate matching",
        ),
        (
            prereqs.has_skills,
            "skills",
            "Add your key skills to improve job matching accuracy",
        ),
        (
            prereqs.has_location,
            "location",
            "Set your preferred location for location-based matching",
        ),
    ];

    for (present, field, recommendation) in checks {
        if !present {
            missing_fields.push(field.to_string());
            recommendations.push(recommendation.to_string());
        }
    }

    ProfileValidationResult {
        is_valid: prereqs.mandatory_met(),
        completion_percentage: completion_percentage(profile),
        missing_fields,
        required_for_matching: prereqs,
        recommendations,
    }
}

pub fn meets_minimum_requirements(profile: &CandidateProfile) -> bool {
    matching_prerequisites(profile).mandatory_met()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::candidate::{
        CandidateProfile, Education, ExperienceLevel, JobPreferences, ResumeRef, SalaryRange,
        Skill, WorkExperience,
    };
    use crate::models::job::JobType;

    fn skill(name: &str) -> Skill {
        Skill {
            id: String::new(),
            name: name.to_string(),
            level: None,
            years_of_experience: None,
        }
    }

    /// A profile that satisfies every checklist step.
    pub fn complete_profile() -> CandidateProfile {
        CandidateProfile {
            id: "cand-1".to_string(),
            user_id: "user-1".to_string(),
            first_name: "Sam".to_string(),
            last_name: "Rivera".to_string(),
            headline: "Frontend engineer".to_string(),
            summary: "Frontend engineer with a focus on accessible, well-tested React applications."
                .to_string(),
            location: "Berlin".to_string(),
            experience: vec![WorkExperience {
                id: "we-1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                location: "Berlin".to_string(),
                is_current: true,
                description: String::new(),
            }],
            education: vec![Education {
                id: "ed-1".to_string(),
                institution: "TU Berlin".to_string(),
                degree: "BSc".to_string(),
                field: "Computer Science".to_string(),
                grade: None,
            }],
            skills: vec![skill("React"), skill("TypeScript"), skill("CSS")],
            resume: Some(ResumeRef {
                url: "https://files.example.com/resume.pdf".to_string(),
                filename: "resume.pdf".to_string(),
                uploaded_at: None,
            }),
            preferences: JobPreferences {
                job_types: vec![JobType::FullTime],
                locations: vec!["Berlin".to_string()],
                salary_expectation: Some(SalaryRange {
                    min: 60_000,
                    max: 80_000,
                    currency: "EUR".to_string(),
                }),
                remote_work: true,
                hybrid_work: false,
            },
            total_experience_years: 4.0,
            current_experience_level: Some(ExperienceLevel::Mid),
            matching_enabled: true,
            profile_completion_percentage: None,
        }
    }

    pub fn with_skills(mut profile: CandidateProfile, names: &[&str]) -> CandidateProfile {
        profile.skills = names.iter().map(|n| skill(n)).collect();
        profile
    }
}
