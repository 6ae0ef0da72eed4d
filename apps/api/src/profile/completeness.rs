use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateProfile;
use crate::profile::validation::{
    has_experience_data, has_resume, has_salary_expectation, has_skills, meets_minimum_requirements,
    validate_for_matching, ProfileValidationResult,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileCompletionStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub is_required: bool,
    pub weight: u32,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCompletionStatus {
    #[serde(flatten)]
    pub validation: ProfileValidationResult,
    pub next_action: Option<ProfileCompletionStep>,
    pub suggestions: Vec<String>,
    pub steps: Vec<ProfileCompletionStep>,
    pub can_view_recommendations: bool,
}

struct ChecklistItem {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    is_required: bool,
    weight: u32,
    action: &'static str,
    check: fn(&CandidateProfile) -> bool,
}

const MIN_SUMMARY_CHARS: usize = 50;

/// Profile checklist in display order. Weights sum to 100.
const CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "basic_info",
        title: "Basic Information",
        description: "Complete your name, headline, and summary",
        is_required: true,
        weight: 15,
        action: "Update your profile basics",
        check: has_basic_info,
    },
    ChecklistItem {
        id: "resume_upload",
        title: "Resume Upload",
        description: "Upload your resume - required for all candidates",
        is_required: true,
        weight: 25,
        action: "Upload your resume",
        check: has_resume,
    },
    ChecklistItem {
        id: "salary_expectation",
        title: "Salary Expectations",
        description: "Set your expected salary range for accurate job matching",
        is_required: true,
        weight: 20,
        action: "Add salary expectations",
        check: has_salary_expectation,
    },
    ChecklistItem {
        id: "experience_years",
        title: "Experience Details",
        description: "Specify your total years of experience and current level",
        is_required: true,
        weight: 15,
        action: "Update experience information",
        check: has_experience_data,
    },
    ChecklistItem {
        id: "skills",
        title: "Skills & Expertise",
        description: "Add your key skills and proficiency levels",
        is_required: false,
        weight: 10,
        action: "Add your skills",
        check: has_skills,
    },
    ChecklistItem {
        id: "work_experience",
        title: "Work Experience",
        description: "Add your previous work experience and achievements",
        is_required: false,
        weight: 10,
        action: "Add work experience",
        check: has_work_history,
    },
    ChecklistItem {
        id: "education",
        title: "Education",
        description: "Include your educational background",
        is_required: false,
        weight: 10,
        action: "Add education details",
        check: has_education,
    },
    ChecklistItem {
        id: "preferences",
        title: "Job Preferences",
        description: "Set your job type and location preferences",
        is_required: false,
        weight: 5,
        action: "Set job preferences",
        check: has_job_preferences,
    },
];

fn has_basic_info(profile: &CandidateProfile) -> bool {
    !profile.first_name.trim().is_empty()
        && !profile.last_name.trim().is_empty()
        && !profile.headline.trim().is_empty()
        && profile.summary.trim().chars().count() >= MIN_SUMMARY_CHARS
}

fn has_work_history(profile: &CandidateProfile) -> bool {
    !profile.experience.is_empty()
}

fn has_education(profile: &CandidateProfile) -> bool {
    !profile.education.is_empty()
}

fn has_job_preferences(profile: &CandidateProfile) -> bool {
    !profile.preferences.job_types.is_empty() && !profile.preferences.locations.is_empty()
}

pub fn completion_steps(profile: &CandidateProfile) -> Vec<ProfileCompletionStep> {
    CHECKLIST
        .iter()
        .map(|item| ProfileCompletionStep {
            id: item.id.to_string(),
            title: item.title.to_string(),
            description: item.description.to_string(),
            is_completed: (item.check)(profile),
            is_required: item.is_required,
            weight: item.weight,
            action: item.action.to_string(),
        })
        .collect()
}

/// Weighted share of completed checklist steps, rounded to the nearest percent.
pub fn completion_percentage(profile: &CandidateProfile) -> u32 {
    percentage_of(&completion_steps(profile))
}

fn percentage_of(steps: &[ProfileCompletionStep]) -> u32 {
    let total: u32 = steps.iter().map(|s| s.weight).sum();
    if total == 0 {
        return 0;
    }
    let completed: u32 = steps
        .iter()
        .filter(|s| s.is_completed)
        .map(|s| s.weight)
        .sum();
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// First incomplete required step in checklist order; otherwise the heaviest incomplete
/// optional step (earlier steps win ties).
pub fn next_recommended_action(profile: &CandidateProfile) -> Option<ProfileCompletionStep> {
    let steps = completion_steps(profile);

    if let Some(step) = steps.iter().find(|s| s.is_required && !s.is_completed) {
        return Some(step.clone());
    }

    steps
        .iter()
        .filter(|s| !s.is_required && !s.is_completed)
        .fold(None::<&ProfileCompletionStep>, |best, s| match best {
            Some(b) if b.weight >= s.weight => Some(b),
            _ => Some(s),
        })
        .cloned()
}

pub fn improvement_suggestions(profile: &CandidateProfile) -> Vec<String> {
    let validation = validate_for_matching(profile);
    let prereqs = &validation.required_for_matching;
    let mut suggestions = Vec::new();

    if !prereqs.has_resume {
        suggestions.push("REQUIRED: Upload your resume - mandatory for all candidates".to_string());
    }
    if !prereqs.has_salary_expectation {
        suggestions.push(
            "Add your salary expectations to unlock personalized job recommendations".to_string(),
        );
    }
    if !prereqs.has_experience_data {
        suggestions.push("Update your experience details to improve matching accuracy".to_string());
    }
    if !prereqs.has_skills || profile.skills.len() < 5 {
        suggestions
            .push("Add more skills to your profile to increase job match opportunities".to_string());
    }
    if profile.experience.is_empty() {
        suggestions
            .push("Add your work experience to showcase your background to employers".to_string());
    }
    if profile.education.is_empty() {
        suggestions
            .push("Include your education to complete your professional profile".to_string());
    }
    if validation.completion_percentage < 80 {
        suggestions.push("Complete your profile to increase visibility to recruiters".to_string());
    }

    suggestions
}

pub fn completion_status(profile: &CandidateProfile) -> ProfileCompletionStatus {
    let validation = validate_for_matching(profile);
    let can_view_recommendations = meets_minimum_requirements(profile);

    ProfileCompletionStatus {
        next_action: next_recommended_action(profile),
        suggestions: improvement_suggestions(profile),
        steps: completion_steps(profile),
        can_view_recommendations,
        validation,
    }
}
