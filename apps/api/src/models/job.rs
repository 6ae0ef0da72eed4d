use serde::{Deserialize, Serialize};

use crate::models::candidate::{ExperienceLevel, SalaryRange};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub industry: Option<String>,
    pub size: Option<String>,
}

/// A job posting.
///
/// `actual_salary_min` / `actual_salary_max` are the employer's private band. They are
/// accepted on input for strict filtering and are never serialized, so no candidate-facing
/// payload can carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: CompanyInfo,
    #[serde(default)]
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<SalaryRange>,
    #[serde(default, skip_serializing)]
    pub actual_salary_min: Option<u64>,
    #[serde(default, skip_serializing)]
    pub actual_salary_max: Option<u64>,
    #[serde(default)]
    pub experience_min: f64,
    pub experience_max: Option<f64>,
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub matching_enabled: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_actual_salary_is_read_but_never_written() {
        let job: Job = serde_json::from_value(json!({
            "id": "j-1",
            "title": "Backend Engineer",
            "company": { "name": "Acme" },
            "job_type": "full-time",
            "salary": { "min": 80000, "max": 100000, "currency": "USD" },
            "actual_salary_min": 95000,
            "actual_salary_max": 120000
        }))
        .unwrap();

        assert_eq!(job.actual_salary_min, Some(95000));

        let out = serde_json::to_value(&job).unwrap();
        assert!(out.get("actual_salary_min").is_none());
        assert!(out.get("actual_salary_max").is_none());
        assert_eq!(out["salary"]["min"], 80000);
    }

    #[test]
    fn test_job_type_uses_kebab_case() {
        let t: JobType = serde_json::from_value(json!("part-time")).unwrap();
        assert_eq!(t, JobType::PartTime);
        assert_eq!(JobType::FullTime.as_str(), "full-time");
    }
}
