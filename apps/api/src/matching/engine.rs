//! Matching run: validate the profile, then filter, score, threshold and rank each job.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::llm_client::CompletionClient;
use crate::matching::ai_scoring::{score_match, ScoringStrategy};
use crate::matching::assembler::assemble_match;
use crate::matching::config::MatchingConfig;
use crate::matching::strict_filter::apply_strict_filters;
use crate::matching::MatchingError;
use crate::models::candidate::CandidateProfile;
use crate::models::job::Job;
use crate::models::matching::JobMatch;
use crate::profile::validation::validate_for_matching;

const TOP_SKILLS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    Inactive,
    MatchingDisabled,
    StrictFilter { reasons: Vec<String> },
    BelowThreshold { score: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedJob {
    pub job_id: String,
    pub reason: ExclusionReason,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StrictFiltersApplied {
    pub salary_filter: bool,
    pub experience_filter: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingStats {
    pub total_jobs: usize,
    /// Jobs that were active, matching-enabled and passed the strict filter.
    pub eligible_jobs: usize,
    pub matched_jobs: usize,
    pub average_match_percentage: f64,
    pub top_skills: Vec<String>,
    pub strict_filters_applied: StrictFiltersApplied,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRun {
    pub run_id: Uuid,
    pub matches: Vec<JobMatch>,
    pub excluded: Vec<ExcludedJob>,
    pub stats: MatchingStats,
}

/// Entry point for matching. Holds an immutable config and, when a credential is
/// configured, the completion client used for AI-assisted scoring.
#[derive(Clone)]
pub struct JobMatcher {
    config: MatchingConfig,
    completion: Option<Arc<dyn CompletionClient>>,
}

impl JobMatcher {
    pub fn new(
        config: MatchingConfig,
        completion: Option<Arc<dyn CompletionClient>>,
    ) -> Result<Self, MatchingError> {
        config.validate()?;
        Ok(Self { config, completion })
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Same completion client, different config.
    pub fn with_config(&self, config: MatchingConfig) -> Result<Self, MatchingError> {
        Self::new(config, self.completion.clone())
    }

    /// Matches sorted by score descending. Fails before looking at any job when the profile
    /// lacks resume, salary expectation or experience data.
    ///
    /// Library entry point for callers that only want the ranked list; the HTTP handler uses
    /// [`JobMatcher::run`] for the diagnostics that come with it.
    #[allow(dead_code)]
    pub async fn find_matching_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: &[Job],
    ) -> Result<Vec<JobMatch>, MatchingError> {
        Ok(self.run(candidate, jobs).await?.matches)
    }

    /// Full run including exclusion diagnostics and summary stats.
    pub async fn run(
        &self,
        candidate: &CandidateProfile,
        jobs: &[Job],
    ) -> Result<MatchRun, MatchingError> {
        let validation = validate_for_matching(candidate);
        if !validation.is_valid {
            return Err(MatchingError::IncompleteProfile {
                missing_fields: validation
                    .missing_fields
                    .into_iter()
                    .filter(|f| is_mandatory_field(f))
                    .collect(),
            });
        }
        if !candidate.matching_enabled {
            return Err(MatchingError::MatchingDisabled);
        }

        let run_id = Uuid::new_v4();
        let config = &self.config;
        let strategy = ScoringStrategy::select(config, self.completion.as_deref());

        let mut scored: Vec<(usize, JobMatch)> = Vec::new();
        let mut excluded = Vec::new();
        let mut eligible_jobs = 0;

        for (position, job) in jobs.iter().enumerate() {
            if !job.is_active {
                excluded.push(exclude(job, ExclusionReason::Inactive));
                continue;
            }
            if !job.matching_enabled {
                excluded.push(exclude(job, ExclusionReason::MatchingDisabled));
                continue;
            }

            let filter_result = apply_strict_filters(candidate, job, config);
            if !filter_result.passes_filters {
                debug!(
                    %run_id,
                    job_id = %job.id,
                    reasons = ?filter_result.filter_reasons,
                    "Job excluded by strict filter"
                );
                excluded.push(exclude(
                    job,
                    ExclusionReason::StrictFilter {
                        reasons: filter_result.filter_reasons,
                    },
                ));
                continue;
            }
            eligible_jobs += 1;

            let (score, source) = score_match(&strategy, candidate, job, config).await;
            if score < config.minimum_match_threshold {
                debug!(%run_id, job_id = %job.id, score, "Job below match threshold");
                excluded.push(exclude(job, ExclusionReason::BelowThreshold { score }));
                continue;
            }

            let job_match = assemble_match(
                candidate,
                job,
                score,
                source,
                &filter_result,
                &config.calibration,
            );
            scored.push((position, job_match));
        }

        scored.sort_by(|(pa, a), (pb, b)| rank_order(a, *pa, b, *pb));
        let matches: Vec<JobMatch> = scored.into_iter().map(|(_, m)| m).collect();

        let stats = build_stats(candidate, jobs.len(), eligible_jobs, &matches, config);

        info!(
            %run_id,
            candidate_id = %candidate.id,
            strategy = strategy.label(),
            total_jobs = stats.total_jobs,
            matched_jobs = stats.matched_jobs,
            "Matching run complete"
        );

        Ok(MatchRun {
            run_id,
            matches,
            excluded,
            stats,
        })
    }
}

fn is_mandatory_field(field: &str) -> bool {
    matches!(field, "resume" | "salary_expectation" | "experience_years")
}

fn exclude(job: &Job, reason: ExclusionReason) -> ExcludedJob {
    ExcludedJob {
        job_id: job.id.clone(),
        reason,
    }
}

/// Score descending, then job id ascending, then input position.
fn rank_order(a: &JobMatch, pos_a: usize, b: &JobMatch, pos_b: usize) -> Ordering {
    b.match_percentage
        .cmp(&a.match_percentage)
        .then_with(|| a.job.id.cmp(&b.job.id))
        .then_with(|| pos_a.cmp(&pos_b))
}

fn build_stats(
    candidate: &CandidateProfile,
    total_jobs: usize,
    eligible_jobs: usize,
    matches: &[JobMatch],
    config: &MatchingConfig,
) -> MatchingStats {
    let average_match_percentage = if matches.is_empty() {
        0.0
    } else {
        matches
            .iter()
            .map(|m| m.match_percentage as f64)
            .sum::<f64>()
            / matches.len() as f64
    };

    MatchingStats {
        total_jobs,
        eligible_jobs,
        matched_jobs: matches.len(),
        average_match_percentage,
        top_skills: candidate
            .skill_names()
            .take(TOP_SKILLS_LIMIT)
            .map(str::to_string)
            .collect(),
        strict_filters_applied: StrictFiltersApplied {
            salary_filter: config.salary_filter_active(),
            experience_filter: config.experience_filter_active(),
        },
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ai_scoring::stubs::StubCompletion;
    use crate::matching::scoring::rule_based_score;
    use crate::matching::strict_filter::fixtures::job;
    use crate::models::candidate::{ExperienceLevel, SalaryRange};
    use crate::models::job::JobType;
    use crate::profile::validation::fixtures::{complete_profile, with_skills};

    fn rule_based_matcher(config: MatchingConfig) -> JobMatcher {
        JobMatcher::new(config, None).unwrap()
    }

    fn candidate() -> CandidateProfile {
        with_skills(complete_profile(), &["React", "TypeScript"])
    }

    #[tokio::test]
    async fn test_incomplete_profile_is_rejected_before_any_job() {
        let stub = Arc::new(StubCompletion::replying("95"));
        let client: Arc<dyn CompletionClient> = stub.clone();
        let matcher = JobMatcher::new(MatchingConfig::default(), Some(client)).unwrap();
        let mut c = candidate();
        c.resume = None;
        c.location = String::new();

        let err = matcher
            .find_matching_jobs(&c, &[job("j-1", &["React"])])
            .await
            .unwrap_err();

        match err {
            MatchingError::IncompleteProfile { missing_fields } => {
                assert_eq!(missing_fields, vec!["resume"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_candidate_with_matching_off_is_rejected() {
        let mut c = candidate();
        c.matching_enabled = false;
        let err = rule_based_matcher(MatchingConfig::default())
            .find_matching_jobs(&c, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, MatchingError::MatchingDisabled));
    }

    #[tokio::test]
    async fn test_salary_floor_excludes_job_regardless_of_score() {
        let mut c = candidate();
        c.preferences.salary_expectation = Some(SalaryRange {
            min: 1_000_000,
            max: 1_200_000,
            currency: "USD".to_string(),
        });
        c.total_experience_years = 4.0;

        let mut j = job("j-1", &["React", "TypeScript"]);
        j.actual_salary_min = Some(900_000);
        j.experience_min = 2.0;

        let run = rule_based_matcher(MatchingConfig {
            minimum_match_threshold: 0,
            ..Default::default()
        })
        .run(&c, &[j])
        .await
        .unwrap();

        assert!(run.matches.is_empty());
        assert!(matches!(
            run.excluded[0].reason,
            ExclusionReason::StrictFilter { .. }
        ));
        assert_eq!(run.stats.eligible_jobs, 0);
    }

    #[tokio::test]
    async fn test_experience_floor_excludes_job() {
        let mut c = candidate();
        c.total_experience_years = 1.0;
        let mut j = job("j-1", &[]);
        j.experience_min = 3.0;

        let matches = rule_based_matcher(MatchingConfig::default())
            .find_matching_jobs(&c, &[j])
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_inactive_and_disabled_jobs_are_skipped() {
        let mut inactive = job("j-1", &[]);
        inactive.is_active = false;
        let mut disabled = job("j-2", &[]);
        disabled.matching_enabled = false;

        let run = rule_based_matcher(MatchingConfig::default())
            .run(&candidate(), &[inactive, disabled])
            .await
            .unwrap();

        assert!(run.matches.is_empty());
        assert_eq!(run.excluded[0].reason, ExclusionReason::Inactive);
        assert_eq!(run.excluded[1].reason, ExclusionReason::MatchingDisabled);
        assert_eq!(run.stats.total_jobs, 2);
    }

    #[tokio::test]
    async fn test_results_respect_threshold_and_sort_descending() {
        let c = candidate();

        let perfect = job("j-perfect", &["React", "TypeScript"]); // 98
        let partial = job("j-partial", &["React", "TypeScript", "Node.js"]); // 85
        let mut weak = job("j-weak", &["Rust", "Go"]); // 52
        weak.location = "Tokyo".to_string();

        let run = rule_based_matcher(MatchingConfig::default())
            .run(&c, &[weak, partial, perfect])
            .await
            .unwrap();

        let scores: Vec<u32> = run.matches.iter().map(|m| m.match_percentage).collect();
        assert_eq!(scores, vec![98, 85]);
        assert!(scores.iter().all(|s| *s >= 70));
        assert_eq!(run.matches[0].job.id, "j-perfect");
        assert_eq!(
            run.excluded[0].reason,
            ExclusionReason::BelowThreshold { score: 52 }
        );
        assert_eq!(run.stats.eligible_jobs, 3);
        assert_eq!(run.stats.matched_jobs, 2);
        assert!((run.stats.average_match_percentage - 91.5).abs() < 1e-9);
        assert_eq!(run.stats.top_skills, vec!["React", "TypeScript"]);
    }

    #[tokio::test]
    async fn test_equal_scores_are_ordered_by_job_id() {
        let c = candidate();
        let jobs = vec![
            job("j-c", &["React"]),
            job("j-a", &["React"]),
            job("j-b", &["React"]),
        ];

        let matches = rule_based_matcher(MatchingConfig::default())
            .find_matching_jobs(&c, &jobs)
            .await
            .unwrap();

        let ids: Vec<&str> = matches.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, vec!["j-a", "j-b", "j-c"]);
    }

    #[tokio::test]
    async fn test_ai_failure_matches_rule_based_and_does_not_propagate() {
        let c = candidate();
        let jobs = vec![job("j-1", &["React", "TypeScript", "Node.js"])];
        let config = MatchingConfig {
            minimum_match_threshold: 0,
            ..Default::default()
        };

        let failing = Arc::new(StubCompletion::failing("connection reset"));
        let client: Arc<dyn CompletionClient> = failing.clone();
        let matcher = JobMatcher::new(config.clone(), Some(client)).unwrap();
        let matches = matcher.find_matching_jobs(&c, &jobs).await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].match_percentage,
            rule_based_score(&c, &jobs[0], &config.calibration)
        );
        assert_eq!(failing.call_count(), 1);
    }

    #[tokio::test]
    async fn test_ai_scores_are_thresholded_like_rule_based() {
        let c = candidate();
        let jobs = vec![job("j-1", &["React"]), job("j-2", &["React"])];

        let stub = Arc::new(StubCompletion::replying("55 - partial fit"));
        let client: Arc<dyn CompletionClient> = stub.clone();
        let matcher = JobMatcher::new(MatchingConfig::default(), Some(client)).unwrap();
        let run = matcher.run(&c, &jobs).await.unwrap();

        assert!(run.matches.is_empty());
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn test_ai_disabled_never_calls_client() {
        let stub = Arc::new(StubCompletion::replying("99"));
        let matcher = JobMatcher::new(
            MatchingConfig {
                ai_matching_enabled: false,
                ..Default::default()
            },
            Some(stub.clone() as Arc<dyn CompletionClient>),
        )
        .unwrap();

        let mut c = candidate();
        c.current_experience_level = Some(ExperienceLevel::Mid);
        c.preferences.job_types = vec![JobType::FullTime];
        let matches = matcher
            .find_matching_jobs(&c, &[job("j-1", &["React"])])
            .await
            .unwrap();

        assert_eq!(matches[0].match_percentage, 98);
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let result = JobMatcher::new(
            MatchingConfig {
                minimum_match_threshold: 150,
                ..Default::default()
            },
            None,
        );
        assert!(matches!(result, Err(MatchingError::InvalidConfig(_))));
    }

    #[test]
    fn test_stats_reflect_filter_switches() {
        let config = MatchingConfig {
            enable_strict_filters: false,
            ..Default::default()
        };
        let stats = build_stats(&candidate(), 0, 0, &[], &config);
        assert_eq!(stats.average_match_percentage, 0.0);
        assert!(!stats.strict_filters_applied.salary_filter);
        assert!(!stats.strict_filters_applied.experience_filter);
    }
}
