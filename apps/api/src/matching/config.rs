use serde::{Deserialize, Serialize};

use crate::matching::MatchingError;

/// Heuristic constants of the rule-based scorer that are placeholders rather than business
/// rules. Kept together so they can be tuned without touching the formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringCalibration {
    /// Location sub-score when the job is neither remote nor in the candidate's location.
    pub location_partial_credit: f64,
    /// Education sub-score when the candidate lists any education.
    pub education_present: f64,
    /// Education sub-score when the candidate lists none.
    pub education_absent: f64,
}

impl Default for ScoringCalibration {
    fn default() -> Self {
        Self {
            location_partial_credit: 60.0,
            education_present: 80.0,
            education_absent: 60.0,
        }
    }
}

/// Settings for one matching run. Built once and never mutated; use
/// [`MatchingConfig::with_overrides`] to derive a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchingConfig {
    pub minimum_match_threshold: u32,
    pub enable_strict_filters: bool,
    pub salary_filter_enabled: bool,
    pub experience_filter_enabled: bool,
    pub ai_matching_enabled: bool,
    pub calibration: ScoringCalibration,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            minimum_match_threshold: 70,
            enable_strict_filters: true,
            salary_filter_enabled: true,
            experience_filter_enabled: true,
            ai_matching_enabled: true,
            calibration: ScoringCalibration::default(),
        }
    }
}

/// Caller-supplied partial configuration, merged over a base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfigOverrides {
    pub minimum_match_threshold: Option<u32>,
    pub enable_strict_filters: Option<bool>,
    pub salary_filter_enabled: Option<bool>,
    pub experience_filter_enabled: Option<bool>,
    pub ai_matching_enabled: Option<bool>,
    pub calibration: Option<ScoringCalibration>,
}

impl MatchingConfig {
    pub fn with_overrides(&self, overrides: &MatchingConfigOverrides) -> Self {
        Self {
            minimum_match_threshold: overrides
                .minimum_match_threshold
                .unwrap_or(self.minimum_match_threshold),
            enable_strict_filters: overrides
                .enable_strict_filters
                .unwrap_or(self.enable_strict_filters),
            salary_filter_enabled: overrides
                .salary_filter_enabled
                .unwrap_or(self.salary_filter_enabled),
            experience_filter_enabled: overrides
                .experience_filter_enabled
                .unwrap_or(self.experience_filter_enabled),
            ai_matching_enabled: overrides
                .ai_matching_enabled
                .unwrap_or(self.ai_matching_enabled),
            calibration: overrides.calibration.unwrap_or(self.calibration),
        }
    }

    pub fn salary_filter_active(&self) -> bool {
        self.enable_strict_filters && self.salary_filter_enabled
    }

    pub fn experience_filter_active(&self) -> bool {
        self.enable_strict_filters && self.experience_filter_enabled
    }

    pub fn validate(&self) -> Result<(), MatchingError> {
        if self.minimum_match_threshold > 100 {
            return Err(MatchingError::InvalidConfig(format!(
                "minimum_match_threshold must be within 0-100, got {}",
                self.minimum_match_threshold
            )));
        }

        let c = &self.calibration;
        for (name, value) in [
            ("location_partial_credit", c.location_partial_credit),
            ("education_present", c.education_present),
            ("education_absent", c.education_absent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(MatchingError::InvalidConfig(format!(
                    "calibration.{name} must be within 0-100, got {value}"
                )));
            }
        }

        Ok(())
    }
}
