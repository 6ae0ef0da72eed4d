use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;
use crate::matching::config::MatchingConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Absent key disables AI-assisted scoring regardless of `MATCHING_AI_ENABLED`.
    pub openai_api_key: Option<String>,
    pub openai_api_url: String,
    pub matching: MatchingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = MatchingConfig::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_api_url: optional_env("OPENAI_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            matching: MatchingConfig {
                minimum_match_threshold: parse_env(
                    "MATCHING_MIN_THRESHOLD",
                    defaults.minimum_match_threshold,
                )?,
                enable_strict_filters: parse_env(
                    "MATCHING_STRICT_FILTERS",
                    defaults.enable_strict_filters,
                )?,
                salary_filter_enabled: parse_env(
                    "MATCHING_SALARY_FILTER",
                    defaults.salary_filter_enabled,
                )?,
                experience_filter_enabled: parse_env(
                    "MATCHING_EXPERIENCE_FILTER",
                    defaults.experience_filter_enabled,
                )?,
                ai_matching_enabled: parse_env("MATCHING_AI_ENABLED", defaults.ai_matching_enabled)?,
                calibration: defaults.calibration,
            },
        })
    }
}

/// Unset or blank variables count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u32 = parse_env("NEXJOB_TEST_UNSET_THRESHOLD", 70).unwrap();
        assert_eq!(value, 70);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("NEXJOB_TEST_BAD_FLAG", "maybe");
        let result: Result<bool> = parse_env("NEXJOB_TEST_BAD_FLAG", true);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("NEXJOB_TEST_BAD_FLAG"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("NEXJOB_TEST_THRESHOLD", " 55 ");
        let value: u32 = parse_env("NEXJOB_TEST_THRESHOLD", 70).unwrap();
        assert_eq!(value, 55);
    }
}
