// ABOUTME: Runtime configuration for eval job scheduling and model selection
// ABOUTME: Reads environment overrides and falls back to the built-in defaults

pub mod constants;

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use evals_core::default_trace_job_delay;
use evals_models::{EvalModelName, REGISTRY};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalsConfig {
    /// Wait between a trace's creation and its evaluation
    pub trace_job_delay: Duration,
    /// Model preselected when an eval template is created
    pub default_model: EvalModelName,
}

impl Default for EvalsConfig {
    fn default() -> Self {
        Self {
            trace_job_delay: default_trace_job_delay(),
            default_model: default_model(),
        }
    }
}

fn default_model() -> EvalModelName {
    REGISTRY
        .default_preset()
        .map_or(EvalModelName::Gpt35Turbo, |preset| preset.name)
}

impl EvalsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build the config from any key lookup; unset or unparsable values
    /// keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(constants::EVALS_TRACE_JOB_DELAY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.trace_job_delay = Duration::from_millis(ms),
                Err(e) => warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {}, using default",
                    constants::EVALS_TRACE_JOB_DELAY_MS
                ),
            }
        }

        if let Some(raw) = lookup(constants::EVALS_DEFAULT_MODEL) {
            match raw.trim().parse::<EvalModelName>() {
                Ok(model) => config.default_model = model,
                Err(e) => warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {}, using default",
                    constants::EVALS_DEFAULT_MODEL
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = EvalsConfig::from_map(&HashMap::new());
        assert_eq!(config, EvalsConfig::default());
        assert_eq!(config.trace_job_delay, Duration::from_millis(10_000));
        assert_eq!(config.default_model, EvalModelName::Gpt35Turbo);
    }

    #[test]
    fn test_overrides() {
        let config = EvalsConfig::from_map(&vars(&[
            (constants::EVALS_TRACE_JOB_DELAY_MS, "2500"),
            (constants::EVALS_DEFAULT_MODEL, "gpt-4o"),
        ]));
        assert_eq!(config.trace_job_delay, Duration::from_millis(2500));
        assert_eq!(config.default_model, EvalModelName::Gpt4o);
    }

    #[rstest]
    #[case("ten seconds")]
    #[case("-5")]
    #[case("")]
    fn test_invalid_delay_falls_back(#[case] raw: &str) {
        let config = EvalsConfig::from_map(&vars(&[(constants::EVALS_TRACE_JOB_DELAY_MS, raw)]));
        assert_eq!(config.trace_job_delay, default_trace_job_delay());
    }

    #[test]
    fn test_unknown_model_falls_back() {
        let config = EvalsConfig::from_map(&vars(&[(constants::EVALS_DEFAULT_MODEL, "gpt-5")]));
        assert_eq!(config.default_model, EvalModelName::Gpt35Turbo);
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = EvalsConfig::from_map(&vars(&[
            (constants::EVALS_TRACE_JOB_DELAY_MS, " 0 "),
            (constants::EVALS_DEFAULT_MODEL, "gpt-4-turbo-preview\n"),
        ]));
        assert_eq!(config.trace_job_delay, Duration::ZERO);
        assert_eq!(config.default_model, EvalModelName::Gpt4TurboPreview);
    }
}
