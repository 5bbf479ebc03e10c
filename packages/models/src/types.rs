// ABOUTME: Type definitions for evaluation model configuration
// ABOUTME: Providers, editable model parameters and the closed set of eval model names

use evals_core::{parse_string_enum, Schema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelProvider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl ModelProvider {
    pub const ALL: [ModelProvider; 2] = [ModelProvider::OpenAI, ModelProvider::Anthropic];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProvider::OpenAI => "openai",
            ModelProvider::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProvider {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_enum(s, &["openai", "anthropic"]))
    }
}

/// A parameter value and whether the UI lets the user edit it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParam<T> {
    pub value: T,
    pub enabled: bool,
}

impl<T> ModelParam<T> {
    pub fn new(value: T, enabled: bool) -> Self {
        Self { value, enabled }
    }

    /// The value, only if the parameter is switched on
    pub fn enabled_value(&self) -> Option<&T> {
        self.enabled.then_some(&self.value)
    }
}

/// Model configuration as edited in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UIModelParams {
    pub provider: ModelParam<ModelProvider>,
    pub model: ModelParam<String>,
    pub temperature: ModelParam<f64>,
    #[serde(rename = "maxTemperature")]
    pub max_temperature: ModelParam<f64>,
    pub max_tokens: ModelParam<u32>,
    pub top_p: ModelParam<f64>,
}

impl UIModelParams {
    /// Parameters for the provider call; disabled optional parameters are
    /// left to the provider's defaults
    pub fn to_model_params(&self) -> ModelParams {
        ModelParams {
            provider: self.provider.value,
            model: self.model.value.clone(),
            temperature: self.temperature.enabled_value().copied(),
            max_tokens: self.max_tokens.enabled_value().copied(),
            top_p: self.top_p.enabled_value().copied(),
        }
    }

    pub fn eval_model_name(&self) -> Result<EvalModelName, ValidationError> {
        self.model.value.parse()
    }
}

/// Resolved parameters sent with a model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub provider: ModelProvider,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// Models that may be chosen for an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvalModelName {
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4-turbo-preview")]
    Gpt4TurboPreview,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
}

impl EvalModelName {
    pub const ALL: [EvalModelName; 3] = [
        EvalModelName::Gpt35Turbo,
        EvalModelName::Gpt4TurboPreview,
        EvalModelName::Gpt4o,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvalModelName::Gpt35Turbo => "gpt-3.5-turbo",
            EvalModelName::Gpt4TurboPreview => "gpt-4-turbo-preview",
            EvalModelName::Gpt4o => "gpt-4o",
        }
    }
}

impl fmt::Display for EvalModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalModelName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_enum(s, &["gpt-3.5-turbo", "gpt-4-turbo-preview", "gpt-4o"])
            })
    }
}

impl Schema for EvalModelName {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        parse_string_enum(value)
    }
}
