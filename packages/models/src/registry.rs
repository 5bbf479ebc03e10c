// ABOUTME: Registry of model presets offered for running evaluations
// ABOUTME: Loads the embedded JSON presets once and provides ordered lookup

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

use evals_core::ValidationError;

use super::types::{EvalModelName, ModelProvider, UIModelParams};

/// Global preset registry, loaded from the embedded JSON on first use
pub static REGISTRY: LazyLock<EvalModelRegistry> = LazyLock::new(|| {
    EvalModelRegistry::new().unwrap_or_else(|e| {
        panic!(
            "FATAL: Failed to load eval model presets. \
             Check config/eval_models.json: {}",
            e
        )
    })
});

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to parse eval model presets: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid preset {index}: {source}")]
    InvalidPreset {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Duplicate preset for model {0}")]
    DuplicatePreset(EvalModelName),
}

/// Container for the presets JSON file
#[derive(Debug, Deserialize)]
struct EvalModelsConfig {
    version: String,
    presets: Vec<UIModelParams>,
}

/// A preset whose model is known to be an eval model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalModelPreset {
    #[serde(skip)]
    pub name: EvalModelName,
    #[serde(flatten)]
    pub params: UIModelParams,
}

#[derive(Debug)]
pub struct EvalModelRegistry {
    version: String,
    presets: Vec<EvalModelPreset>,
}

impl EvalModelRegistry {
    /// Create a registry from the presets embedded at compile time
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_json(include_str!("../config/eval_models.json"))
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let config: EvalModelsConfig = serde_json::from_str(json)?;

        let mut presets: Vec<EvalModelPreset> = Vec::with_capacity(config.presets.len());
        for (index, params) in config.presets.into_iter().enumerate() {
            let name = params
                .eval_model_name()
                .map_err(|source| RegistryError::InvalidPreset {
                    index,
                    source: source.prefixed("value").prefixed("model"),
                })?;
            if presets.iter().any(|preset| preset.name == name) {
                return Err(RegistryError::DuplicatePreset(name));
            }
            presets.push(EvalModelPreset { name, params });
        }

        debug!(
            version = %config.version,
            count = presets.len(),
            "Loaded eval model presets"
        );

        Ok(Self {
            version: config.version,
            presets,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All presets, in file order
    pub fn list_presets(&self) -> &[EvalModelPreset] {
        &self.presets
    }

    pub fn get_preset(&self, name: EvalModelName) -> Option<&EvalModelPreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// The first preset, used when nothing else was chosen
    pub fn default_preset(&self) -> Option<&EvalModelPreset> {
        self.presets.first()
    }

    pub fn presets_by_provider(&self, provider: ModelProvider) -> Vec<&EvalModelPreset> {
        self.presets
            .iter()
            .filter(|preset| preset.params.provider.value == provider)
            .collect()
    }

    pub fn model_names(&self) -> Vec<EvalModelName> {
        self.presets.iter().map(|preset| preset.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_json(model: &str) -> String {
        format!(
            r#"{{
                "provider": {{ "value": "openai", "enabled": true }},
                "model": {{ "value": "{}", "enabled": true }},
                "temperature": {{ "value": 0, "enabled": false }},
                "maxTemperature": {{ "value": 2, "enabled": true }},
                "max_tokens": {{ "value": 100, "enabled": true }},
                "top_p": {{ "value": 1, "enabled": false }}
            }}"#,
            model
        )
    }

    #[test]
    fn test_from_json_rejects_unknown_model() {
        let json = format!(
            r#"{{ "version": "test", "presets": [{}] }}"#,
            preset_json("gpt-2")
        );
        let err = EvalModelRegistry::from_json(&json).unwrap_err();
        match err {
            RegistryError::InvalidPreset { index, source } => {
                assert_eq!(index, 0);
                assert_eq!(source.issues()[0].path_string(), "model.value");
            }
            other => panic!("Expected InvalidPreset, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = format!(
            r#"{{ "version": "test", "presets": [{}, {}] }}"#,
            preset_json("gpt-4o"),
            preset_json("gpt-4o")
        );
        assert!(matches!(
            EvalModelRegistry::from_json(&json),
            Err(RegistryError::DuplicatePreset(EvalModelName::Gpt4o))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed_file() {
        assert!(matches!(
            EvalModelRegistry::from_json(r#"{ "version": "test" }"#),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn test_from_json_single_preset() {
        let json = format!(
            r#"{{ "version": "test", "presets": [{}] }}"#,
            preset_json("gpt-4-turbo-preview")
        );
        let registry = EvalModelRegistry::from_json(&json).unwrap();
        assert_eq!(registry.version(), "test");
        assert_eq!(registry.model_names(), vec![EvalModelName::Gpt4TurboPreview]);
        assert!(registry.get_preset(EvalModelName::Gpt4o).is_none());
    }
}
