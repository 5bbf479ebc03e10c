// ABOUTME: Model presets and parameters for running evaluations
// ABOUTME: JSON-backed preset registry with the closed set of eval model names

pub mod registry;
pub mod types;

pub use registry::{EvalModelPreset, EvalModelRegistry, RegistryError, REGISTRY};
pub use types::{EvalModelName, ModelParam, ModelParams, ModelProvider, UIModelParams};
