// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of the environment variables read by the evals config

// Job Scheduling
pub const EVALS_TRACE_JOB_DELAY_MS: &str = "EVALS_TRACE_JOB_DELAY_MS";

// Model Selection
pub const EVALS_DEFAULT_MODEL: &str = "EVALS_DEFAULT_MODEL";
