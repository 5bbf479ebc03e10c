// ABOUTME: Schemas and static catalogs for LLM-based evaluations
// ABOUTME: Validators for variable mappings and model output, plus object and column catalogs

pub mod catalog;
pub mod constants;
pub mod mapping;
pub mod objects;
pub mod output;
pub mod validation;

// Re-export main types
pub use catalog::{
    available_columns, eval_variable_source, find_column, ColumnDefinition, ColumnType,
    EvalVariableSource, AVAILABLE_EVAL_VARIABLES, OBSERVATION_COLUMNS, TRACE_COLUMNS,
};
pub use mapping::{VariableMapping, WipVariableMapping, OBJECT_NAME_REQUIRED_MESSAGE};
pub use objects::{EvalTargetObject, LangfuseObject};
pub use output::OutputSchema;

// Re-export constants
pub use constants::{default_trace_job_delay, DEFAULT_TRACE_JOB_DELAY};

// Re-export validation
pub use validation::{
    parse_string_enum, value_type, IssueKind, PathSegment, Schema, ValidationError,
    ValidationIssue,
};
