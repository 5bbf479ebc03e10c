// ABOUTME: Catalog of columns a template variable can be mapped onto
// ABOUTME: One entry per observable object kind, with query references per column

use serde::Serialize;

use crate::objects::LangfuseObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    /// Structured key/value metadata
    StringObject,
}

/// A selectable field on an observable object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub id: &'static str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub column_type: Option<ColumnType>,
    /// Quoted column reference with the table alias used when building queries
    pub internal: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalVariableSource {
    pub id: LangfuseObject,
    pub display: &'static str,
    pub available_columns: &'static [ColumnDefinition],
}

pub static TRACE_COLUMNS: [ColumnDefinition; 3] = [
    ColumnDefinition {
        name: "Metadata",
        id: "metadata",
        column_type: Some(ColumnType::StringObject),
        internal: r#"t."metadata""#,
    },
    ColumnDefinition {
        name: "Input",
        id: "input",
        column_type: None,
        internal: r#"t."input""#,
    },
    ColumnDefinition {
        name: "Output",
        id: "output",
        column_type: None,
        internal: r#"t."output""#,
    },
];

/// Shared by spans, generations and events
pub static OBSERVATION_COLUMNS: [ColumnDefinition; 3] = [
    ColumnDefinition {
        name: "Metadata",
        id: "metadata",
        column_type: Some(ColumnType::StringObject),
        internal: r#"o."metadata""#,
    },
    ColumnDefinition {
        name: "Input",
        id: "input",
        column_type: None,
        internal: r#"o."input""#,
    },
    ColumnDefinition {
        name: "Output",
        id: "output",
        column_type: None,
        internal: r#"o."output""#,
    },
];

/// Ordered as `LangfuseObject::ALL`
pub static AVAILABLE_EVAL_VARIABLES: [EvalVariableSource; 4] = [
    EvalVariableSource {
        id: LangfuseObject::Trace,
        display: "Trace",
        available_columns: &TRACE_COLUMNS,
    },
    EvalVariableSource {
        id: LangfuseObject::Span,
        display: "Span",
        available_columns: &OBSERVATION_COLUMNS,
    },
    EvalVariableSource {
        id: LangfuseObject::Generation,
        display: "Generation",
        available_columns: &OBSERVATION_COLUMNS,
    },
    EvalVariableSource {
        id: LangfuseObject::Event,
        display: "Event",
        available_columns: &OBSERVATION_COLUMNS,
    },
];

pub fn eval_variable_source(object: LangfuseObject) -> &'static EvalVariableSource {
    match object {
        LangfuseObject::Trace => &AVAILABLE_EVAL_VARIABLES[0],
        LangfuseObject::Span => &AVAILABLE_EVAL_VARIABLES[1],
        LangfuseObject::Generation => &AVAILABLE_EVAL_VARIABLES[2],
        LangfuseObject::Event => &AVAILABLE_EVAL_VARIABLES[3],
    }
}

pub fn available_columns(object: LangfuseObject) -> &'static [ColumnDefinition] {
    eval_variable_source(object).available_columns
}

pub fn find_column(object: LangfuseObject, column_id: &str) -> Option<&'static ColumnDefinition> {
    available_columns(object)
        .iter()
        .find(|column| column.id == column_id)
}
