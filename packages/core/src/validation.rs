// ABOUTME: Validation error model and the Schema trait for untrusted input
// ABOUTME: Path-tagged issues collected while reading serde_json values

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step in the path to an offending value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueKind {
    #[error("Expected {expected}, received {received}")]
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },

    #[error("Required")]
    Required,

    #[error("Invalid enum value. Expected {}, received '{received}'", quote_options(.options))]
    InvalidEnumValue {
        received: String,
        options: Vec<&'static str>,
    },

    #[error("String must contain at least {minimum} character(s)")]
    TooSmall { minimum: usize },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("{0}")]
    Custom(String),
}

fn quote_options(options: &[&'static str]) -> String {
    options
        .iter()
        .map(|option| format!("'{}'", option))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// A single failed check, located by its path from the validated root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: Vec<PathSegment>,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn new(path: Vec<PathSegment>, kind: IssueKind) -> Self {
        Self { path, kind }
    }

    /// Dotted rendering of the path, empty for the root
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path_string(), self.kind)
        }
    }
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationIssue", 2)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Rejection of a value that does not match a schema
///
/// Always carries at least one issue. Callers decide how to surface it;
/// nothing in this workspace logs or recovers from it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn single(path: Vec<PathSegment>, kind: IssueKind) -> Self {
        Self::new(vec![ValidationIssue::new(path, kind)])
    }

    pub fn invalid_type(expected: &'static str, received: &Value) -> Self {
        Self::single(
            Vec::new(),
            IssueKind::InvalidType {
                expected,
                received: value_type(received),
            },
        )
    }

    pub fn invalid_enum(received: &str, options: &[&'static str]) -> Self {
        Self::single(
            Vec::new(),
            IssueKind::InvalidEnumValue {
                received: received.to_string(),
                options: options.to_vec(),
            },
        )
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::single(Vec::new(), IssueKind::Custom(message.into()))
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }

    /// Re-root every issue under `segment`
    pub fn prefixed(mut self, segment: impl Into<PathSegment>) -> Self {
        let segment = segment.into();
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }

    /// First issue reported at exactly `path`
    pub fn issue_at(&self, path: &[PathSegment]) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.path == path)
    }
}

/// Name of a JSON value's type as used in issue messages
pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A type that can be validated out of an arbitrary JSON value
pub trait Schema: Sized {
    fn parse(value: &Value) -> Result<Self, ValidationError>;

    fn parse_str(json: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            ValidationError::single(Vec::new(), IssueKind::InvalidJson(e.to_string()))
        })?;
        Self::parse(&value)
    }

    /// Validate every element of an array independently and report the
    /// issues of all failing elements, each under its index.
    fn parse_list(value: &Value) -> Result<Vec<Self>, ValidationError> {
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::invalid_type("array", value))?;

        let mut parsed = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match Self::parse(item) {
                Ok(entry) => parsed.push(entry),
                Err(err) => issues.extend(err.prefixed(index).into_issues()),
            }
        }

        if issues.is_empty() {
            Ok(parsed)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

/// Parse a string-valued enum through its `FromStr` impl
pub fn parse_string_enum<T>(value: &Value) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    match value {
        Value::String(s) => s.parse(),
        other => Err(ValidationError::invalid_type("string", other)),
    }
}

/// Field-by-field reader over a JSON object
///
/// Each accessor returns `None` after recording an issue, so all broken
/// fields of one object are reported together. Keys not asked for are
/// ignored.
pub(crate) struct ObjectReader<'a> {
    fields: &'a Map<String, Value>,
    issues: Vec<ValidationIssue>,
}

impl<'a> ObjectReader<'a> {
    pub(crate) fn new(value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                issues: Vec::new(),
            }),
            other => Err(ValidationError::invalid_type("object", other)),
        }
    }

    fn push(&mut self, key: &str, kind: IssueKind) {
        self.issues
            .push(ValidationIssue::new(vec![PathSegment::from(key)], kind));
    }

    pub(crate) fn string(&mut self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.push(
                    key,
                    IssueKind::InvalidType {
                        expected: "string",
                        received: value_type(other),
                    },
                );
                None
            }
            None => {
                self.push(key, IssueKind::Required);
                None
            }
        }
    }

    pub(crate) fn non_empty_string(&mut self, key: &str) -> Option<String> {
        let s = self.string(key)?;
        if s.is_empty() {
            self.push(key, IssueKind::TooSmall { minimum: 1 });
            return None;
        }
        Some(s)
    }

    /// Absent and null both read as `Some(None)`
    pub(crate) fn nullish_string(&mut self, key: &str) -> Option<Option<String>> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Some(None),
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(other) => {
                self.push(
                    key,
                    IssueKind::InvalidType {
                        expected: "string",
                        received: value_type(other),
                    },
                );
                None
            }
        }
    }

    pub(crate) fn schema<T: Schema>(&mut self, key: &str) -> Option<T> {
        let Some(value) = self.fields.get(key) else {
            self.push(key, IssueKind::Required);
            return None;
        };
        match T::parse(value) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                self.issues.extend(err.prefixed(key).into_issues());
                None
            }
        }
    }

    /// Error for the issues collected so far
    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError::new(self.issues)
    }
}
