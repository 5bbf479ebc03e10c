// ABOUTME: Observable object kinds and the evaluation target enum
// ABOUTME: Closed sets of trace-tree records that evals read from or run against

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::validation::{parse_string_enum, Schema, ValidationError};

/// Kind of observability record a template variable can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LangfuseObject {
    Trace,
    Span,
    Generation,
    Event,
}

impl LangfuseObject {
    pub const ALL: [LangfuseObject; 4] = [
        LangfuseObject::Trace,
        LangfuseObject::Span,
        LangfuseObject::Generation,
        LangfuseObject::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LangfuseObject::Trace => "trace",
            LangfuseObject::Span => "span",
            LangfuseObject::Generation => "generation",
            LangfuseObject::Event => "event",
        }
    }

    /// Child records of a trace; several may share a trace, so they are
    /// addressed by name
    pub fn is_observation(&self) -> bool {
        !matches!(self, LangfuseObject::Trace)
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|object| object.as_str()).collect()
    }
}

impl fmt::Display for LangfuseObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LangfuseObject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|object| object.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_enum(s, &Self::names()))
    }
}

impl Schema for LangfuseObject {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        parse_string_enum(value)
    }
}

/// Root object an evaluation job runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalTargetObject {
    Trace,
}

impl EvalTargetObject {
    pub const ALL: [EvalTargetObject; 1] = [EvalTargetObject::Trace];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvalTargetObject::Trace => "trace",
        }
    }

    /// Whether a record of kind `object` can be the root of a job for this target
    pub fn accepts(&self, object: LangfuseObject) -> bool {
        match self {
            EvalTargetObject::Trace => object == LangfuseObject::Trace,
        }
    }

    /// Target for a root object kind, if jobs may start from it
    pub fn for_object(object: LangfuseObject) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.accepts(object))
    }
}

impl fmt::Display for EvalTargetObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalTargetObject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(EvalTargetObject::Trace),
            other => Err(ValidationError::invalid_enum(other, &["trace"])),
        }
    }
}

impl Schema for EvalTargetObject {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        parse_string_enum(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_langfuse_object_order() {
        let names: Vec<&str> = LangfuseObject::ALL.iter().map(|o| o.as_str()).collect();
        assert_eq!(names, vec!["trace", "span", "generation", "event"]);
    }

    #[test]
    fn test_langfuse_object_serde_matches_as_str() {
        for object in LangfuseObject::ALL {
            let json = serde_json::to_value(object).unwrap();
            assert_eq!(json, json!(object.as_str()));
            assert_eq!(object.as_str().parse::<LangfuseObject>().unwrap(), object);
        }
    }

    #[test]
    fn test_langfuse_object_rejects_unknown() {
        let err = "Trace".parse::<LangfuseObject>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid enum value. Expected 'trace' | 'span' | 'generation' | 'event', received 'Trace'"
        );
    }

    #[test]
    fn test_langfuse_object_schema_rejects_non_string() {
        let err = LangfuseObject::parse(&json!(3)).unwrap_err();
        assert_eq!(err.to_string(), "Expected string, received number");
    }

    #[test]
    fn test_is_observation() {
        assert!(!LangfuseObject::Trace.is_observation());
        assert!(LangfuseObject::Span.is_observation());
        assert!(LangfuseObject::Generation.is_observation());
        assert!(LangfuseObject::Event.is_observation());
    }

    #[test]
    fn test_target_accepts_only_traces() {
        assert!(EvalTargetObject::Trace.accepts(LangfuseObject::Trace));
        assert!(!EvalTargetObject::Trace.accepts(LangfuseObject::Span));
        assert_eq!(
            EvalTargetObject::for_object(LangfuseObject::Trace),
            Some(EvalTargetObject::Trace)
        );
        assert_eq!(EvalTargetObject::for_object(LangfuseObject::Event), None);
    }

    #[test]
    fn test_target_round_trip() {
        assert_eq!(
            serde_json::to_string(&EvalTargetObject::Trace).unwrap(),
            "\"trace\""
        );
        assert!("span".parse::<EvalTargetObject>().is_err());
    }
}
