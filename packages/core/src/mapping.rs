// ABOUTME: Variable mappings between eval template variables and object columns
// ABOUTME: Strict mapping stored with eval templates, plus the looser editor draft

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{find_column, ColumnDefinition};
use crate::objects::LangfuseObject;
use crate::validation::{IssueKind, ObjectReader, PathSegment, Schema, ValidationError};

pub const OBJECT_NAME_REQUIRED_MESSAGE: &str =
    "objectName is required for langfuseObjects other than trace";

/// Mapping stored with an eval template
///
/// Deserializing runs the same checks as [`Schema::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct VariableMapping {
    /// Variable name in the template
    pub template_variable: String,
    /// Name of the observation to read from; traces are unique and need none
    pub object_name: Option<String>,
    pub langfuse_object: LangfuseObject,
    pub selected_column_id: String,
}

impl VariableMapping {
    /// Cross-field rule, checked once every field has the right shape.
    /// An empty name still counts as present.
    fn check_object_name(&self) -> Result<(), ValidationError> {
        if self.langfuse_object == LangfuseObject::Trace || self.object_name.is_some() {
            Ok(())
        } else {
            Err(ValidationError::custom(OBJECT_NAME_REQUIRED_MESSAGE))
        }
    }

    /// Catalog entry for the selected column
    pub fn column(&self) -> Result<&'static ColumnDefinition, ValidationError> {
        find_column(self.langfuse_object, &self.selected_column_id).ok_or_else(|| {
            ValidationError::single(
                vec![PathSegment::from("selectedColumnId")],
                IssueKind::Custom(format!(
                    "Unknown column '{}' for {}",
                    self.selected_column_id, self.langfuse_object
                )),
            )
        })
    }
}

impl Schema for VariableMapping {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = ObjectReader::new(value)?;
        let template_variable = reader.non_empty_string("templateVariable");
        let object_name = reader.nullish_string("objectName");
        let langfuse_object = reader.schema::<LangfuseObject>("langfuseObject");
        let selected_column_id = reader.string("selectedColumnId");

        let (
            Some(template_variable),
            Some(object_name),
            Some(langfuse_object),
            Some(selected_column_id),
        ) = (
            template_variable,
            object_name,
            langfuse_object,
            selected_column_id,
        )
        else {
            return Err(reader.into_error());
        };

        let mapping = Self {
            template_variable,
            object_name,
            langfuse_object,
            selected_column_id,
        };
        mapping.check_object_name()?;
        Ok(mapping)
    }
}

impl TryFrom<Value> for VariableMapping {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Partially filled mapping from the template editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct WipVariableMapping {
    pub template_variable: String,
    pub object_name: Option<String>,
    pub langfuse_object: LangfuseObject,
    pub selected_column_id: Option<String>,
}

impl WipVariableMapping {
    /// Promote the draft to a stored mapping, applying the strict rules
    pub fn finalize(&self) -> Result<VariableMapping, ValidationError> {
        let selected_column_id = self.selected_column_id.clone().ok_or_else(|| {
            ValidationError::single(
                vec![PathSegment::from("selectedColumnId")],
                IssueKind::Required,
            )
        })?;

        let mapping = VariableMapping {
            template_variable: self.template_variable.clone(),
            object_name: self.object_name.clone(),
            langfuse_object: self.langfuse_object,
            selected_column_id,
        };
        mapping.check_object_name()?;
        Ok(mapping)
    }
}

impl Schema for WipVariableMapping {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = ObjectReader::new(value)?;
        let template_variable = reader.non_empty_string("templateVariable");
        let object_name = reader.nullish_string("objectName");
        let langfuse_object = reader.schema::<LangfuseObject>("langfuseObject");
        let selected_column_id = reader.nullish_string("selectedColumnId");

        let (
            Some(template_variable),
            Some(object_name),
            Some(langfuse_object),
            Some(selected_column_id),
        ) = (
            template_variable,
            object_name,
            langfuse_object,
            selected_column_id,
        )
        else {
            return Err(reader.into_error());
        };

        Ok(Self {
            template_variable,
            object_name,
            langfuse_object,
            selected_column_id,
        })
    }
}

impl TryFrom<Value> for WipVariableMapping {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VariableMapping> for WipVariableMapping {
    fn from(mapping: VariableMapping) -> Self {
        Self {
            template_variable: mapping.template_variable,
            object_name: mapping.object_name,
            langfuse_object: mapping.langfuse_object,
            selected_column_id: Some(mapping.selected_column_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_refinement_skipped_when_shape_is_invalid() {
        let err = VariableMapping::parse(&json!({
            "templateVariable": "q",
            "langfuseObject": "span",
        }))
        .unwrap_err();

        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.issues()[0].path_string(), "selectedColumnId");
    }

    #[test]
    fn test_column_resolves_alias_per_object() {
        let trace = VariableMapping {
            template_variable: "q".to_string(),
            object_name: None,
            langfuse_object: LangfuseObject::Trace,
            selected_column_id: "output".to_string(),
        };
        assert_eq!(trace.column().unwrap().internal, r#"t."output""#);

        let span = VariableMapping {
            object_name: Some("retriever".to_string()),
            langfuse_object: LangfuseObject::Span,
            ..trace
        };
        assert_eq!(span.column().unwrap().internal, r#"o."output""#);
    }

    #[test]
    fn test_column_rejects_unknown_id() {
        let mapping = VariableMapping {
            template_variable: "q".to_string(),
            object_name: None,
            langfuse_object: LangfuseObject::Trace,
            selected_column_id: "latency".to_string(),
        };
        let err = mapping.column().unwrap_err();
        assert_eq!(
            err.to_string(),
            "selectedColumnId: Unknown column 'latency' for trace"
        );
    }

    #[test]
    fn test_finalize_requires_column() {
        let draft = WipVariableMapping {
            template_variable: "q".to_string(),
            object_name: None,
            langfuse_object: LangfuseObject::Trace,
            selected_column_id: None,
        };
        let err = draft.finalize().unwrap_err();
        assert_eq!(err.to_string(), "selectedColumnId: Required");
    }

    #[test]
    fn test_finalize_applies_object_name_rule() {
        let draft = WipVariableMapping {
            template_variable: "q".to_string(),
            object_name: None,
            langfuse_object: LangfuseObject::Event,
            selected_column_id: Some("input".to_string()),
        };
        let err = draft.finalize().unwrap_err();
        assert_eq!(err.to_string(), OBJECT_NAME_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_stored_mapping_reopens_as_draft() {
        let mapping = VariableMapping {
            template_variable: "q".to_string(),
            object_name: Some("llm-call".to_string()),
            langfuse_object: LangfuseObject::Generation,
            selected_column_id: "input".to_string(),
        };
        let draft = WipVariableMapping::from(mapping.clone());
        assert_eq!(draft.finalize().unwrap(), mapping);
    }
}
