// ABOUTME: Expected shape of an evaluation model's answer
// ABOUTME: Free-text reasoning plus a score kept as text for downstream parsing

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::validation::{ObjectReader, Schema, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct OutputSchema {
    pub reasoning: String,
    /// Not parsed here; interpretation belongs to the caller
    pub score: String,
}

impl OutputSchema {
    /// JSON schema handed to providers that support structured output
    pub fn json_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "reasoning": { "type": "string" },
                "score": { "type": "string" }
            },
            "required": ["reasoning", "score"],
            "additionalProperties": false
        })
    }
}

impl Schema for OutputSchema {
    fn parse(value: &Value) -> Result<Self, ValidationError> {
        let mut reader = ObjectReader::new(value)?;
        let reasoning = reader.string("reasoning");
        let score = reader.string("score");

        let (Some(reasoning), Some(score)) = (reasoning, score) else {
            return Err(reader.into_error());
        };
        Ok(Self { reasoning, score })
    }
}

impl TryFrom<Value> for OutputSchema {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
