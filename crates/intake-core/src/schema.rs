//! JSON Schema definitions for the structured output requested from the generator.

use serde_json::{Value, json};

/// An output schema handed to the generator alongside each instruction.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    name: &'static str,
    value: Value,
}

impl OutputSchema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Names listed under `required`.
    pub fn required_fields(&self) -> Vec<&str> {
        self.value["required"]
            .as_array()
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Names listed under `properties`.
    pub fn property_names(&self) -> Vec<&str> {
        self.value["properties"]
            .as_object()
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Pretty-printed schema, for embedding in prompts.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| self.value.to_string())
    }
}

/// Schema for [`LeadResult`](crate::LeadResult).
pub fn lead_result_schema() -> OutputSchema {
    OutputSchema {
        name: "ProcessLeadInquiryOutput",
        value: json!({
            "type": "object",
            "properties": {
                "leadId": {
                    "type": "string",
                    "description": "A unique identifier for the generated lead: \"LEAD-\" followed by 8 uppercase alphanumeric characters."
                },
                "confirmationMessage": {
                    "type": "string",
                    "description": "A message confirming the lead submission to the user."
                },
                "nextSteps": {
                    "type": "string",
                    "description": "Suggested next steps for the user."
                }
            },
            "required": ["leadId", "confirmationMessage"],
            "additionalProperties": false
        }),
    }
}

/// Schema for [`QuestionResult`](crate::QuestionResult).
pub fn question_result_schema() -> OutputSchema {
    OutputSchema {
        name: "SubmitQuestionOutput",
        value: json!({
            "type": "object",
            "properties": {
                "submissionId": {
                    "type": "string",
                    "description": "A unique identifier for the submitted question: \"SUB-\" followed by 8 uppercase alphanumeric characters."
                },
                "confirmationMessage": {
                    "type": "string",
                    "description": "A message confirming the submission to the user."
                }
            },
            "required": ["submissionId", "confirmationMessage"],
            "additionalProperties": false
        }),
    }
}
