//! Structured generator adapter: one attempt, a typed result or nothing.

use intake_core::schema::{lead_result_schema, question_result_schema};
use intake_core::{
    Identified, LeadResult, OutputSchema, QuestionResult, ValidLeadInquiry, ValidQuestion,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::prompt::{lead_instruction, question_instruction};
use crate::{Generator, Instruction};

/// A validated request that knows its instruction template and output type.
pub trait StructuredRequest: Sync {
    type Output: Identified + DeserializeOwned + Send;

    fn instruction(&self) -> Instruction;

    fn schema() -> OutputSchema;
}

impl StructuredRequest for ValidLeadInquiry {
    type Output = LeadResult;

    fn instruction(&self) -> Instruction {
        lead_instruction(self)
    }

    fn schema() -> OutputSchema {
        lead_result_schema()
    }
}

impl StructuredRequest for ValidQuestion {
    type Output = QuestionResult;

    fn instruction(&self) -> Instruction {
        question_instruction(self)
    }

    fn schema() -> OutputSchema {
        question_result_schema()
    }
}

/// Wraps a [`Generator`] and enforces the "structurally valid or nothing" contract.
///
/// Failures, timeouts, and values that do not deserialize into the output
/// type all come back as `None`. Semantic checks on the identifier are left
/// to the caller.
pub struct Adapter<G> {
    generator: G,
}

impl<G: Generator> Adapter<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub async fn generate<R: StructuredRequest>(&self, request: &R) -> Option<R::Output> {
        let instruction = request.instruction();
        let schema = R::schema();

        let value = match self.generator.generate(&instruction, &schema).await {
            Ok(value) => value,
            Err(e) => {
                warn!(template = instruction.name, error = %e, "generation failed");
                return None;
            }
        };

        match serde_json::from_value::<R::Output>(value) {
            Ok(output) => {
                debug!(
                    template = instruction.name,
                    id = output.identifier(),
                    "generator returned structured output"
                );
                Some(output)
            }
            Err(e) => {
                warn!(
                    template = instruction.name,
                    schema = schema.name(),
                    error = %e,
                    "generator output does not match schema"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedGenerator, Unavailable};
    use intake_core::{LeadInquiry, QuestionSubmission};
    use serde_json::json;

    fn lead() -> ValidLeadInquiry {
        LeadInquiry {
            delivery_preference: "online".into(),
            state: "SA".into(),
            provider_name: "Adelaide Property School".into(),
            inquiry: "When is the next intake?".into(),
        }
        .validate()
        .unwrap()
    }

    fn question() -> ValidQuestion {
        QuestionSubmission {
            question: "Do I need a police check?".into(),
            context: None,
            email: "lee@example.com".into(),
            category: Some("Licensing".into()),
            keywords: None,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn conforming_output_is_returned() {
        let adapter = Adapter::new(ScriptedGenerator::returning(json!({
            "leadId": "LEAD-7H3K9Q2M",
            "confirmationMessage": "Thanks for reaching out!",
            "nextSteps": "Read the guide."
        })));
        let out = adapter.generate(&lead()).await.unwrap();
        assert_eq!(out.lead_id, "LEAD-7H3K9Q2M");
        assert_eq!(out.next_steps.as_deref(), Some("Read the guide."));
    }

    #[tokio::test]
    async fn placeholder_is_passed_through_untouched() {
        let adapter = Adapter::new(ScriptedGenerator::returning(json!({
            "submissionId": "SUB-Q7M2X9K4",
            "confirmationMessage": "custom text"
        })));
        let out = adapter.generate(&question()).await.unwrap();
        assert_eq!(out.submission_id, "SUB-Q7M2X9K4");
    }

    #[tokio::test]
    async fn generator_failure_becomes_none() {
        let adapter = Adapter::new(Unavailable);
        assert!(adapter.generate(&lead()).await.is_none());
    }

    #[tokio::test]
    async fn schema_mismatch_becomes_none() {
        let adapter = Adapter::new(ScriptedGenerator::returning(json!({
            "confirmationMessage": "no id here"
        })));
        assert!(adapter.generate(&question()).await.is_none());

        let adapter = Adapter::new(ScriptedGenerator::returning(json!(null)));
        assert!(adapter.generate(&lead()).await.is_none());
    }

    #[tokio::test]
    async fn calls_generator_once_with_template() {
        let generator = ScriptedGenerator::failing("upstream 503");
        let adapter = Adapter::new(generator);
        assert!(adapter.generate(&lead()).await.is_none());
        assert_eq!(adapter.generator().calls(), 1);
        let ins = adapter.generator().last_instruction().unwrap();
        assert_eq!(ins.name, crate::prompt::LEAD_TEMPLATE_NAME);
        assert!(ins.text.contains("Adelaide Property School"));
    }
}
