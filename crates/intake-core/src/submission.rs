//! Request and result types exchanged with the website forms.
//!
//! Field names follow the camelCase shape the forms post and the generator
//! is asked to return.

use serde::{Deserialize, Serialize};

use crate::ident::{IdKind, Identified};

/// A provider inquiry submitted at the end of the course quiz.
///
/// Every field is required; absent fields deserialize as empty strings so the
/// validator can name them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadInquiry {
    /// Preferred delivery method (e.g. online, in-person).
    #[serde(default)]
    pub delivery_preference: String,
    #[serde(default)]
    pub state: String,
    /// Name of the training provider the user picked.
    #[serde(default, rename = "selectedRtoName")]
    pub provider_name: String,
    /// Free-text questions for the provider.
    #[serde(default, rename = "userInquiry")]
    pub inquiry: String,
}

/// A community question submitted through the Q&A form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSubmission {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Comma-separated keywords.
    #[serde(default)]
    pub keywords: Option<String>,
}

/// Any submission the intake accepts, tagged by form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmissionRequest {
    Lead(LeadInquiry),
    Question(QuestionSubmission),
}

/// Confirmation returned for a lead inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResult {
    pub lead_id: String,
    pub confirmation_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_steps: Option<String>,
}

/// Confirmation returned for a question submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub submission_id: String,
    pub confirmation_message: String,
}

/// Result of any submission, tagged the same way as [`SubmissionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SubmissionResult {
    Lead(LeadResult),
    Question(QuestionResult),
}

impl SubmissionResult {
    pub fn identifier(&self) -> &str {
        match self {
            Self::Lead(r) => r.identifier(),
            Self::Question(r) => r.identifier(),
        }
    }

    pub fn confirmation_message(&self) -> &str {
        match self {
            Self::Lead(r) => &r.confirmation_message,
            Self::Question(r) => &r.confirmation_message,
        }
    }
}

impl Identified for LeadResult {
    const KIND: IdKind = IdKind::Lead;

    fn identifier(&self) -> &str {
        &self.lead_id
    }

    fn set_identifier(&mut self, id: String) {
        self.lead_id = id;
    }
}

impl Identified for QuestionResult {
    const KIND: IdKind = IdKind::Submission;

    fn identifier(&self) -> &str {
        &self.submission_id
    }

    fn set_identifier(&mut self, id: String) {
        self.submission_id = id;
    }
}

impl From<LeadResult> for SubmissionResult {
    fn from(r: LeadResult) -> Self {
        Self::Lead(r)
    }
}

impl From<QuestionResult> for SubmissionResult {
    fn from(r: QuestionResult) -> Self {
        Self::Question(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_inquiry_reads_form_field_names() {
        let json = r#"{
            "deliveryPreference": "online",
            "state": "NSW",
            "selectedRtoName": "Harbour Real Estate Academy",
            "userInquiry": "What are the start dates?"
        }"#;
        let lead: LeadInquiry = serde_json::from_str(json).unwrap();
        assert_eq!(lead.provider_name, "Harbour Real Estate Academy");
        assert_eq!(lead.inquiry, "What are the start dates?");
    }

    #[test]
    fn missing_lead_fields_default_to_empty() {
        let lead: LeadInquiry = serde_json::from_str(r#"{"state": "VIC"}"#).unwrap();
        assert_eq!(lead.state, "VIC");
        assert!(lead.delivery_preference.is_empty());
        assert!(lead.provider_name.is_empty());
    }

    #[test]
    fn tagged_request_parses_question() {
        let json = r#"{
            "type": "question",
            "question": "How long does the course take?",
            "email": "sam@example.com",
            "category": "Course Structure"
        }"#;
        let req: SubmissionRequest = serde_json::from_str(json).unwrap();
        match req {
            SubmissionRequest::Question(q) => {
                assert_eq!(q.category.as_deref(), Some("Course Structure"));
                assert!(q.context.is_none());
                assert!(q.keywords.is_none());
            }
            other => panic!("expected question, got {other:?}"),
        }
    }

    #[test]
    fn lead_result_omits_absent_next_steps() {
        let result = LeadResult {
            lead_id: "LEAD-ZX81QW20".into(),
            confirmation_message: "Thanks!".into(),
            next_steps: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["leadId"], "LEAD-ZX81QW20");
        assert!(json.get("nextSteps").is_none());
    }

    #[test]
    fn result_identifier_dispatches_by_variant() {
        let result: SubmissionResult = QuestionResult {
            submission_id: "SUB-00000001".into(),
            confirmation_message: "Received".into(),
        }
        .into();
        assert_eq!(result.identifier(), "SUB-00000001");
        assert_eq!(result.confirmation_message(), "Received");
    }
}
