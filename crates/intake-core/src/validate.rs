//! Input validation: the only way to obtain a request the generator may see.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::submission::{LeadInquiry, QuestionSubmission, SubmissionRequest};

/// Minimum question length, in characters.
pub const MIN_QUESTION_LEN: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("{field} must be at least {min} characters long (got {actual})")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("please enter a valid email address (got {value:?})")]
    InvalidEmail { value: String },
}

/// A lead inquiry whose four fields are all present.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ValidLeadInquiry(LeadInquiry);

impl ValidLeadInquiry {
    pub fn delivery_preference(&self) -> &str {
        &self.0.delivery_preference
    }

    pub fn state(&self) -> &str {
        &self.0.state
    }

    pub fn provider_name(&self) -> &str {
        &self.0.provider_name
    }

    pub fn inquiry(&self) -> &str {
        &self.0.inquiry
    }
}

/// A question submission that passed every check.
///
/// Blank optional fields are normalized to `None`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidQuestion {
    question: String,
    context: Option<String>,
    email: String,
    category: String,
    keywords: Option<String>,
}

impl ValidQuestion {
    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The raw comma-separated keyword string, if any.
    pub fn keywords_raw(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    /// Keywords split on commas, trimmed, blanks dropped.
    pub fn keywords(&self) -> Vec<&str> {
        self.keywords
            .as_deref()
            .map(|k| {
                k.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A validated request of either kind.
#[derive(Debug, Clone)]
pub enum ValidRequest {
    Lead(ValidLeadInquiry),
    Question(ValidQuestion),
}

/// Validate any submission.
pub fn validate(request: SubmissionRequest) -> Result<ValidRequest, ValidationError> {
    match request {
        SubmissionRequest::Lead(lead) => lead.validate().map(ValidRequest::Lead),
        SubmissionRequest::Question(q) => q.validate().map(ValidRequest::Question),
    }
}

impl LeadInquiry {
    /// Reject the inquiry if any field is empty or whitespace-only.
    ///
    /// Fields are checked in form order; the first blank one is reported.
    pub fn validate(self) -> Result<ValidLeadInquiry, ValidationError> {
        require("deliveryPreference", &self.delivery_preference)?;
        require("state", &self.state)?;
        require("selectedRtoName", &self.provider_name)?;
        require("userInquiry", &self.inquiry)?;
        Ok(ValidLeadInquiry(self))
    }
}

impl QuestionSubmission {
    /// Check question length, email shape, then category presence.
    pub fn validate(self) -> Result<ValidQuestion, ValidationError> {
        let actual = self.question.chars().count();
        if actual < MIN_QUESTION_LEN {
            return Err(ValidationError::TooShort {
                field: "question",
                min: MIN_QUESTION_LEN,
                actual,
            });
        }

        if !is_email(&self.email) {
            return Err(ValidationError::InvalidEmail { value: self.email });
        }

        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Err(ValidationError::MissingField { field: "category" }),
        };

        Ok(ValidQuestion {
            question: self.question,
            context: non_blank(self.context),
            email: self.email,
            category,
            keywords: non_blank(self.keywords),
        })
    }
}

/// True if `value` has a `local@domain.tld` shape.
pub fn is_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    // The character class admits dots anywhere; the local part may not start,
    // end, or double them.
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_SHAPE.is_match(value)
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
