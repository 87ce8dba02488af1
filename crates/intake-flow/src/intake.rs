//! The intake orchestrator shared by both forms.
//!
//! Each submission moves through [`Stage::Validating`], [`Stage::Generating`]
//! and [`Stage::Resolved`]. Only validation can fail outward; once a request
//! is valid the caller always gets a result.

use intake_ai::{Adapter, Generator};
use intake_core::{
    Identified, LeadInquiry, LeadResult, QuestionResult, QuestionSubmission, SubmissionRequest,
    SubmissionResult, ValidationError,
};
use serde::Serialize;
use tracing::{Instrument, debug, info, info_span};

use crate::fallback::{Synthesize, repair_identifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Generating,
    Resolved,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Generating => "generating",
            Self::Resolved => "resolved",
        }
    }
}

/// Which path produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Generator output used unchanged.
    Generated,
    /// Generator output kept, identifier replaced.
    IdentifierRepaired,
    /// Generator gave nothing usable; fallback template used.
    Synthesized,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::IdentifierRepaired => "identifier-repaired",
            Self::Synthesized => "synthesized",
        }
    }
}

/// A resolved submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub result: T,
    pub resolution: Resolution,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            result: f(self.result),
            resolution: self.resolution,
        }
    }
}

/// Runs submissions against a generator.
///
/// Holds no per-submission state; share it behind an `Arc` to serve
/// concurrent submissions.
pub struct Intake<G> {
    adapter: Adapter<G>,
}

impl<G: Generator> Intake<G> {
    pub fn new(generator: G) -> Self {
        Self {
            adapter: Adapter::new(generator),
        }
    }

    pub fn generator(&self) -> &G {
        self.adapter.generator()
    }

    /// Process a lead inquiry from the course quiz.
    pub async fn submit_lead(
        &self,
        request: LeadInquiry,
    ) -> Result<Outcome<LeadResult>, ValidationError> {
        let span = info_span!("intake", kind = "lead");
        async {
            debug!(stage = Stage::Validating.as_str());
            let valid = request.validate().inspect_err(log_rejection)?;
            Ok(self.resolve(valid).await)
        }
        .instrument(span)
        .await
    }

    /// Process a community question submission.
    pub async fn submit_question(
        &self,
        request: QuestionSubmission,
    ) -> Result<Outcome<QuestionResult>, ValidationError> {
        let span = info_span!("intake", kind = "question");
        async {
            debug!(stage = Stage::Validating.as_str());
            let valid = request.validate().inspect_err(log_rejection)?;
            Ok(self.resolve(valid).await)
        }
        .instrument(span)
        .await
    }

    /// Process either kind of submission.
    pub async fn submit(
        &self,
        request: SubmissionRequest,
    ) -> Result<Outcome<SubmissionResult>, ValidationError> {
        match request {
            SubmissionRequest::Lead(lead) => Ok(self.submit_lead(lead).await?.map(Into::into)),
            SubmissionRequest::Question(q) => Ok(self.submit_question(q).await?.map(Into::into)),
        }
    }

    async fn resolve<R: Synthesize + Serialize>(&self, valid: R) -> Outcome<R::Output> {
        // Submissions are logged, not stored.
        info!(
            submission = %serde_json::to_string(&valid).unwrap_or_default(),
            "submission received"
        );

        debug!(stage = Stage::Generating.as_str());
        let (result, resolution) = match self.adapter.generate(&valid).await {
            Some(mut output) => {
                if repair_identifier(&mut output) {
                    (output, Resolution::IdentifierRepaired)
                } else {
                    (output, Resolution::Generated)
                }
            }
            None => (valid.synthesize(), Resolution::Synthesized),
        };

        info!(
            stage = Stage::Resolved.as_str(),
            id = result.identifier(),
            resolution = resolution.as_str(),
            "submission processed"
        );
        Outcome { result, resolution }
    }
}

fn log_rejection(e: &ValidationError) {
    info!(error = %e, "submission rejected");
}
