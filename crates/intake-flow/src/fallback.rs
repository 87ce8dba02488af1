//! Fallback synthesis: a valid result without the generator.

use intake_ai::StructuredRequest;
use intake_ai::prompt::LEAD_NEXT_STEPS;
use intake_core::{Identified, LeadResult, QuestionResult, ValidLeadInquiry, ValidQuestion};
use rand::Rng;
use tracing::warn;

/// Deterministic confirmation for a validated request.
///
/// Only the identifier suffix is random; the message is a fixed template over
/// the request's own fields.
pub trait Synthesize: StructuredRequest {
    fn synthesize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

    fn synthesize(&self) -> Self::Output {
        self.synthesize_with(&mut rand::rng())
    }
}

impl Synthesize for ValidLeadInquiry {
    fn synthesize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> LeadResult {
        let lead_id = LeadResult::KIND.mint_with(rng);
        let confirmation_message = format!(
            "Thank you for your interest in {provider} for {delivery} study in {state}. \
             Your inquiry has been noted (ID: {lead_id}).",
            provider = self.provider_name(),
            delivery = self.delivery_preference(),
            state = self.state(),
        );
        LeadResult {
            lead_id,
            confirmation_message,
            next_steps: Some(LEAD_NEXT_STEPS.to_string()),
        }
    }
}

impl Synthesize for ValidQuestion {
    fn synthesize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> QuestionResult {
        QuestionResult {
            submission_id: QuestionResult::KIND.mint_with(rng),
            confirmation_message: format!(
                "Thank you for your submission! We've received your question and will review \
                 it shortly. You'll be notified at {email} if it's published.",
                email = self.email(),
            ),
        }
    }
}

/// Replace a generated identifier that is malformed or is the template's example.
///
/// Everything else in `output` is left as the generator wrote it. Returns true
/// if the identifier was replaced.
pub fn repair_identifier<T: Identified>(output: &mut T) -> bool {
    if !T::KIND.needs_repair(output.identifier()) {
        return false;
    }
    let fresh = T::KIND.mint();
    warn!(
        kind = T::KIND.as_str(),
        rejected = output.identifier(),
        replacement = %fresh,
        "generated identifier rejected"
    );
    output.set_identifier(fresh);
    true
}
