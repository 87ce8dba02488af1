//! Instruction templates for the two intake forms.
//!
//! Each template interpolates every validated field, names the exact output
//! fields, and shows one example of the expected shape. The example
//! identifier is the kind's placeholder, so an echoed example is detectable.

use intake_core::{IdKind, ValidLeadInquiry, ValidQuestion};

use crate::Instruction;

/// Suggested follow-up shown with every lead confirmation.
pub const LEAD_NEXT_STEPS: &str = "While you wait for more information, feel free to explore our \
Comprehensive Guide or compare other providers on our site.";

pub const LEAD_TEMPLATE_NAME: &str = "processLeadInquiryPrompt";
pub const QUESTION_TEMPLATE_NAME: &str = "submitQuestionPrompt";

// ── Lead inquiry ──

pub fn lead_instruction(lead: &ValidLeadInquiry) -> Instruction {
    let text = format!(
        "You are an AI assistant for a CPP41419 Real Estate course information website.\n\
         A user has submitted an inquiry based on a quiz they took.\n\
         Their preferences:\n\
         - Delivery Method: {delivery}\n\
         - State: {state}\n\
         - Interested RTO: {provider}\n\
         - Their inquiry: \"{inquiry}\"\n\
         \n\
         Task:\n\
         1. Generate a unique lead ID: \"{prefix}\" followed by 8 random uppercase alphanumeric characters.\n\
         2. Create a friendly confirmation message for the user. Acknowledge their interest in the RTO \
         and their specific preferences. Mention that their inquiry (about costs, start dates, support etc.) \
         will be forwarded.\n\
         3. Suggest brief, helpful next steps, such as \"{next_steps}\"\n\
         \n\
         Respond with the fields leadId, confirmationMessage and nextSteps.\n\
         \n\
         Example Lead ID: {example_id}\n\
         Example Confirmation: \"Thanks for your interest in {provider} for {delivery} study in {state}! \
         We've noted your inquiry and will forward it. You'll hear back soon!\"",
        delivery = lead.delivery_preference(),
        state = lead.state(),
        provider = lead.provider_name(),
        inquiry = lead.inquiry(),
        prefix = IdKind::Lead.prefix(),
        next_steps = LEAD_NEXT_STEPS,
        example_id = IdKind::Lead.placeholder(),
    );
    Instruction {
        name: LEAD_TEMPLATE_NAME,
        text,
    }
}

// ── Question submission ──

pub fn question_instruction(q: &ValidQuestion) -> Instruction {
    let text = format!(
        "A user has submitted a new question for the CPP41419 Q&A website.\n\
         \n\
         User Email: {email}\n\
         Category: {category}\n\
         Question: \"{question}\"\n\
         Context: \"{context}\"\n\
         Keywords: \"{keywords}\"\n\
         \n\
         Task:\n\
         1. Generate a unique submission ID: \"{prefix}\" followed by 8 random uppercase alphanumeric characters.\n\
         2. Create a friendly confirmation message acknowledging receipt of their question. \
         Mention that they will be notified by email if their question is published.\n\
         \n\
         Respond with the fields submissionId and confirmationMessage.\n\
         \n\
         Example Submission ID: {example_id}",
        email = q.email(),
        category = q.category(),
        question = q.question(),
        context = q.context().unwrap_or_default(),
        keywords = q.keywords_raw().unwrap_or_default(),
        prefix = IdKind::Submission.prefix(),
        example_id = IdKind::Submission.placeholder(),
    );
    Instruction {
        name: QUESTION_TEMPLATE_NAME,
        text,
    }
}
