//! Human-readable rendering of intake outcomes.

use std::fmt::Write;

use intake_core::SubmissionResult;
use intake_flow::Outcome;

// ── Public API ──

/// Print a resolved submission as a vertical card.
pub fn print_outcome_card(outcome: &Outcome<SubmissionResult>) {
    print!("{}", render_outcome_card(outcome));
}

/// Print a resolved submission as pretty JSON.
pub fn print_outcome_json(outcome: &Outcome<SubmissionResult>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&outcome.result)?);
    Ok(())
}

pub fn render_outcome_card(outcome: &Outcome<SubmissionResult>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", outcome.result.identifier());
    let _ = writeln!(out);

    let kind = match &outcome.result {
        SubmissionResult::Lead(_) => "lead inquiry",
        SubmissionResult::Question(_) => "question",
    };
    row(&mut out, "type", kind);
    row(&mut out, "resolved via", outcome.resolution.as_str());
    let _ = writeln!(out);

    section(&mut out, "Confirmation", outcome.result.confirmation_message());
    if let SubmissionResult::Lead(lead) = &outcome.result
        && let Some(next) = &lead.next_steps
    {
        section(&mut out, "Next Steps", next);
    }
    out
}

// ── Helpers ──

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<14} {}", label, value);
}

fn section(out: &mut String, header: &str, body: &str) {
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "  {body}");
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::{LeadResult, QuestionResult};
    use intake_flow::Resolution;

    #[test]
    fn lead_card_has_next_steps() {
        let outcome = Outcome {
            result: SubmissionResult::Lead(LeadResult {
                lead_id: "LEAD-ABCD1234".into(),
                confirmation_message: "Thanks!".into(),
                next_steps: Some("Read the guide.".into()),
            }),
            resolution: Resolution::Synthesized,
        };
        let card = render_outcome_card(&outcome);
        assert!(card.starts_with("=== LEAD-ABCD1234 ===\n"));
        assert!(card.contains("  type           lead inquiry\n"));
        assert!(card.contains("  resolved via   synthesized\n"));
        assert!(card.contains("Confirmation\n  Thanks!\n"));
        assert!(card.contains("Next Steps\n  Read the guide.\n"));
    }

    #[test]
    fn question_card_has_no_next_steps() {
        let outcome = Outcome {
            result: SubmissionResult::Question(QuestionResult {
                submission_id: "SUB-ABCD1234".into(),
                confirmation_message: "Received.".into(),
            }),
            resolution: Resolution::Generated,
        };
        let card = render_outcome_card(&outcome);
        assert!(card.contains("  type           question\n"));
        assert!(!card.contains("Next Steps"));
    }
}
