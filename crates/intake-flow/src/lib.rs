//! Intake orchestration: the validate → generate → resolve flow shared by the
//! lead and question forms.

mod fallback;
mod intake;

pub use fallback::{Synthesize, repair_identifier};
pub use intake::{Intake, Outcome, Resolution, Stage};
