pub mod ident;
pub mod schema;
pub mod submission;
pub mod validate;

pub use ident::{IdKind, Identified};
pub use schema::OutputSchema;
pub use submission::{
    LeadInquiry, LeadResult, QuestionResult, QuestionSubmission, SubmissionRequest,
    SubmissionResult,
};
pub use validate::{ValidLeadInquiry, ValidQuestion, ValidRequest, ValidationError, validate};
