//! harbor-assessment
//!
//! The recovery self-assessment. Pure data and pure functions — no I/O.
//! Defines the question model, the default question bank, the weighted scoring
//! rules, the tier copy and program catalog, and the step-by-step flow
//! controller that drives a single questionnaire session.

pub mod bank;
pub mod error;
pub mod flow;
pub mod programs;
pub mod question;
pub mod scoring;
pub mod tiers;

pub use bank::default_bank;
pub use flow::{AssessmentFlow, FlowState, Step};
pub use question::{Question, QuestionBank, QuestionKind};
pub use scoring::calculate_result;
