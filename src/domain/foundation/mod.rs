//! Foundation module - Shared domain primitives.
//!
//! Contains the response scale, answer groupings, answer state, question
//! banks, judgements, domain keys and error types that form the vocabulary of
//! the assessment engine.

mod answer;
mod answer_group;
mod answer_state;
mod domain_key;
mod errors;
mod judgement;
mod question_bank;

pub use answer::Answer;
pub use answer_group::{AnswerGroup, AFFIRMATIVE, NEGATIVE, NOT_APPLICABLE, UNKNOWN};
pub use answer_state::AnswerState;
pub use domain_key::DomainKey;
pub use errors::AssessmentError;
pub use judgement::Judgement;
pub use question_bank::{Question, QuestionBank};
