//! Answer Source Port - supplies answers to signalling questions.
//!
//! The engine never presents questions itself. A handler asks the sequencer
//! for the next question code and hands the question to an `AnswerSource`,
//! which may prompt a reviewer, read a pre-filled sheet, or replay a script.

use thiserror::Error;

use crate::domain::foundation::{Answer, AssessmentError, Question};
use crate::domain::instrument::DomainDescriptor;

/// Port for answering one signalling question at a time.
///
/// # Contract
///
/// Implementations must:
/// - Return an answer the question accepts, or an error
/// - Not assume any particular question order
///
/// The assessment handler checks every returned answer against the question
/// before recording it; `NotApplicable` on a question that does not accept
/// it fails the run with `InvalidAnswer`.
pub trait AnswerSource: Send + Sync {
    /// Answers `question` for `domain`.
    fn answer(
        &self,
        domain: &DomainDescriptor,
        question: &Question,
    ) -> Result<Answer, AnswerSourceError>;
}

/// Errors an answer source can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerSourceError {
    #[error("No answer available for question {question} in {domain}")]
    NoAnswer { domain: String, question: String },

    #[error(transparent)]
    Invalid(#[from] AssessmentError),

    #[error("Answer source failed: {0}")]
    Other(String),
}

impl AnswerSourceError {
    pub fn no_answer(domain: &DomainDescriptor, question: &Question) -> Self {
        AnswerSourceError::NoAnswer {
            domain: domain.slug().to_string(),
            question: question.code.to_string(),
        }
    }
}
