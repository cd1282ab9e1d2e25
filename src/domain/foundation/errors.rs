//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised by sequencers, evaluators and the domain registry.
///
/// Missing answers are never an error; they resolve to a judgement. Only
/// malformed input and unknown registry keys fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Invalid answer for question {question}: {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("Unknown domain '{0}'")]
    UnknownDomain(String),
}

impl AssessmentError {
    /// Creates an invalid answer error for a question slot.
    pub fn invalid_answer(question: impl Into<String>, reason: impl Into<String>) -> Self {
        AssessmentError::InvalidAnswer {
            question: question.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unknown domain error.
    pub fn unknown_domain(key: impl Into<String>) -> Self {
        AssessmentError::UnknownDomain(key.into())
    }

    /// Returns a stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AssessmentError::InvalidAnswer { .. } => "INVALID_ANSWER",
            AssessmentError::UnknownDomain(_) => "UNKNOWN_DOMAIN",
        }
    }
}
