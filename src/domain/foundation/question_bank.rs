//! Question banks: the fixed, ordered signalling questions of a domain.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Answer, AnswerState, AssessmentError};

/// One signalling question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub code: &'static str,
    pub prompt: &'static str,
    pub allows_not_applicable: bool,
}

impl Question {
    pub const fn new(code: &'static str, prompt: &'static str) -> Self {
        Self {
            code,
            prompt,
            allows_not_applicable: false,
        }
    }

    /// Marks the question as accepting `NA`.
    pub const fn allowing_not_applicable(mut self) -> Self {
        self.allows_not_applicable = true;
        self
    }

    /// Returns true if the answer is acceptable for this question.
    pub fn accepts(&self, answer: Answer) -> bool {
        answer.is_on_scale() || self.allows_not_applicable
    }
}

/// Ordered mapping of question code to prompt text.
///
/// Banks are `'static` constants owned by their domain module and shared by
/// every assessment.
#[derive(Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    /// Looks up a question by code.
    pub fn get(&self, code: &str) -> Option<&'static Question> {
        let questions: &'static [Question] = self.questions;
        questions.iter().find(|q| q.code == code)
    }

    /// Returns the prompt text for a code.
    pub fn prompt(&self, code: &str) -> Option<&'static str> {
        self.get(code).map(|q| q.prompt)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Question codes in instrument order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        let questions: &'static [Question] = self.questions;
        questions.iter().map(|q| q.code)
    }

    /// Questions in instrument order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        let questions: &'static [Question] = self.questions;
        questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks every recorded answer against this bank.
    ///
    /// Fails on the first answer recorded for a code the bank does not define,
    /// or on `NA` for a question that does not accept it.
    pub fn validate(&self, state: &AnswerState) -> Result<(), AssessmentError> {
        for (code, answer) in state.iter() {
            let question = self.get(code).ok_or_else(|| {
                AssessmentError::invalid_answer(code, "question is not part of this domain")
            })?;
            if !question.accepts(answer) {
                return Err(AssessmentError::invalid_answer(
                    code,
                    format!("'{}' is not accepted for this question", answer.code()),
                ));
            }
        }
        Ok(())
    }
}

impl Serialize for QuestionBank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.questions.len()))?;
        for question in self.questions {
            map.serialize_entry(question.code, question.prompt)?;
        }
        map.end()
    }
}
