//! AnswerState - the answers collected so far for one domain of one study.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Answer, AssessmentError};

/// Question code → answer map for one domain assessment.
///
/// A code that is absent is *unset*: not yet collected, or skipped by a gate.
/// Entries are only ever recorded or overwritten, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerState {
    answers: BTreeMap<String, Answer>,
}

impl AnswerState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AnswerState::record`].
    pub fn with(mut self, question: impl Into<String>, answer: Answer) -> Self {
        self.record(question, answer);
        self
    }

    /// Records an answer, returning the value it replaced.
    pub fn record(&mut self, question: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.answers.insert(question.into(), answer)
    }

    /// Records an answer given as an instrument code (`Y`, `PY`, `NI`, `PN`, `N`, `NA`).
    ///
    /// Fails with `InvalidAnswer` and leaves the state untouched if the code is
    /// not on the answer scale.
    pub fn record_code(
        &mut self,
        question: impl Into<String>,
        raw: &str,
    ) -> Result<Option<Answer>, AssessmentError> {
        let question = question.into();
        match Answer::from_code(raw) {
            Some(answer) => Ok(self.record(question, answer)),
            None => Err(AssessmentError::invalid_answer(
                question,
                format!("'{}' is not an answer code", raw),
            )),
        }
    }

    /// Returns the answer for a question, or `None` when unset.
    pub fn get(&self, question: &str) -> Option<Answer> {
        self.answers.get(question).copied()
    }

    /// Returns true if the question has an answer.
    pub fn is_set(&self, question: &str) -> bool {
        self.answers.contains_key(question)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates answered questions in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Answer)> {
        self.answers.iter().map(|(code, answer)| (code.as_str(), *answer))
    }
}

impl<K: Into<String>> FromIterator<(K, Answer)> for AnswerState {
    fn from_iter<I: IntoIterator<Item = (K, Answer)>>(iter: I) -> Self {
        let mut state = AnswerState::new();
        for (question, answer) in iter {
            state.record(question, answer);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = AnswerState::new();
        assert!(state.is_empty());
        assert_eq!(state.get("1.1"), None);
        assert!(!state.is_set("1.1"));
    }

    #[test]
    fn record_returns_previous_answer() {
        let mut state = AnswerState::new();
        assert_eq!(state.record("1.1", Answer::Yes), None);
        assert_eq!(state.record("1.1", Answer::No), Some(Answer::Yes));
        assert_eq!(state.get("1.1"), Some(Answer::No));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn record_code_parses_instrument_codes() {
        let mut state = AnswerState::new();
        state.record_code("3.1", "py").unwrap();
        assert_eq!(state.get("3.1"), Some(Answer::ProbablyYes));
    }

    #[test]
    fn record_code_rejects_values_outside_the_scale() {
        let mut state = AnswerState::new();
        let err = state.record_code("3.1", "sometimes").unwrap_err();
        assert_eq!(
            err,
            AssessmentError::invalid_answer("3.1", "'sometimes' is not an answer code")
        );
        assert!(state.is_empty());
    }

    #[test]
    fn iter_is_ordered_by_code() {
        let state: AnswerState = [("1.3", Answer::No), ("1.1", Answer::Yes)]
            .into_iter()
            .collect();
        let codes: Vec<&str> = state.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["1.1", "1.3"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let state = AnswerState::new()
            .with("5.1", Answer::No)
            .with("5.2", Answer::ProbablyYes);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"5.1":"N","5.2":"PY"}"#);

        let back: AnswerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
