//! Scripted Answer Source Adapter
//!
//! Replays pre-recorded answers per domain and records which questions were
//! asked. Useful for testing and for batch runs where answers are known up
//! front.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::{Answer, AnswerState, DomainKey, Question};
use crate::domain::instrument::DomainDescriptor;
use crate::ports::{AnswerSource, AnswerSourceError};

/// In-memory answer scripts keyed by domain
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswerSource {
    scripts: HashMap<DomainKey, AnswerState>,
    fallback: Option<Answer>,
    asked: Arc<Mutex<Vec<(DomainKey, String)>>>,
}

impl ScriptedAnswerSource {
    /// Create a source with no scripts
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that gives the same answer to every question
    pub fn uniform(answer: Answer) -> Self {
        Self {
            fallback: Some(answer),
            ..Self::default()
        }
    }

    /// Add the script for one domain, replacing any earlier one
    pub fn with_script(mut self, domain: DomainKey, answers: AnswerState) -> Self {
        self.scripts.insert(domain, answers);
        self
    }

    /// Questions asked so far, in order
    pub fn asked(&self) -> Vec<(DomainKey, String)> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Codes asked for one domain, in order
    pub fn asked_in(&self, domain: DomainKey) -> Vec<String> {
        self.asked()
            .into_iter()
            .filter(|(key, _)| *key == domain)
            .map(|(_, code)| code)
            .collect()
    }
}

impl AnswerSource for ScriptedAnswerSource {
    fn answer(
        &self,
        domain: &DomainDescriptor,
        question: &Question,
    ) -> Result<Answer, AnswerSourceError> {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((domain.key(), question.code.to_string()));

        self.scripts
            .get(&domain.key())
            .and_then(|script| script.get(question.code))
            .or(self.fallback)
            .ok_or_else(|| AnswerSourceError::no_answer(domain, question))
    }
}
