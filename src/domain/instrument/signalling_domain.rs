//! SignallingDomain trait shared by every bias domain.

use serde::Serialize;

use crate::domain::evaluation::{Decision, RuleSummary};
use crate::domain::foundation::{AnswerState, DomainKey, QuestionBank};

/// What the sequencer wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "question", rename_all = "snake_case")]
pub enum NextQuestion {
    /// The question code that must be answered next.
    Ask(&'static str),
    /// Every question reachable under the current answers has a value.
    Done,
}

impl NextQuestion {
    /// Returns the question code, if any.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            NextQuestion::Ask(code) => Some(*code),
            NextQuestion::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, NextQuestion::Done)
    }
}

/// Trait that every bias domain implements.
///
/// Implementations are stateless and assume the state has already been
/// validated against their question bank. Only [`super::DomainDescriptor`]
/// calls them, after validation.
pub(crate) trait SignallingDomain: Send + Sync {
    /// Returns the registry key.
    fn key(&self) -> DomainKey;

    /// Returns the domain's question bank.
    fn questions(&self) -> &'static QuestionBank;

    /// Returns the next unanswered reachable question.
    fn next_question(&self, state: &AnswerState) -> NextQuestion;

    /// Applies the domain's rule table.
    fn evaluate(&self, state: &AnswerState) -> Decision;

    /// Ids of every rule whose predicate holds, in table order.
    fn matching_rules(&self, state: &AnswerState) -> Vec<&'static str>;

    /// Returns the rule table outline in evaluation order.
    fn rule_outline(&self) -> Vec<RuleSummary>;
}

/// Asks `code` when it has no value yet.
pub(crate) fn ask_if_unset(state: &AnswerState, code: &'static str) -> Option<NextQuestion> {
    (!state.is_set(code)).then_some(NextQuestion::Ask(code))
}

/// Asks the first unanswered code of an unconditional chain.
pub(crate) fn first_unset(state: &AnswerState, chain: &[&'static str]) -> NextQuestion {
    chain
        .iter()
        .find_map(|code| ask_if_unset(state, *code))
        .unwrap_or(NextQuestion::Done)
}
