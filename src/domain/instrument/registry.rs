//! Domain descriptors and the process-wide domain registry.
//!
//! A `DomainDescriptor` binds a key, a title, a question bank, a sequencer and
//! a rule table behind one interface. The descriptor is the validating entry
//! point: answers are checked against the bank before any sequencing or
//! evaluation happens, so the domain implementations never see foreign codes
//! or disallowed `NA` values.
//!
//! The registry is built once on first use and is read-only afterwards.

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::domain::evaluation::{AssessmentResult, RuleSummary};
use crate::domain::foundation::{AnswerState, AssessmentError, DomainKey, Question, QuestionBank};

use super::{DomainVariant, NextQuestion, SignallingDomain};

/// One registered domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainDescriptor {
    key: DomainKey,
    title: &'static str,
    domain: DomainVariant,
}

impl DomainDescriptor {
    fn new(key: DomainKey) -> Self {
        Self {
            key,
            title: key.title(),
            domain: DomainVariant::new(key),
        }
    }

    pub fn key(&self) -> DomainKey {
        self.key
    }

    pub fn slug(&self) -> &'static str {
        self.key.slug()
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn questions(&self) -> &'static QuestionBank {
        self.domain.questions()
    }

    /// Looks up one question of this domain.
    pub fn question(&self, code: &str) -> Result<&'static Question, AssessmentError> {
        self.questions().get(code).ok_or_else(|| {
            AssessmentError::invalid_answer(code, "question is not part of this domain")
        })
    }

    /// Returns the next question to ask, or `Done`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAnswer` if the state holds a code this domain does not
    /// define or an answer the question does not accept.
    pub fn next_question(&self, state: &AnswerState) -> Result<NextQuestion, AssessmentError> {
        self.questions().validate(state)?;
        let next = self.domain.next_question(state);
        trace!(domain = %self.key, answered = state.len(), next = ?next, "Sequenced domain");
        Ok(next)
    }

    /// Evaluates the answers into a judgement.
    ///
    /// Total over every valid state, including ones with gated questions
    /// left unset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAnswer` under the same conditions as `next_question`.
    pub fn evaluate(&self, state: &AnswerState) -> Result<AssessmentResult, AssessmentError> {
        self.questions().validate(state)?;
        let decision = self.domain.evaluate(state);
        debug!(
            domain = %self.key,
            rule = decision.rule,
            judgement = %decision.judgement,
            "Evaluated domain"
        );
        Ok(AssessmentResult::from_decision(self.key, decision))
    }

    /// Ids of every rule whose predicate holds for the answers, in table
    /// order. The first one, if any, is the rule `evaluate` fires.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAnswer` under the same conditions as `next_question`.
    pub fn matching_rules(&self, state: &AnswerState) -> Result<Vec<&'static str>, AssessmentError> {
        self.questions().validate(state)?;
        Ok(self.domain.matching_rules(state))
    }

    /// Rule ids and outcomes in evaluation order.
    pub fn rule_outline(&self) -> Vec<RuleSummary> {
        self.domain.rule_outline()
    }
}

static REGISTRY: Lazy<Vec<DomainDescriptor>> = Lazy::new(|| {
    DomainKey::all()
        .iter()
        .map(|key| DomainDescriptor::new(*key))
        .collect()
});

/// Returns every registered domain in instrument order.
pub fn list_domains() -> &'static [DomainDescriptor] {
    &REGISTRY
}

/// Looks up a domain by slug.
///
/// # Errors
///
/// Returns `UnknownDomain` if no domain is registered under `key`.
pub fn get_domain(key: &str) -> Result<&'static DomainDescriptor, AssessmentError> {
    let key: DomainKey = key.parse()?;
    Ok(descriptor(key))
}

/// Returns the descriptor for a key.
pub fn descriptor(key: DomainKey) -> &'static DomainDescriptor {
    // Registry order follows DomainKey declaration order.
    &REGISTRY[key as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, Judgement};

    #[test]
    fn registry_lists_six_domains_in_order() {
        let slugs: Vec<_> = list_domains().iter().map(|d| d.slug()).collect();
        assert_eq!(
            slugs,
            vec![
                "domain_1_randomization",
                "domain_2_assignment",
                "domain_2_adhering",
                "domain_3_missing_data",
                "domain_4_measurement",
                "domain_5_reporting",
            ]
        );
    }

    #[test]
    fn descriptor_matches_its_key() {
        for key in DomainKey::all() {
            assert_eq!(descriptor(*key).key(), *key);
        }
    }

    #[test]
    fn get_domain_rejects_unknown_key() {
        let err = get_domain("domain_9_imaginary").unwrap_err();
        assert_eq!(err, AssessmentError::UnknownDomain("domain_9_imaginary".to_string()));
    }

    #[test]
    fn get_domain_finds_registered_key() {
        let domain = get_domain("domain_3_missing_data").unwrap();
        assert_eq!(domain.title(), "Domain 3: Risk of Bias – Missing Outcome Data");
        assert_eq!(domain.questions().len(), 4);
    }

    #[test]
    fn evaluate_rejects_not_applicable_outside_adhering_domain() {
        let state = AnswerState::new().with("1.1", Answer::NotApplicable);
        let err = descriptor(DomainKey::Randomization)
            .evaluate(&state)
            .unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidAnswer { ref question, .. } if question == "1.1"));
    }

    #[test]
    fn next_question_rejects_foreign_codes() {
        let state = AnswerState::new().with("3.1", Answer::Yes);
        let result = descriptor(DomainKey::Randomization).next_question(&state);
        assert!(result.is_err());
    }

    #[test]
    fn evaluate_builds_result_with_domain_identity() {
        let state = AnswerState::new().with("3.1", Answer::Yes);
        let result = descriptor(DomainKey::MissingOutcomeData)
            .evaluate(&state)
            .unwrap();
        assert_eq!(result.domain, DomainKey::MissingOutcomeData);
        assert_eq!(result.judgement, Judgement::Low);
        assert_eq!(result.rule, "data_nearly_complete");
    }

    #[test]
    fn invalid_state_is_rejected_before_reaching_the_domain() {
        let state = AnswerState::new()
            .with("1.2", Answer::NotApplicable)
            .with("9.9", Answer::Yes);
        let domain = descriptor(DomainKey::Randomization);

        for err in [
            domain.evaluate(&state).unwrap_err(),
            domain.next_question(&state).unwrap_err(),
            domain.matching_rules(&state).unwrap_err(),
        ] {
            assert!(matches!(err, AssessmentError::InvalidAnswer { ref question, .. } if question == "1.2"));
        }
    }

    #[test]
    fn matching_rules_lead_with_the_fired_rule() {
        let state = AnswerState::new()
            .with("1.1", Answer::No)
            .with("1.2", Answer::No)
            .with("1.3", Answer::Yes);
        let domain = descriptor(DomainKey::Randomization);

        let matched = domain.matching_rules(&state).unwrap();
        assert_eq!(
            matched,
            vec![
                "allocation_not_concealed",
                "sequence_not_random",
                "imbalance_with_non_random_sequence",
            ]
        );
        assert_eq!(domain.evaluate(&state).unwrap().rule, matched[0]);
    }

    #[test]
    fn matching_rules_empty_when_fallback_decides() {
        let domain = descriptor(DomainKey::Randomization);
        let state = AnswerState::new();
        assert!(domain.matching_rules(&state).unwrap().is_empty());
        assert_eq!(domain.evaluate(&state).unwrap().rule, "default");
    }

    #[test]
    fn question_lookup_fails_for_foreign_code() {
        let domain = descriptor(DomainKey::ReportedResultSelection);
        assert_eq!(domain.question("5.2").unwrap().code, "5.2");
        assert!(domain.question("1.1").is_err());
    }
}
