//! DomainVariant - sum type over the registered bias domains.

use crate::domain::evaluation::{Decision, RuleSummary};
use crate::domain::foundation::{AnswerState, DomainKey, QuestionBank};

use super::{
    DeviationsAdhering, DeviationsAssignment, MissingOutcomeData, NextQuestion,
    OutcomeMeasurement, Randomization, ReportedResultSelection, SignallingDomain,
};

/// Generates the six-arm match that forwards a call to the wrapped domain.
macro_rules! delegate_to_domain {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            DomainVariant::Randomization(d) => d.$method($($arg),*),
            DomainVariant::DeviationsAssignment(d) => d.$method($($arg),*),
            DomainVariant::DeviationsAdhering(d) => d.$method($($arg),*),
            DomainVariant::MissingOutcomeData(d) => d.$method($($arg),*),
            DomainVariant::OutcomeMeasurement(d) => d.$method($($arg),*),
            DomainVariant::ReportedResultSelection(d) => d.$method($($arg),*),
        }
    };
}

/// Closed set of domains.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DomainVariant {
    Randomization(Randomization),
    DeviationsAssignment(DeviationsAssignment),
    DeviationsAdhering(DeviationsAdhering),
    MissingOutcomeData(MissingOutcomeData),
    OutcomeMeasurement(OutcomeMeasurement),
    ReportedResultSelection(ReportedResultSelection),
}

impl DomainVariant {
    /// Creates the domain registered under a key.
    pub(crate) fn new(key: DomainKey) -> Self {
        match key {
            DomainKey::Randomization => DomainVariant::Randomization(Randomization),
            DomainKey::DeviationsAssignment => {
                DomainVariant::DeviationsAssignment(DeviationsAssignment)
            }
            DomainKey::DeviationsAdhering => DomainVariant::DeviationsAdhering(DeviationsAdhering),
            DomainKey::MissingOutcomeData => DomainVariant::MissingOutcomeData(MissingOutcomeData),
            DomainKey::OutcomeMeasurement => DomainVariant::OutcomeMeasurement(OutcomeMeasurement),
            DomainKey::ReportedResultSelection => {
                DomainVariant::ReportedResultSelection(ReportedResultSelection)
            }
        }
    }
}

impl SignallingDomain for DomainVariant {
    fn key(&self) -> DomainKey {
        delegate_to_domain!(self, key)
    }

    fn questions(&self) -> &'static QuestionBank {
        delegate_to_domain!(self, questions)
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        delegate_to_domain!(self, next_question, state)
    }

    fn evaluate(&self, state: &AnswerState) -> Decision {
        delegate_to_domain!(self, evaluate, state)
    }

    fn matching_rules(&self, state: &AnswerState) -> Vec<&'static str> {
        delegate_to_domain!(self, matching_rules, state)
    }

    fn rule_outline(&self) -> Vec<RuleSummary> {
        delegate_to_domain!(self, rule_outline)
    }
}
