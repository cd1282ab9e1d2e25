//! Decision trace entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Judgement;

/// One step of a decision path.
///
/// `outcome` is set only on the step that concludes the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub rule: String,
    pub finding: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Judgement>,
}

impl TraceEntry {
    pub fn new(rule: impl Into<String>, finding: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            finding: finding.into(),
            outcome: None,
        }
    }

    pub fn concluding(rule: impl Into<String>, finding: impl Into<String>, outcome: Judgement) -> Self {
        Self {
            rule: rule.into(),
            finding: finding.into(),
            outcome: Some(outcome),
        }
    }

    pub fn is_conclusion(&self) -> bool {
        self.outcome.is_some()
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => write!(f, "{} → {}.", self.finding, outcome.risk_phrase()),
            None => write!(f, "{}.", self.finding),
        }
    }
}
