//! Judgement enum, the three-valued outcome of a domain evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-of-bias judgement for one domain.
///
/// The three values are a classification, not a scale: no ordering is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Judgement {
    Low,
    SomeConcerns,
    High,
}

impl Judgement {
    /// Returns all judgements.
    pub fn all() -> &'static [Judgement] {
        &[Judgement::Low, Judgement::SomeConcerns, Judgement::High]
    }

    /// Returns the display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Judgement::Low => "Low",
            Judgement::SomeConcerns => "Some concerns",
            Judgement::High => "High",
        }
    }

    /// Returns the phrase used at the end of a decision path step.
    pub fn risk_phrase(&self) -> &'static str {
        match self {
            Judgement::Low => "Low risk",
            Judgement::SomeConcerns => "Some concerns",
            Judgement::High => "High risk",
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
