//! AssessmentResult - the immutable output of a domain evaluation.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::{Decision, TraceEntry};
use crate::domain::foundation::{DomainKey, Judgement};

/// Judgement, explanation and decision trace for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub domain: DomainKey,
    pub judgement: Judgement,
    pub explanation: String,
    /// Id of the rule that decided, or `default`.
    pub rule: String,
    pub trace: Vec<TraceEntry>,
}

impl AssessmentResult {
    pub(crate) fn from_decision(domain: DomainKey, decision: Decision) -> Self {
        Self {
            domain,
            judgement: decision.judgement,
            explanation: decision.explanation.to_string(),
            rule: decision.rule.to_string(),
            trace: decision.trace,
        }
    }

    /// Returns the domain's report title.
    pub fn title(&self) -> &'static str {
        self.domain.title()
    }

    /// Returns the decision path as display lines.
    pub fn decision_path(&self) -> Vec<String> {
        self.trace.iter().map(|entry| entry.to_string()).collect()
    }

    /// Renders a plain-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {}: Risk of Bias ===", self.title());
        let _ = writeln!(out, "Final Judgement: {}", self.judgement);
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Decision Path ---");
        for step in self.decision_path() {
            let _ = writeln!(out, "• {}", step);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "--- Explanation ---");
        let _ = writeln!(out, "{}", self.explanation);
        out
    }
}
