//! Ordered rule tables.
//!
//! A domain's evaluator is a `RuleTable` over a small facts struct derived
//! from the answer state. Rules are tried top to bottom and the first match
//! decides; when nothing matches, the table's Some-concerns fallback applies.

use serde::Serialize;

use super::TraceEntry;
use crate::domain::foundation::Judgement;

/// Identifier recorded when no rule matched.
pub const DEFAULT_RULE: &str = "default";

/// A guarded outcome.
pub struct Rule<F: 'static> {
    pub id: &'static str,
    pub outcome: Judgement,
    pub when: fn(&F) -> bool,
    /// Findings recorded when the rule fires; the last one concludes the path.
    pub trace: &'static [&'static str],
    /// Extra finding computed from the facts, recorded before `trace`.
    pub detail: Option<fn(&F) -> String>,
    pub explanation: &'static str,
}

impl<F: 'static> Rule<F> {
    fn fire(&self, facts: &F) -> Decision {
        let mut trace = Vec::with_capacity(self.trace.len() + 1);
        if let Some(detail) = self.detail {
            trace.push(TraceEntry::new(self.id, detail(facts)));
        }

        let last = self.trace.len().saturating_sub(1);
        for (idx, finding) in self.trace.iter().enumerate() {
            if idx == last {
                trace.push(TraceEntry::concluding(self.id, *finding, self.outcome));
            } else {
                trace.push(TraceEntry::new(self.id, *finding));
            }
        }

        Decision {
            rule: self.id,
            judgement: self.outcome,
            explanation: self.explanation,
            trace,
        }
    }
}

/// The Some-concerns outcome used when no rule matches.
pub struct Fallback {
    pub trace: &'static str,
    pub explanation: &'static str,
}

/// An ordered list of rules plus the default outcome.
pub struct RuleTable<F: 'static> {
    pub rules: &'static [Rule<F>],
    pub fallback: Fallback,
}

impl<F: 'static> RuleTable<F> {
    /// Applies the table: first matching rule wins, otherwise the fallback.
    pub fn decide(&self, facts: &F) -> Decision {
        match self.rules.iter().find(|rule| (rule.when)(facts)) {
            Some(rule) => rule.fire(facts),
            None => Decision {
                rule: DEFAULT_RULE,
                judgement: Judgement::SomeConcerns,
                explanation: self.fallback.explanation,
                trace: vec![TraceEntry::concluding(
                    DEFAULT_RULE,
                    self.fallback.trace,
                    Judgement::SomeConcerns,
                )],
            },
        }
    }

    /// Ids of every rule whose predicate holds, in table order.
    pub fn matching(&self, facts: &F) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| (rule.when)(facts))
            .map(|rule| rule.id)
            .collect()
    }

    /// Rule ids and outcomes in evaluation order, ending with the fallback.
    pub fn outline(&self) -> Vec<RuleSummary> {
        self.rules
            .iter()
            .map(|rule| RuleSummary {
                id: rule.id,
                outcome: rule.outcome,
            })
            .chain(std::iter::once(RuleSummary {
                id: DEFAULT_RULE,
                outcome: Judgement::SomeConcerns,
            }))
            .collect()
    }
}

/// The outcome of applying a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub rule: &'static str,
    pub judgement: Judgement,
    pub explanation: &'static str,
    pub trace: Vec<TraceEntry>,
}

/// One line of a rule table outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub id: &'static str,
    pub outcome: Judgement,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Facts {
        a: bool,
        b: bool,
    }

    static RULES: [Rule<Facts>; 3] = [
        Rule {
            id: "a_is_high",
            outcome: Judgement::High,
            when: |f| f.a,
            trace: &["a holds"],
            detail: None,
            explanation: "A is bad.",
        },
        Rule {
            id: "b_is_low",
            outcome: Judgement::Low,
            when: |f| f.b,
            trace: &["b holds", "nothing else"],
            detail: None,
            explanation: "B is fine.",
        },
        Rule {
            id: "never",
            outcome: Judgement::Low,
            when: |_| false,
            trace: &["unreachable"],
            detail: Some(|f| format!("a={}", f.a)),
            explanation: "Never.",
        },
    ];

    static TABLE: RuleTable<Facts> = RuleTable {
        rules: &RULES,
        fallback: Fallback {
            trace: "Neither extreme met",
            explanation: "Unclear.",
        },
    };

    #[test]
    fn first_matching_rule_wins() {
        let decision = TABLE.decide(&Facts { a: true, b: true });
        assert_eq!(decision.rule, "a_is_high");
        assert_eq!(decision.judgement, Judgement::High);
        assert_eq!(decision.trace.len(), 1);
    }

    #[test]
    fn multi_step_trace_concludes_on_last_step() {
        let decision = TABLE.decide(&Facts { a: false, b: true });
        assert_eq!(decision.judgement, Judgement::Low);
        assert_eq!(decision.trace.len(), 2);
        assert_eq!(decision.trace[0].outcome, None);
        assert_eq!(decision.trace[1].outcome, Some(Judgement::Low));
    }

    #[test]
    fn fallback_is_some_concerns() {
        let decision = TABLE.decide(&Facts { a: false, b: false });
        assert_eq!(decision.rule, DEFAULT_RULE);
        assert_eq!(decision.judgement, Judgement::SomeConcerns);
        assert_eq!(decision.explanation, "Unclear.");
        assert_eq!(decision.trace[0].finding, "Neither extreme met");
    }

    #[test]
    fn matching_lists_all_hits_in_order() {
        assert_eq!(
            TABLE.matching(&Facts { a: true, b: true }),
            vec!["a_is_high", "b_is_low"]
        );
    }

    #[test]
    fn outline_ends_with_default() {
        let outline = TABLE.outline();
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[3].id, DEFAULT_RULE);
        assert_eq!(outline[3].outcome, Judgement::SomeConcerns);
    }
}
