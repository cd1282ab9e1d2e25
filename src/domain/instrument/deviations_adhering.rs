//! Domain 2 - Deviations from intended interventions (effect of adhering).
//!
//! The only domain whose questions accept `NA`, and only on 2.3 to 2.5.

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
    NOT_APPLICABLE, UNKNOWN,
};

use super::signalling_domain::{ask_if_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 6] = [
    Question::new(
        "2.1",
        "Were participants aware of their assigned intervention during the trial?",
    ),
    Question::new(
        "2.2",
        "Were carers/people delivering the interventions aware of participants’ assigned intervention?",
    ),
    Question::new(
        "2.3",
        "(If Y/PY/NI to 2.1 or 2.2) Were important non-protocol interventions balanced across intervention groups?",
    )
    .allowing_not_applicable(),
    Question::new(
        "2.4",
        "(If applicable) Were there failures in implementing the intervention that could have affected the outcome?",
    )
    .allowing_not_applicable(),
    Question::new(
        "2.5",
        "(If applicable) Was there non-adherence to the assigned intervention regimen that could have affected participants’ outcomes?",
    )
    .allowing_not_applicable(),
    Question::new(
        "2.6",
        "(If N/PN/NI to 2.3, or Y/PY/NI to 2.4 or 2.5) Was an appropriate analysis used to estimate the effect of adhering to intervention?",
    ),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

fn aware_or_unclear(state: &AnswerState) -> bool {
    (AFFIRMATIVE | UNKNOWN).contains(state.get("2.1"))
        || (AFFIRMATIVE | UNKNOWN).contains(state.get("2.2"))
}

/// Concerns that make an adherence-effect analysis necessary, in report order.
#[derive(Debug, Default)]
struct Concerns {
    non_protocol_unbalanced: bool,
    non_protocol_unclear: bool,
    implementation_failures: bool,
    implementation_unclear: bool,
    non_adherence: bool,
    non_adherence_unclear: bool,
}

impl Concerns {
    fn any(&self) -> bool {
        self.reasons().next().is_some()
    }

    fn reasons(&self) -> impl Iterator<Item = &'static str> + '_ {
        [
            (
                self.non_protocol_unbalanced,
                "Important non-protocol interventions were not balanced.",
            ),
            (
                self.non_protocol_unclear,
                "Balance of important non-protocol interventions is unclear.",
            ),
            (
                self.implementation_failures,
                "Failures in implementing the intervention could have affected outcomes.",
            ),
            (
                self.implementation_unclear,
                "Information on intervention implementation is insufficient.",
            ),
            (
                self.non_adherence,
                "Non-adherence to the intervention regimen could affect outcomes.",
            ),
            (
                self.non_adherence_unclear,
                "Adherence information is insufficient to rule out bias.",
            ),
        ]
        .into_iter()
        .filter_map(|(present, reason)| present.then_some(reason))
    }
}

struct Facts {
    aware: bool,
    non_protocol_balanced: Option<Answer>,
    implementation_failures: Option<Answer>,
    non_adherence: Option<Answer>,
    analysis_appropriate: Option<Answer>,
    concerns: Concerns,
}

impl Facts {
    fn from_state(state: &AnswerState) -> Self {
        let aware = aware_or_unclear(state);
        let non_protocol_balanced = state.get("2.3");
        let implementation_failures = state.get("2.4");
        let non_adherence = state.get("2.5");

        let concerns = Concerns {
            non_protocol_unbalanced: aware && NEGATIVE.contains(non_protocol_balanced),
            non_protocol_unclear: aware
                && (non_protocol_balanced.is_none() || UNKNOWN.contains(non_protocol_balanced)),
            implementation_failures: AFFIRMATIVE.contains(implementation_failures),
            implementation_unclear: UNKNOWN.contains(implementation_failures),
            non_adherence: AFFIRMATIVE.contains(non_adherence),
            non_adherence_unclear: UNKNOWN.contains(non_adherence),
        };

        Self {
            aware,
            non_protocol_balanced,
            implementation_failures,
            non_adherence,
            analysis_appropriate: state.get("2.6"),
            concerns,
        }
    }

    fn analysis_needed(&self) -> bool {
        self.concerns.any()
    }
}

/// Negative, not applicable, or never asked.
fn cleared(slot: Option<Answer>) -> bool {
    slot.is_none() || (NEGATIVE | NOT_APPLICABLE).contains(slot)
}

fn describe_concerns(f: &Facts) -> String {
    let reasons: Vec<&str> = f.concerns.reasons().collect();
    format!(
        "Potential biases identified ({}) without an appropriate analysis",
        reasons.join("; ")
    )
}

static RULES: [Rule<Facts>; 2] = [
    Rule {
        id: "adherence_analysis_missing",
        outcome: Judgement::High,
        when: |f| f.analysis_needed() && NEGATIVE.contains(f.analysis_appropriate),
        trace: &["Necessary adherence-effect analysis was not used"],
        detail: Some(describe_concerns),
        explanation: "The adherence-effect estimate is likely biased because necessary analytical adjustments were not used.",
    },
    Rule {
        id: "adherence_concerns_resolved",
        outcome: Judgement::Low,
        when: |f| {
            let non_protocol_ok = !f.aware
                || (AFFIRMATIVE | NOT_APPLICABLE).contains(f.non_protocol_balanced);
            let analysis_ok =
                !f.analysis_needed() || AFFIRMATIVE.contains(f.analysis_appropriate);
            non_protocol_ok
                && cleared(f.implementation_failures)
                && cleared(f.non_adherence)
                && analysis_ok
        },
        trace: &["No concerning imbalances or adherence issues and analysis appropriate when needed"],
        detail: None,
        explanation:
            "Bias due to deviations from intended intervention is unlikely under the adherence effect.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "Potential deviations or unclear information remain, or the appropriateness of analysis is uncertain",
        explanation: "Some uncertainty remains about non-protocol interventions, implementation fidelity, adherence, or the analytical approach.",
    },
};

/// Deviations from intended interventions, effect of adhering (per-protocol).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DeviationsAdhering;

impl SignallingDomain for DeviationsAdhering {
    fn key(&self) -> DomainKey {
        DomainKey::DeviationsAdhering
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        if let Some(next) = ask_if_unset(state, "2.1").or_else(|| ask_if_unset(state, "2.2")) {
            return next;
        }

        let aware = aware_or_unclear(state);
        if aware {
            if let Some(next) = ask_if_unset(state, "2.3") {
                return next;
            }
        }

        if let Some(next) = ask_if_unset(state, "2.4").or_else(|| ask_if_unset(state, "2.5")) {
            return next;
        }

        let analysis_needed = (aware && (NEGATIVE | UNKNOWN).contains(state.get("2.3")))
            || (AFFIRMATIVE | UNKNOWN).contains(state.get("2.4"))
            || (AFFIRMATIVE | UNKNOWN).contains(state.get("2.5"));
        if analysis_needed {
            if let Some(next) = ask_if_unset(state, "2.6") {
                return next;
            }
        }

        NextQuestion::Done
    }

    fn evaluate(&self, state: &AnswerState) -> Decision {
        TABLE.decide(&Facts::from_state(state))
    }

    fn matching_rules(&self, state: &AnswerState) -> Vec<&'static str> {
        TABLE.matching(&Facts::from_state(state))
    }

    fn rule_outline(&self) -> Vec<RuleSummary> {
        TABLE.outline()
    }
}
