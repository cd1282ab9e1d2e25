//! Domain 2 - Deviations from intended interventions (effect of assignment).

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
    UNKNOWN,
};

use super::signalling_domain::{ask_if_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 7] = [
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
        "If awareness occurred, were there deviations from intended intervention that arose because of the trial context?",
    ),
    Question::new(
        "2.4",
        "If deviations occurred, were these deviations likely to have affected the outcome?",
    ),
    Question::new(
        "2.5",
        "If deviations occurred, were these deviations balanced between groups?",
    ),
    Question::new(
        "2.6",
        "Was an appropriate analysis used to estimate the effect of assignment? (Typically ITT.)",
    ),
    Question::new(
        "2.7",
        "If the analysis was inappropriate, is the result likely to be biased?",
    ),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

struct Facts {
    /// Participants or carers definitely or probably aware.
    aware: bool,
    trial_context_deviations: Option<Answer>,
    deviations_affect_outcome: Option<Answer>,
    deviations_balanced: Option<Answer>,
    analysis_appropriate: Option<Answer>,
    analysis_biased: Option<Answer>,
}

impl Facts {
    fn from_state(state: &AnswerState) -> Self {
        Self {
            aware: AFFIRMATIVE.contains(state.get("2.1")) || AFFIRMATIVE.contains(state.get("2.2")),
            trial_context_deviations: state.get("2.3"),
            deviations_affect_outcome: state.get("2.4"),
            deviations_balanced: state.get("2.5"),
            analysis_appropriate: state.get("2.6"),
            analysis_biased: state.get("2.7"),
        }
    }
}

static RULES: [Rule<Facts>; 4] = [
    Rule {
        id: "deviations_affect_outcome",
        outcome: Judgement::High,
        when: |f| {
            f.aware
                && AFFIRMATIVE.contains(f.trial_context_deviations)
                && AFFIRMATIVE.contains(f.deviations_affect_outcome)
        },
        trace: &["Participants/carers aware → deviations due to trial → deviations affect outcome"],
        detail: None,
        explanation: "Knowledge of assignment led to deviations likely to influence outcomes.",
    },
    Rule {
        id: "deviations_unbalanced",
        outcome: Judgement::High,
        when: |f| {
            f.aware
                && AFFIRMATIVE.contains(f.trial_context_deviations)
                && NEGATIVE.contains(f.deviations_balanced)
        },
        trace: &["Deviations due to trial were not balanced between groups"],
        detail: None,
        explanation: "Deviations occurred in a way that likely introduced bias.",
    },
    Rule {
        id: "inappropriate_analysis_biased",
        outcome: Judgement::High,
        when: |f| {
            NEGATIVE.contains(f.analysis_appropriate) && AFFIRMATIVE.contains(f.analysis_biased)
        },
        trace: &["Inappropriate analysis + likely biased"],
        detail: None,
        explanation: "The effect estimate is likely biased due to inappropriate analysis.",
    },
    Rule {
        id: "no_problematic_deviations",
        outcome: Judgement::Low,
        when: |f| {
            (!f.aware || (NEGATIVE | UNKNOWN).contains(f.trial_context_deviations))
                && (AFFIRMATIVE | UNKNOWN).contains(f.analysis_appropriate)
        },
        trace: &["No awareness or no concerning deviations + appropriate ITT analysis"],
        detail: None,
        explanation:
            "Assignment awareness did not bias outcomes and analysis method was appropriate.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "Conditions for high risk not met; conditions for low risk not fully satisfied",
        explanation:
            "Some uncertainty remains about deviations or the appropriateness of the analysis.",
    },
};

/// Deviations from intended interventions, effect of assignment (ITT).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DeviationsAssignment;

impl SignallingDomain for DeviationsAssignment {
    fn key(&self) -> DomainKey {
        DomainKey::DeviationsAssignment
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        if let Some(next) = ask_if_unset(state, "2.1").or_else(|| ask_if_unset(state, "2.2")) {
            return next;
        }

        // The gate counts "no information" as possible awareness.
        let aware_or_unclear = (AFFIRMATIVE | UNKNOWN).contains(state.get("2.1"))
            || (AFFIRMATIVE | UNKNOWN).contains(state.get("2.2"));

        if aware_or_unclear {
            if let Some(next) = ask_if_unset(state, "2.3") {
                return next;
            }
            if AFFIRMATIVE.contains(state.get("2.3")) {
                if let Some(next) = ask_if_unset(state, "2.4") {
                    return next;
                }
                if (AFFIRMATIVE | UNKNOWN).contains(state.get("2.4")) {
                    if let Some(next) = ask_if_unset(state, "2.5") {
                        return next;
                    }
                }
            }
        }

        if let Some(next) = ask_if_unset(state, "2.6") {
            return next;
        }
        if (NEGATIVE | UNKNOWN).contains(state.get("2.6")) {
            if let Some(next) = ask_if_unset(state, "2.7") {
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
