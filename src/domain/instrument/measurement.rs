//! Domain 4 - Bias in measurement of the outcome.

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
    UNKNOWN,
};

use super::signalling_domain::{ask_if_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 5] = [
    Question::new("4.1", "Was the method of measuring the outcome inappropriate?"),
    Question::new(
        "4.2",
        "Was the measurement or ascertainment of the outcome different between intervention groups?",
    ),
    Question::new(
        "4.3",
        "Were outcome assessors aware of the intervention received by study participants?",
    ),
    Question::new(
        "4.4",
        "Could assessment of the outcome have been influenced by knowledge of the intervention received?",
    ),
    Question::new(
        "4.5",
        "Is it likely that assessment of the outcome was influenced by knowledge of the intervention received?",
    ),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

struct Facts {
    method_inappropriate: Option<Answer>,
    differs_between_groups: Option<Answer>,
    assessors_aware: Option<Answer>,
    could_be_influenced: Option<Answer>,
    influence_likely: Option<Answer>,
}

impl Facts {
    fn from_state(state: &AnswerState) -> Self {
        Self {
            method_inappropriate: state.get("4.1"),
            differs_between_groups: state.get("4.2"),
            assessors_aware: state.get("4.3"),
            could_be_influenced: state.get("4.4"),
            influence_likely: state.get("4.5"),
        }
    }

    fn method_acceptable(&self) -> bool {
        (NEGATIVE | UNKNOWN).contains(self.method_inappropriate)
    }

    fn aware_or_uncertain(&self) -> bool {
        (AFFIRMATIVE | UNKNOWN).contains(self.assessors_aware)
    }

    fn possibly_influenced(&self) -> bool {
        (AFFIRMATIVE | UNKNOWN).contains(self.could_be_influenced)
    }
}

static RULES: [Rule<Facts>; 8] = [
    Rule {
        id: "inappropriate_method",
        outcome: Judgement::High,
        when: |f| AFFIRMATIVE.contains(f.method_inappropriate),
        trace: &["4.1 = Yes → Measurement method inappropriate"],
        detail: None,
        explanation:
            "The method used to measure the outcome is inappropriate for the construct of interest.",
    },
    Rule {
        id: "measurement_differs_between_groups",
        outcome: Judgement::High,
        when: |f| AFFIRMATIVE.contains(f.differs_between_groups),
        trace: &["4.2 = Yes → Outcome measurement differed across intervention groups"],
        detail: None,
        explanation: "Outcome measurement methods differed between groups, introducing bias.",
    },
    Rule {
        id: "assessment_influenced",
        outcome: Judgement::High,
        when: |f| {
            (NEGATIVE | UNKNOWN).contains(f.differs_between_groups)
                && f.aware_or_uncertain()
                && f.possibly_influenced()
                && (AFFIRMATIVE | UNKNOWN).contains(f.influence_likely)
        },
        trace: &[
            "4.3 = Yes/NI → Assessors aware of intervention received",
            "4.4 = Yes/NI + 4.5 = Yes/NI → Assessment likely influenced by that knowledge",
        ],
        detail: None,
        explanation:
            "Outcome assessment was likely influenced by knowledge of intervention assignment.",
    },
    Rule {
        id: "assessors_blinded",
        outcome: Judgement::Low,
        when: |f| {
            f.method_acceptable()
                && NEGATIVE.contains(f.differs_between_groups)
                && NEGATIVE.contains(f.assessors_aware)
        },
        trace: &["Appropriate measurement + similar across groups + assessors blinded"],
        detail: None,
        explanation: "Outcome measurement appears appropriate, consistent, and masked.",
    },
    Rule {
        id: "awareness_without_influence",
        outcome: Judgement::Low,
        when: |f| {
            f.method_acceptable()
                && NEGATIVE.contains(f.differs_between_groups)
                && f.aware_or_uncertain()
                && NEGATIVE.contains(f.could_be_influenced)
        },
        trace: &["Appropriate measurement + similar across groups + awareness could not influence assessment"],
        detail: None,
        explanation: "Outcome measurement appears appropriate, consistent, and unlikely to be biased by awareness.",
    },
    Rule {
        id: "unclear_difference_blinded",
        outcome: Judgement::SomeConcerns,
        when: |f| {
            f.method_acceptable()
                && UNKNOWN.contains(f.differs_between_groups)
                && NEGATIVE.contains(f.assessors_aware)
        },
        trace: &["4.2 = NI + 4.3 = No → Unclear difference between groups, assessors blinded"],
        detail: None,
        explanation: "Unclear whether measurement differed between groups, though assessors were blinded.",
    },
    Rule {
        id: "unclear_difference_no_influence",
        outcome: Judgement::SomeConcerns,
        when: |f| {
            f.method_acceptable()
                && UNKNOWN.contains(f.differs_between_groups)
                && f.aware_or_uncertain()
                && NEGATIVE.contains(f.could_be_influenced)
        },
        trace: &["4.2 = NI + 4.4 = No → Unclear difference between groups, awareness could not influence assessment"],
        detail: None,
        explanation: "Unclear if measurement differed between groups, but assessment unlikely influenced by awareness.",
    },
    Rule {
        id: "influence_judged_unlikely",
        outcome: Judgement::SomeConcerns,
        when: |f| {
            (NEGATIVE | UNKNOWN).contains(f.differs_between_groups)
                && f.aware_or_uncertain()
                && f.possibly_influenced()
                && NEGATIVE.contains(f.influence_likely)
        },
        trace: &["4.4 = Yes/NI + 4.5 = No → Assessment could have been influenced but likely was not"],
        detail: None,
        explanation: "Awareness existed yet influence on assessment is judged unlikely.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "Insufficient evidence for low risk, but high-risk conditions not met",
        explanation: "There is some uncertainty regarding potential influence on outcome measurement.",
    },
};

/// Measurement of the outcome: 4.1 and 4.2, then the assessor-awareness chain.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OutcomeMeasurement;

impl SignallingDomain for OutcomeMeasurement {
    fn key(&self) -> DomainKey {
        DomainKey::OutcomeMeasurement
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        if let Some(next) = ask_if_unset(state, "4.1").or_else(|| ask_if_unset(state, "4.2")) {
            return next;
        }

        let gates = [
            (
                "4.3",
                (NEGATIVE | UNKNOWN).contains(state.get("4.1"))
                    && (NEGATIVE | UNKNOWN).contains(state.get("4.2")),
            ),
            ("4.4", (AFFIRMATIVE | UNKNOWN).contains(state.get("4.3"))),
            ("4.5", (AFFIRMATIVE | UNKNOWN).contains(state.get("4.4"))),
        ];

        for (code, open) in gates {
            if !open {
                break;
            }
            if let Some(next) = ask_if_unset(state, code) {
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
