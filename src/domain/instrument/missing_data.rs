//! Domain 3 - Bias due to missing outcome data.

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
    UNKNOWN,
};

use super::signalling_domain::{ask_if_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 4] = [
    Question::new(
        "3.1",
        "Were data for this outcome available for all or nearly all participants randomized?",
    ),
    Question::new(
        "3.2",
        "If not, is there evidence that the result was not biased by missing outcome data?",
    ),
    Question::new(
        "3.3",
        "Could the missingness depend on the true value of the outcome?",
    ),
    Question::new(
        "3.4",
        "If yes, is the proportion of missing data not sufficient to induce clinically relevant bias?",
    ),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

struct Facts {
    data_complete: Option<Answer>,
    evidence_not_biased: Option<Answer>,
    depends_on_outcome: Option<Answer>,
    proportion_tolerable: Option<Answer>,
}

impl Facts {
    fn from_state(state: &AnswerState) -> Self {
        Self {
            data_complete: state.get("3.1"),
            evidence_not_biased: state.get("3.2"),
            depends_on_outcome: state.get("3.3"),
            proportion_tolerable: state.get("3.4"),
        }
    }
}

static RULES: [Rule<Facts>; 5] = [
    Rule {
        id: "outcome_dependent_missingness",
        outcome: Judgement::High,
        when: |f| {
            AFFIRMATIVE.contains(f.depends_on_outcome) && NEGATIVE.contains(f.proportion_tolerable)
        },
        trace: &["3.3 = Yes + 3.4 = No → Missingness likely depends on true outcome and proportion is concerning"],
        detail: None,
        explanation: "The amount and mechanism of missing outcome data are likely to bias results.",
    },
    Rule {
        id: "missing_data_unaddressed",
        outcome: Judgement::High,
        when: |f| NEGATIVE.contains(f.data_complete) && NEGATIVE.contains(f.evidence_not_biased),
        trace: &["3.1 = No + 3.2 = No → Missing data not shown to be non-biased"],
        detail: None,
        explanation: "There is no reassurance that missing data did not bias the results.",
    },
    Rule {
        id: "data_nearly_complete",
        outcome: Judgement::Low,
        when: |f| AFFIRMATIVE.contains(f.data_complete),
        trace: &["3.1 = Yes → Nearly all outcome data available"],
        detail: None,
        explanation: "Outcome data were available for nearly all participants.",
    },
    Rule {
        id: "evidence_of_no_bias",
        outcome: Judgement::Low,
        when: |f| AFFIRMATIVE.contains(f.evidence_not_biased),
        trace: &["3.2 = Yes → Evidence missing data did NOT bias the result"],
        detail: None,
        explanation: "Missing data are unlikely to bias results based on reported evidence.",
    },
    Rule {
        id: "missing_proportion_small",
        outcome: Judgement::Low,
        when: |f| {
            AFFIRMATIVE.contains(f.depends_on_outcome) && AFFIRMATIVE.contains(f.proportion_tolerable)
        },
        trace: &["3.3 = Yes + 3.4 = Yes → Missingness outcome-dependent but proportion small"],
        detail: None,
        explanation:
            "Missingness could depend on outcome, but the amount is too small to affect conclusions.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "Insufficient information to confirm low risk, but no high-risk criteria met",
        explanation:
            "There is some uncertainty regarding the potential influence of missing outcome data.",
    },
};

/// Missing outcome data: 3.1, then 3.2 to 3.4 as each gate opens.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MissingOutcomeData;

impl SignallingDomain for MissingOutcomeData {
    fn key(&self) -> DomainKey {
        DomainKey::MissingOutcomeData
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        let gates = [
            ("3.1", true),
            ("3.2", (NEGATIVE | UNKNOWN).contains(state.get("3.1"))),
            ("3.3", NEGATIVE.contains(state.get("3.2"))),
            ("3.4", (AFFIRMATIVE | UNKNOWN).contains(state.get("3.3"))),
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
