//! Domain 5 - Bias in selection of the reported result.

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
};

use super::signalling_domain::{first_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 3] = [
    Question::new(
        "5.1",
        "Were the data that produced this result analyzed according to a pre-specified analysis plan?",
    ),
    Question::new(
        "5.2",
        "Were there multiple eligible outcome measurements (scales, definitions) within this outcome domain?",
    ),
    Question::new("5.3", "Were there multiple eligible analyses of the data?"),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

struct Facts {
    prespecified_plan: Option<Answer>,
    multiple_measurements: Option<Answer>,
    multiple_analyses: Option<Answer>,
}

static RULES: [Rule<Facts>; 3] = [
    Rule {
        id: "selective_reporting_likely",
        outcome: Judgement::High,
        when: |f| {
            NEGATIVE.contains(f.prespecified_plan)
                && AFFIRMATIVE.contains(f.multiple_measurements)
                && AFFIRMATIVE.contains(f.multiple_analyses)
        },
        trace: &["5.1 = No + 5.2 = Yes + 5.3 = Yes → Selective reporting likely"],
        detail: None,
        explanation: "Multiple outcome measurements and analyses were possible, and no pre-specified analysis plan existed.",
    },
    Rule {
        id: "prespecified_plan_followed",
        outcome: Judgement::Low,
        when: |f| AFFIRMATIVE.contains(f.prespecified_plan),
        trace: &["5.1 = Yes → Pre-specified analysis plan followed"],
        detail: None,
        explanation: "Results were analyzed according to a pre-specified analysis plan.",
    },
    Rule {
        id: "no_multiplicity",
        outcome: Judgement::Low,
        when: |f| NEGATIVE.contains(f.multiple_measurements) && NEGATIVE.contains(f.multiple_analyses),
        trace: &["5.2 = No + 5.3 = No → No multiplicity concerns"],
        detail: None,
        explanation: "There were no multiple eligible outcome measurements or analyses.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "Not enough information for low risk, and high-risk conditions not met",
        explanation: "Potential selective reporting cannot be ruled out because of uncertainty about analysis choice or outcome selection.",
    },
};

fn facts(state: &AnswerState) -> Facts {
    Facts {
        prespecified_plan: state.get("5.1"),
        multiple_measurements: state.get("5.2"),
        multiple_analyses: state.get("5.3"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReportedResultSelection;

impl SignallingDomain for ReportedResultSelection {
    fn key(&self) -> DomainKey {
        DomainKey::ReportedResultSelection
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        first_unset(state, &["5.1", "5.2", "5.3"])
    }

    fn evaluate(&self, state: &AnswerState) -> Decision {
        TABLE.decide(&facts(state))
    }

    fn matching_rules(&self, state: &AnswerState) -> Vec<&'static str> {
        TABLE.matching(&facts(state))
    }

    fn rule_outline(&self) -> Vec<RuleSummary> {
        TABLE.outline()
    }
}
