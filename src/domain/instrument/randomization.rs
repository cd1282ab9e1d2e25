//! Domain 1 - Bias arising from the randomization process.

use crate::domain::evaluation::{Decision, Fallback, Rule, RuleSummary, RuleTable};
use crate::domain::foundation::{
    Answer, AnswerState, DomainKey, Judgement, Question, QuestionBank, AFFIRMATIVE, NEGATIVE,
    UNKNOWN,
};

use super::signalling_domain::{first_unset, NextQuestion, SignallingDomain};

static QUESTIONS: [Question; 3] = [
    Question::new("1.1", "Was the allocation sequence random?"),
    Question::new(
        "1.2",
        "Was the allocation sequence concealed until participants were enrolled and assigned?",
    ),
    Question::new(
        "1.3",
        "Did baseline differences between groups suggest a problem with the randomization process?",
    ),
];

pub(crate) static BANK: QuestionBank = QuestionBank::new(&QUESTIONS);

struct Facts {
    sequence_random: Option<Answer>,
    allocation_concealed: Option<Answer>,
    baseline_imbalance: Option<Answer>,
}

impl Facts {
    fn from_state(state: &AnswerState) -> Self {
        Self {
            sequence_random: state.get("1.1"),
            allocation_concealed: state.get("1.2"),
            baseline_imbalance: state.get("1.3"),
        }
    }
}

static RULES: [Rule<Facts>; 5] = [
    Rule {
        id: "allocation_not_concealed",
        outcome: Judgement::High,
        when: |f| NEGATIVE.contains(f.allocation_concealed),
        trace: &["1.2 = No/Probably No → Allocation NOT concealed"],
        detail: None,
        explanation: "The allocation sequence was not adequately concealed.",
    },
    Rule {
        id: "sequence_not_random",
        outcome: Judgement::High,
        when: |f| NEGATIVE.contains(f.sequence_random),
        trace: &["1.1 = No/Probably No → Sequence not random"],
        detail: None,
        explanation: "The allocation sequence was not random or was predictable.",
    },
    Rule {
        id: "imbalance_with_unknown_concealment",
        outcome: Judgement::High,
        when: |f| AFFIRMATIVE.contains(f.baseline_imbalance) && UNKNOWN.contains(f.allocation_concealed),
        trace: &["1.3 = Yes + 1.2 = No Information → Baseline imbalance with unknown concealment"],
        detail: None,
        explanation:
            "Significant baseline differences indicate problems, and concealment was not described.",
    },
    // Shadowed by sequence_not_random.
    Rule {
        id: "imbalance_with_non_random_sequence",
        outcome: Judgement::High,
        when: |f| AFFIRMATIVE.contains(f.baseline_imbalance) && NEGATIVE.contains(f.sequence_random),
        trace: &["1.3 = Yes + 1.1 = No → Imbalance with non-random sequence"],
        detail: None,
        explanation: "Baseline imbalance likely resulted from inadequate randomization.",
    },
    Rule {
        id: "randomization_adequate",
        outcome: Judgement::Low,
        when: |f| {
            AFFIRMATIVE.contains(f.allocation_concealed)
                && (NEGATIVE | UNKNOWN).contains(f.baseline_imbalance)
                && (AFFIRMATIVE | UNKNOWN).contains(f.sequence_random)
        },
        trace: &[
            "1.2 = Yes → Allocation concealed",
            "1.3 = No/NI → No concerning baseline imbalance",
            "1.1 = Yes/NI → Random or plausibly random sequence",
        ],
        detail: None,
        explanation: "Randomization appears successful with no signs of bias.",
    },
];

static TABLE: RuleTable<Facts> = RuleTable {
    rules: &RULES,
    fallback: Fallback {
        trace: "No high-risk criteria met, but evidence is insufficient to confirm low risk",
        explanation:
            "Information is insufficient or ambiguous regarding randomization or concealment.",
    },
};

/// Randomization process: 1.1 → 1.2 → 1.3, no gates.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Randomization;

impl SignallingDomain for Randomization {
    fn key(&self) -> DomainKey {
        DomainKey::Randomization
    }

    fn questions(&self) -> &'static QuestionBank {
        &BANK
    }

    fn next_question(&self, state: &AnswerState) -> NextQuestion {
        first_unset(state, &["1.1", "1.2", "1.3"])
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

#[cfg(test)]
mod tests {
    use super::*;
    use Answer::*;

    fn state(answers: &[(&str, Answer)]) -> AnswerState {
        answers.iter().map(|(q, a)| (*q, *a)).collect()
    }

    #[test]
    fn asks_questions_in_fixed_order() {
        let domain = Randomization;
        assert_eq!(domain.next_question(&AnswerState::new()), NextQuestion::Ask("1.1"));
        assert_eq!(
            domain.next_question(&state(&[("1.1", NoInformation)])),
            NextQuestion::Ask("1.2")
        );
        assert_eq!(
            domain.next_question(&state(&[("1.1", No), ("1.2", No)])),
            NextQuestion::Ask("1.3")
        );
        assert!(domain
            .next_question(&state(&[("1.1", Yes), ("1.2", Yes), ("1.3", No)]))
            .is_done());
    }

    #[test]
    fn concealed_random_balanced_trial_is_low() {
        let decision =
            Randomization.evaluate(&state(&[("1.1", Yes), ("1.2", Yes), ("1.3", ProbablyNo)]));
        assert_eq!(decision.judgement, Judgement::Low);
        assert_eq!(decision.rule, "randomization_adequate");
        assert_eq!(decision.trace.len(), 3);
        assert_eq!(decision.trace[2].outcome, Some(Judgement::Low));
    }

    #[test]
    fn unconcealed_allocation_is_high_regardless_of_other_answers() {
        let decision = Randomization.evaluate(&state(&[("1.2", No)]));
        assert_eq!(decision.judgement, Judgement::High);
        assert_eq!(decision.rule, "allocation_not_concealed");
        assert_eq!(
            decision.explanation,
            "The allocation sequence was not adequately concealed."
        );
    }

    #[test]
    fn non_random_sequence_is_high() {
        let decision =
            Randomization.evaluate(&state(&[("1.1", ProbablyNo), ("1.2", Yes), ("1.3", Yes)]));
        assert_eq!(decision.rule, "sequence_not_random");
    }

    #[test]
    fn imbalance_with_undescribed_concealment_is_high() {
        let decision =
            Randomization.evaluate(&state(&[("1.1", Yes), ("1.2", NoInformation), ("1.3", Yes)]));
        assert_eq!(decision.judgement, Judgement::High);
        assert_eq!(decision.rule, "imbalance_with_unknown_concealment");
    }

    #[test]
    fn undescribed_concealment_without_imbalance_is_some_concerns() {
        let decision =
            Randomization.evaluate(&state(&[("1.1", Yes), ("1.2", NoInformation), ("1.3", No)]));
        assert_eq!(decision.judgement, Judgement::SomeConcerns);
    }

    #[test]
    fn empty_state_is_some_concerns() {
        let decision = Randomization.evaluate(&AnswerState::new());
        assert_eq!(decision.judgement, Judgement::SomeConcerns);
        assert_eq!(decision.trace.len(), 1);
    }

    #[test]
    fn outline_lists_high_rules_before_low() {
        let outline = Randomization.rule_outline();
        let ids: Vec<_> = outline.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "allocation_not_concealed",
                "sequence_not_random",
                "imbalance_with_unknown_concealment",
                "imbalance_with_non_random_sequence",
                "randomization_adequate",
                "default",
            ]
        );
    }
}
