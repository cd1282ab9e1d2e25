//! Semantic answer groupings used by gates and rules.
//!
//! Gating predicates and rule predicates never compare answers directly; they
//! test membership in one of these named groups. An unset slot is a member of
//! no group, so `UNKNOWN.contains(None)` is false.

use std::ops::BitOr;

use super::Answer;

/// A set of answer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerGroup {
    mask: u8,
}

/// Definitely yes or probably yes.
pub const AFFIRMATIVE: AnswerGroup =
    AnswerGroup::of(Answer::Yes).union(AnswerGroup::of(Answer::ProbablyYes));

/// Definitely no or probably no.
pub const NEGATIVE: AnswerGroup =
    AnswerGroup::of(Answer::No).union(AnswerGroup::of(Answer::ProbablyNo));

/// No information.
pub const UNKNOWN: AnswerGroup = AnswerGroup::of(Answer::NoInformation);

/// Not applicable.
pub const NOT_APPLICABLE: AnswerGroup = AnswerGroup::of(Answer::NotApplicable);

impl AnswerGroup {
    /// The group containing a single answer.
    pub const fn of(answer: Answer) -> Self {
        Self { mask: answer.bit() }
    }

    /// The union of two groups.
    pub const fn union(self, other: AnswerGroup) -> Self {
        Self {
            mask: self.mask | other.mask,
        }
    }

    /// Tests a slot. Unset slots are never members.
    pub fn contains(self, slot: Option<Answer>) -> bool {
        slot.map_or(false, |answer| self.includes(answer))
    }

    /// Tests a concrete answer.
    pub fn includes(self, answer: Answer) -> bool {
        self.mask & answer.bit() != 0
    }

    /// Returns the members in scale order.
    pub fn members(self) -> Vec<Answer> {
        Answer::all()
            .iter()
            .copied()
            .filter(|a| self.includes(*a))
            .collect()
    }
}

impl BitOr for AnswerGroup {
    type Output = AnswerGroup;

    fn bitor(self, rhs: AnswerGroup) -> AnswerGroup {
        self.union(rhs)
    }
}
