//! Answer enum representing the signalling question response scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AssessmentError;

/// Response to a single signalling question.
///
/// The five scale values are accepted by every domain. `NotApplicable` is only
/// accepted by questions that declare it (see [`super::Question`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "PY")]
    ProbablyYes,
    #[serde(rename = "NI")]
    NoInformation,
    #[serde(rename = "PN")]
    ProbablyNo,
    #[serde(rename = "N")]
    No,
    #[serde(rename = "NA")]
    NotApplicable,
}

impl Answer {
    /// The five-valued scale shared by all domains, most affirmative first.
    pub const SCALE: [Answer; 5] = [
        Answer::Yes,
        Answer::ProbablyYes,
        Answer::NoInformation,
        Answer::ProbablyNo,
        Answer::No,
    ];

    /// Returns every answer value, including `NotApplicable`.
    pub fn all() -> &'static [Answer] {
        &[
            Answer::Yes,
            Answer::ProbablyYes,
            Answer::NoInformation,
            Answer::ProbablyNo,
            Answer::No,
            Answer::NotApplicable,
        ]
    }

    /// Returns the short instrument code (`Y`, `PY`, `NI`, `PN`, `N`, `NA`).
    pub fn code(&self) -> &'static str {
        match self {
            Answer::Yes => "Y",
            Answer::ProbablyYes => "PY",
            Answer::NoInformation => "NI",
            Answer::ProbablyNo => "PN",
            Answer::No => "N",
            Answer::NotApplicable => "NA",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::ProbablyYes => "Probably Yes",
            Answer::NoInformation => "No Information",
            Answer::ProbablyNo => "Probably No",
            Answer::No => "No",
            Answer::NotApplicable => "Not Applicable",
        }
    }

    /// Parses an instrument code. Matching ignores case and surrounding whitespace.
    pub fn from_code(raw: &str) -> Option<Answer> {
        let code = raw.trim().to_ascii_uppercase();
        Answer::all().iter().copied().find(|a| a.code() == code)
    }

    /// Returns true if the value is on the five-valued scale.
    pub fn is_on_scale(&self) -> bool {
        !matches!(self, Answer::NotApplicable)
    }

    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Answer {
    type Err = AssessmentError;

    /// Parses a bare code. The error carries no question context; callers that
    /// know the slot should prefer [`super::AnswerState::record_code`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Answer::from_code(s).ok_or_else(|| {
            AssessmentError::invalid_answer("?", format!("'{}' is not an answer code", s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_has_five_values_without_not_applicable() {
        assert_eq!(Answer::SCALE.len(), 5);
        assert!(!Answer::SCALE.contains(&Answer::NotApplicable));
    }

    #[test]
    fn all_includes_not_applicable() {
        assert_eq!(Answer::all().len(), 6);
        assert!(Answer::all().contains(&Answer::NotApplicable));
    }

    #[test]
    fn from_code_accepts_every_code() {
        for answer in Answer::all() {
            assert_eq!(Answer::from_code(answer.code()), Some(*answer));
        }
    }

    #[test]
    fn from_code_is_case_insensitive_and_trims() {
        assert_eq!(Answer::from_code(" py "), Some(Answer::ProbablyYes));
        assert_eq!(Answer::from_code("ni"), Some(Answer::NoInformation));
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert_eq!(Answer::from_code("maybe"), None);
        assert_eq!(Answer::from_code(""), None);
    }

    #[test]
    fn from_str_reports_invalid_answer() {
        let err = "YES!".parse::<Answer>().unwrap_err();
        assert!(matches!(err, AssessmentError::InvalidAnswer { .. }));
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u8;
        for answer in Answer::all() {
            assert_eq!(seen & answer.bit(), 0);
            seen |= answer.bit();
        }
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", Answer::ProbablyNo), "PN");
    }

    #[test]
    fn serializes_to_instrument_code() {
        let json = serde_json::to_string(&Answer::ProbablyYes).unwrap();
        assert_eq!(json, "\"PY\"");

        let answer: Answer = serde_json::from_str("\"NA\"").unwrap();
        assert_eq!(answer, Answer::NotApplicable);
    }
}
