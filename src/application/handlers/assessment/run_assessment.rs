//! RunAssessmentHandler - Command handler for assessing one domain.
//!
//! Drives the domain's sequencer against an `AnswerSource` until every
//! reachable question has an answer, then evaluates the collected answers.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::domain::evaluation::AssessmentResult;
use crate::domain::foundation::{AnswerState, AssessmentError, DomainKey};
use crate::domain::instrument::{descriptor, DomainDescriptor, NextQuestion};
use crate::ports::{AnswerSource, AnswerSourceError};

/// Command to assess one domain.
#[derive(Debug, Clone)]
pub struct RunAssessmentCommand {
    /// Domain to assess.
    pub domain: DomainKey,
    /// Answers already collected; these are never asked again.
    pub initial: AnswerState,
}

impl RunAssessmentCommand {
    pub fn new(domain: DomainKey) -> Self {
        Self {
            domain,
            initial: AnswerState::new(),
        }
    }

    pub fn with_answers(mut self, answers: AnswerState) -> Self {
        self.initial = answers;
        self
    }
}

/// Result of a completed domain assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunAssessmentResult {
    pub result: AssessmentResult,
    /// Final answer state; gated questions that were skipped stay unset.
    pub answers: AnswerState,
    /// Question codes asked of the source, in order.
    pub asked: Vec<String>,
}

/// Error type for domain assessment runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentRunError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Answer source failed: {0}")]
    Source(#[from] AnswerSourceError),

    #[error("Sequencer for {domain} did not settle (asked {question} again)")]
    Stalled { domain: DomainKey, question: String },
}

/// Handler for single-domain assessments.
pub struct RunAssessmentHandler {
    answer_source: Arc<dyn AnswerSource>,
}

impl RunAssessmentHandler {
    pub fn new(answer_source: Arc<dyn AnswerSource>) -> Self {
        Self { answer_source }
    }

    pub fn handle(
        &self,
        cmd: RunAssessmentCommand,
    ) -> Result<RunAssessmentResult, AssessmentRunError> {
        let domain = descriptor(cmd.domain);
        let mut answers = cmd.initial;
        let asked = self.collect(domain, &mut answers)?;

        let result = domain.evaluate(&answers)?;
        debug!(
            domain = %domain.key(),
            asked = asked.len(),
            judgement = %result.judgement,
            "Domain assessment complete"
        );

        Ok(RunAssessmentResult {
            result,
            answers,
            asked,
        })
    }

    /// Asks questions until the sequencer reports done.
    fn collect(
        &self,
        domain: &DomainDescriptor,
        answers: &mut AnswerState,
    ) -> Result<Vec<String>, AssessmentRunError> {
        let mut asked: Vec<String> = Vec::new();

        // Each step answers a distinct question, so a bank of n questions
        // settles in at most n steps.
        for _ in 0..=domain.questions().len() {
            let code = match domain.next_question(answers)? {
                NextQuestion::Done => return Ok(asked),
                NextQuestion::Ask(code) => code,
            };

            if asked.iter().any(|prior| prior == code) || answers.is_set(code) {
                warn!(domain = %domain.key(), question = code, "Sequencer repeated a question");
                return Err(AssessmentRunError::Stalled {
                    domain: domain.key(),
                    question: code.to_string(),
                });
            }

            let question = domain.question(code)?;
            let answer = self.answer_source.answer(domain, question)?;
            if !question.accepts(answer) {
                return Err(AssessmentError::invalid_answer(
                    code,
                    format!("'{}' is not accepted for this question", answer.code()),
                )
                .into());
            }

            trace!(domain = %domain.key(), question = code, answer = %answer, "Recorded answer");
            answers.record(code, answer);
            asked.push(code.to_string());
        }

        let question = domain
            .next_question(answers)?
            .code()
            .unwrap_or_default()
            .to_string();
        Err(AssessmentRunError::Stalled {
            domain: domain.key(),
            question,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Answer, Judgement, Question};

    /// Answers from a fixed table; anything else is `NI`.
    struct TableSource(Vec<(&'static str, Answer)>);

    impl AnswerSource for TableSource {
        fn answer(
            &self,
            _domain: &DomainDescriptor,
            question: &Question,
        ) -> Result<Answer, AnswerSourceError> {
            Ok(self
                .0
                .iter()
                .find(|(code, _)| *code == question.code)
                .map(|(_, answer)| *answer)
                .unwrap_or(Answer::NoInformation))
        }
    }

    struct FailingSource;

    impl AnswerSource for FailingSource {
        fn answer(
            &self,
            _domain: &DomainDescriptor,
            _question: &Question,
        ) -> Result<Answer, AnswerSourceError> {
            Err(AnswerSourceError::Other("reviewer walked away".to_string()))
        }
    }

    fn handler(source: impl AnswerSource + 'static) -> RunAssessmentHandler {
        RunAssessmentHandler::new(Arc::new(source))
    }

    #[test]
    fn randomization_runs_all_three_questions() {
        let source = TableSource(vec![
            ("1.1", Answer::Yes),
            ("1.2", Answer::Yes),
            ("1.3", Answer::ProbablyNo),
        ]);
        let run = handler(source)
            .handle(RunAssessmentCommand::new(DomainKey::Randomization))
            .unwrap();

        assert_eq!(run.asked, vec!["1.1", "1.2", "1.3"]);
        assert_eq!(run.result.judgement, Judgement::Low);
    }

    #[test]
    fn gated_questions_are_skipped_and_stay_unset() {
        let source = TableSource(vec![("3.1", Answer::Yes)]);
        let run = handler(source)
            .handle(RunAssessmentCommand::new(DomainKey::MissingOutcomeData))
            .unwrap();

        assert_eq!(run.asked, vec!["3.1"]);
        assert!(!run.answers.is_set("3.2"));
        assert_eq!(run.result.judgement, Judgement::Low);
    }

    #[test]
    fn initial_answers_are_not_asked_again() {
        let initial = AnswerState::new()
            .with("5.1", Answer::No)
            .with("5.2", Answer::Yes);
        let run = handler(TableSource(vec![("5.3", Answer::Yes)]))
            .handle(RunAssessmentCommand::new(DomainKey::ReportedResultSelection).with_answers(initial))
            .unwrap();

        assert_eq!(run.asked, vec!["5.3"]);
        assert_eq!(run.result.judgement, Judgement::High);
    }

    #[test]
    fn source_failure_is_propagated() {
        let err = handler(FailingSource)
            .handle(RunAssessmentCommand::new(DomainKey::Randomization))
            .unwrap_err();
        assert!(matches!(err, AssessmentRunError::Source(AnswerSourceError::Other(_))));
    }

    #[test]
    fn not_applicable_is_rejected_where_not_allowed() {
        let source = TableSource(vec![("4.1", Answer::NotApplicable)]);
        let err = handler(source)
            .handle(RunAssessmentCommand::new(DomainKey::OutcomeMeasurement))
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentRunError::Assessment(AssessmentError::InvalidAnswer { ref question, .. })
                if question == "4.1"
        ));
    }

    #[test]
    fn invalid_initial_state_is_rejected_before_asking() {
        let initial = AnswerState::new().with("9.9", Answer::Yes);
        let err = handler(FailingSource)
            .handle(RunAssessmentCommand::new(DomainKey::Randomization).with_answers(initial))
            .unwrap_err();
        assert!(matches!(err, AssessmentRunError::Assessment(_)));
    }

    #[test]
    fn adhering_domain_accepts_not_applicable_answers() {
        let source = TableSource(vec![
            ("2.1", Answer::Yes),
            ("2.2", Answer::No),
            ("2.3", Answer::NotApplicable),
            ("2.4", Answer::NotApplicable),
            ("2.5", Answer::No),
        ]);
        let run = handler(source)
            .handle(RunAssessmentCommand::new(DomainKey::DeviationsAdhering))
            .unwrap();

        assert_eq!(run.asked, vec!["2.1", "2.2", "2.3", "2.4", "2.5"]);
        assert_eq!(run.result.judgement, Judgement::Low);
    }
}
