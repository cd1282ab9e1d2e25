//! AssessStudyHandler - Command handler for assessing every domain of a study.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::evaluation::AssessmentResult;
use crate::domain::foundation::{AnswerState, DomainKey};
use crate::domain::instrument::Battery;
use crate::ports::AnswerSource;

use super::{AssessmentRunError, RunAssessmentCommand, RunAssessmentHandler, RunAssessmentResult};

/// Command to assess one study result with the configured battery.
#[derive(Debug, Clone, Default)]
pub struct AssessStudyCommand {
    /// Study label carried into the result.
    pub study: Option<String>,
    /// Answers already collected, per domain.
    pub initial: BTreeMap<DomainKey, AnswerState>,
}

impl AssessStudyCommand {
    pub fn new(study: impl Into<String>) -> Self {
        Self {
            study: Some(study.into()),
            initial: BTreeMap::new(),
        }
    }
}

/// Per-domain outcomes in battery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessStudyResult {
    pub study: Option<String>,
    pub domains: Vec<RunAssessmentResult>,
}

impl AssessStudyResult {
    /// Results only, in battery order.
    pub fn results(&self) -> impl Iterator<Item = &AssessmentResult> {
        self.domains.iter().map(|run| &run.result)
    }

    pub fn result_for(&self, key: DomainKey) -> Option<&AssessmentResult> {
        self.results().find(|result| result.domain == key)
    }

    /// Plain-text report of every domain.
    pub fn render(&self) -> String {
        self.results()
            .map(AssessmentResult::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Handler for whole-study assessments.
pub struct AssessStudyHandler {
    battery: Battery,
    runner: RunAssessmentHandler,
}

impl AssessStudyHandler {
    pub fn new(battery: Battery, answer_source: Arc<dyn AnswerSource>) -> Self {
        Self {
            battery,
            runner: RunAssessmentHandler::new(answer_source),
        }
    }

    pub fn battery(&self) -> Battery {
        self.battery
    }

    /// Runs every battery domain in order; stops at the first failure.
    pub fn handle(&self, mut cmd: AssessStudyCommand) -> Result<AssessStudyResult, AssessmentRunError> {
        let mut domains = Vec::with_capacity(5);

        for key in self.battery.keys() {
            let initial = cmd.initial.remove(&key).unwrap_or_default();
            let run = self
                .runner
                .handle(RunAssessmentCommand::new(key).with_answers(initial))?;
            domains.push(run);
        }

        info!(
            study = cmd.study.as_deref().unwrap_or("-"),
            deviations_effect = %self.battery.deviations_effect(),
            "Study assessment complete"
        );

        Ok(AssessStudyResult {
            study: cmd.study,
            domains,
        })
    }
}
