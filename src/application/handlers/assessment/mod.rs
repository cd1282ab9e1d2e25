//! Assessment command handlers.
//!
//! Handlers that drive domain sequencers against an answer source and
//! evaluate the collected answers.

mod assess_study;
mod run_assessment;

pub use assess_study::{AssessStudyCommand, AssessStudyHandler, AssessStudyResult};
pub use run_assessment::{
    AssessmentRunError, RunAssessmentCommand, RunAssessmentHandler, RunAssessmentResult,
};
