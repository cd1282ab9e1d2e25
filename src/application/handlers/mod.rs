//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessStudyCommand, AssessStudyHandler, AssessStudyResult, AssessmentRunError,
    RunAssessmentCommand, RunAssessmentHandler, RunAssessmentResult,
};
