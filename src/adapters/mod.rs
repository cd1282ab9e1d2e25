//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the engine to external collaborators:
//! - `answers` - Answer sources (answer sheets, scripted answers)

pub mod answers;

pub use answers::{AnswerSheet, AnswerSheetError, ScriptedAnswerSource};
