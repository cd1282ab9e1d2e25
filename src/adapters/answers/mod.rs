//! Answer Source Adapters
//!
//! Implementations of the AnswerSource port.
//!
//! ## Available Adapters
//!
//! - **AnswerSheet** - A study's pre-collected answers, loaded from YAML or JSON
//! - **ScriptedAnswerSource** - In-memory answer scripts (testing/batch runs)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::answers::{AnswerSheet, ScriptedAnswerSource};
//!
//! // Batch: answers collected ahead of time
//! let sheet = AnswerSheet::from_path("./studies/trial-042.yaml")?;
//!
//! // Testing: the same answer everywhere
//! let source = ScriptedAnswerSource::uniform(Answer::NoInformation);
//! ```

mod answer_sheet;
mod scripted_answer_source;

pub use answer_sheet::{AnswerSheet, AnswerSheetError};
pub use scripted_answer_source::ScriptedAnswerSource;
