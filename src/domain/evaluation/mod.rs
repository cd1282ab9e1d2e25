//! Evaluation module - rule tables, decision traces and assessment results.
//!
//! Every domain evaluator is expressed as data: an ordered `RuleTable` of
//! (predicate, outcome, trace, explanation) entries plus a Some-concerns
//! fallback. Nothing here knows about individual domains.

mod result;
mod rule;
mod trace;

pub use result::AssessmentResult;
pub use rule::{Decision, Fallback, Rule, RuleSummary, RuleTable, DEFAULT_RULE};
pub use trace::TraceEntry;
