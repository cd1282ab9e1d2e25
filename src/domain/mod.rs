//! Domain layer containing the assessment logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (answers, groupings, answer state, question banks, errors)
//! - `evaluation` - Rule tables, decision traces and assessment results
//! - `instrument` - The bias domains, their registry and the assessment battery

pub mod evaluation;
pub mod foundation;
pub mod instrument;
