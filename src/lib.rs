//! RoB 2 Engine - Risk of Bias decision engine
//!
//! This crate implements the signalling-question instrument for assessing risk
//! of bias in randomized trials: per-domain question sequencers that decide
//! which question comes next, and precedence-ordered rule tables that turn the
//! collected answers into a judgement with a decision trace.
//!
//! ```
//! use rob2_engine::domain::foundation::{Answer, AnswerState, Judgement};
//! use rob2_engine::domain::instrument::get_domain;
//!
//! let domain = get_domain("domain_1_randomization").unwrap();
//! let answers = AnswerState::new()
//!     .with("1.1", Answer::Yes)
//!     .with("1.2", Answer::Yes)
//!     .with("1.3", Answer::ProbablyNo);
//!
//! let result = domain.evaluate(&answers).unwrap();
//! assert_eq!(result.judgement, Judgement::Low);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
