//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AnswerSource` - Supplies answers to signalling questions

mod answer_source;

pub use answer_source::{AnswerSource, AnswerSourceError};
