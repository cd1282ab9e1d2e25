//! Instrument module - the bias domains of the assessment tool.
//!
//! This module defines:
//! - The SignallingDomain trait every domain implements
//! - The six concrete domains (Domain 2 has two effect variants)
//! - The DomainVariant enum for dispatch over the closed set of domains
//! - The DomainDescriptor registry and the assessment Battery
//!
//! Only descriptors are public. They validate answers against the question
//! bank before any domain sees them, so the domains themselves stay private:
//!
//! ```compile_fail
//! use rob2_engine::domain::instrument::Randomization;
//! ```

mod battery;
mod deviations_adhering;
mod deviations_assignment;
mod domain_variant;
mod measurement;
mod missing_data;
mod randomization;
mod registry;
mod reporting;
mod signalling_domain;

pub use battery::{Battery, DeviationsEffect};
pub use registry::{descriptor, get_domain, list_domains, DomainDescriptor};
pub use signalling_domain::NextQuestion;

pub(crate) use deviations_adhering::DeviationsAdhering;
pub(crate) use deviations_assignment::DeviationsAssignment;
pub(crate) use domain_variant::DomainVariant;
pub(crate) use measurement::OutcomeMeasurement;
pub(crate) use missing_data::MissingOutcomeData;
pub(crate) use randomization::Randomization;
pub(crate) use reporting::ReportedResultSelection;
pub(crate) use signalling_domain::SignallingDomain;
