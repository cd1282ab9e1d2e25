//! DomainKey enum identifying the registered bias domains.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AssessmentError;

/// The registered bias domains, in instrument order.
///
/// Domain 2 has two instrument variants, one per effect of interest; both are
/// registered under their own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DomainKey {
    #[serde(rename = "domain_1_randomization")]
    Randomization,
    #[serde(rename = "domain_2_assignment")]
    DeviationsAssignment,
    #[serde(rename = "domain_2_adhering")]
    DeviationsAdhering,
    #[serde(rename = "domain_3_missing_data")]
    MissingOutcomeData,
    #[serde(rename = "domain_4_measurement")]
    OutcomeMeasurement,
    #[serde(rename = "domain_5_reporting")]
    ReportedResultSelection,
}

impl DomainKey {
    /// Returns all domain keys in registry order.
    pub fn all() -> &'static [DomainKey] {
        &[
            DomainKey::Randomization,
            DomainKey::DeviationsAssignment,
            DomainKey::DeviationsAdhering,
            DomainKey::MissingOutcomeData,
            DomainKey::OutcomeMeasurement,
            DomainKey::ReportedResultSelection,
        ]
    }

    /// Returns the registry slug.
    pub fn slug(&self) -> &'static str {
        match self {
            DomainKey::Randomization => "domain_1_randomization",
            DomainKey::DeviationsAssignment => "domain_2_assignment",
            DomainKey::DeviationsAdhering => "domain_2_adhering",
            DomainKey::MissingOutcomeData => "domain_3_missing_data",
            DomainKey::OutcomeMeasurement => "domain_4_measurement",
            DomainKey::ReportedResultSelection => "domain_5_reporting",
        }
    }

    /// Returns the report title.
    pub fn title(&self) -> &'static str {
        match self {
            DomainKey::Randomization => "Domain 1: Risk of Bias – Randomization Process",
            DomainKey::DeviationsAssignment => {
                "Domain 2: Risk of Bias – Effect of Assignment to Intervention"
            }
            DomainKey::DeviationsAdhering => {
                "Domain 2: Risk of Bias – Effect of Adhering to Intervention"
            }
            DomainKey::MissingOutcomeData => "Domain 3: Risk of Bias – Missing Outcome Data",
            DomainKey::OutcomeMeasurement => "Domain 4: Risk of Bias – Measurement of the Outcome",
            DomainKey::ReportedResultSelection => {
                "Domain 5: Risk of Bias – Selection of the Reported Result"
            }
        }
    }

    /// Returns the instrument domain number (1 to 5).
    pub fn instrument_domain(&self) -> u8 {
        match self {
            DomainKey::Randomization => 1,
            DomainKey::DeviationsAssignment | DomainKey::DeviationsAdhering => 2,
            DomainKey::MissingOutcomeData => 3,
            DomainKey::OutcomeMeasurement => 4,
            DomainKey::ReportedResultSelection => 5,
        }
    }
}

impl fmt::Display for DomainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for DomainKey {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim();
        // Older answer sheets spell the assignment key without the second 'n'.
        if slug == "domain_2_assigment" {
            return Ok(DomainKey::DeviationsAssignment);
        }
        DomainKey::all()
            .iter()
            .copied()
            .find(|key| key.slug() == slug)
            .ok_or_else(|| AssessmentError::unknown_domain(s))
    }
}
