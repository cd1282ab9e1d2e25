//! Assessment battery: the five domains assessed for one study result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::DomainKey;

use super::{descriptor, DomainDescriptor};

/// Which effect Domain 2 assesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviationsEffect {
    /// Effect of assignment to intervention (intention-to-treat).
    #[default]
    Assignment,
    /// Effect of adhering to intervention (per-protocol).
    Adhering,
}

impl DeviationsEffect {
    /// Returns the registry key of the matching Domain 2 variant.
    pub fn domain_key(&self) -> DomainKey {
        match self {
            DeviationsEffect::Assignment => DomainKey::DeviationsAssignment,
            DeviationsEffect::Adhering => DomainKey::DeviationsAdhering,
        }
    }
}

impl fmt::Display for DeviationsEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviationsEffect::Assignment => write!(f, "assignment"),
            DeviationsEffect::Adhering => write!(f, "adhering"),
        }
    }
}

impl FromStr for DeviationsEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assignment" => Ok(DeviationsEffect::Assignment),
            "adhering" => Ok(DeviationsEffect::Adhering),
            other => Err(format!("unknown deviations effect '{}'", other)),
        }
    }
}

/// Ordered selection of one domain per instrument domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battery {
    deviations: DeviationsEffect,
}

impl Battery {
    pub fn new(deviations: DeviationsEffect) -> Self {
        Self { deviations }
    }

    /// The battery for the effect of assignment.
    pub fn standard() -> Self {
        Self::new(DeviationsEffect::Assignment)
    }

    pub fn deviations_effect(&self) -> DeviationsEffect {
        self.deviations
    }

    /// Returns the domain keys in instrument order.
    pub fn keys(&self) -> [DomainKey; 5] {
        [
            DomainKey::Randomization,
            self.deviations.domain_key(),
            DomainKey::MissingOutcomeData,
            DomainKey::OutcomeMeasurement,
            DomainKey::ReportedResultSelection,
        ]
    }

    /// Returns the registered descriptors in instrument order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static DomainDescriptor> {
        self.keys().into_iter().map(descriptor)
    }

    pub fn contains(&self, key: DomainKey) -> bool {
        self.keys().contains(&key)
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::standard()
    }
}
