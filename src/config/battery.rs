//! Assessment battery configuration

use serde::Deserialize;

use crate::domain::instrument::{Battery, DeviationsEffect};

/// Which domains a whole-study assessment runs.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct BatteryConfig {
    /// Domain 2 variant: `assignment` (default) or `adhering`
    #[serde(default)]
    pub deviations_effect: DeviationsEffect,
}

impl BatteryConfig {
    /// Builds the configured battery.
    pub fn battery(&self) -> Battery {
        Battery::new(self.deviations_effect)
    }
}
