use serde::{Deserialize, Serialize};

/// Inclusive upper bounds of the LOW and MEDIUM bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub low: u16,
    pub medium: u16,
}

impl RiskThresholds {
    pub const STANDARD: RiskThresholds = RiskThresholds { low: 40, medium: 85 };
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}
