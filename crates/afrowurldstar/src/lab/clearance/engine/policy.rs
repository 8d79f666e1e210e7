use super::config::RiskThresholds;
use serde::{Deserialize, Serialize};

/// Clearance risk tier shown in the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Incomplete,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Incomplete => "Incomplete",
            RiskLevel::Low => "LOW RISK",
            RiskLevel::Medium => "MEDIUM RISK",
            RiskLevel::High => "HIGH RISK",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RiskLevel::Incomplete => "Answer all questions to get your risk analysis.",
            RiskLevel::Low => "Low risk. Document your process thoroughly.",
            RiskLevel::Medium => "Medium risk. Seek permission or re-create the part.",
            RiskLevel::High => "STOP. Highly likely to result in a copyright claim.",
        }
    }
}

pub(crate) fn classify(total_score: u16, complete: bool, thresholds: &RiskThresholds) -> RiskLevel {
    if !complete {
        return RiskLevel::Incomplete;
    }

    if total_score <= thresholds.low {
        RiskLevel::Low
    } else if total_score <= thresholds.medium {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
