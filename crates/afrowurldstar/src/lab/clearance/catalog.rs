use serde::Serialize;

use super::domain::{FactorId, Severity};

/// Highest reachable total: 40 + 35 + 25 + 30 + 40.
pub const MAX_SCORE: u16 = 170;

/// One selectable answer and the risk weight it carries.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: u8,
}

/// A scoring dimension with its ordered answer options.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RiskFactor {
    pub id: FactorId,
    pub label: &'static str,
    pub description: &'static str,
    pub options: [AnswerOption; 3],
}

impl RiskFactor {
    pub fn max_score(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.score)
            .max()
            .unwrap_or(0)
    }

    pub fn min_score(&self) -> u8 {
        self.options
            .iter()
            .map(|option| option.score)
            .min()
            .unwrap_or(0)
    }

    pub fn severity_of(&self, option: &AnswerOption) -> Severity {
        if option.score >= self.max_score() {
            Severity::High
        } else if option.score <= self.min_score() {
            Severity::Low
        } else {
            Severity::Moderate
        }
    }
}

pub static RISK_FACTORS: [RiskFactor; FactorId::COUNT] = [
    RiskFactor {
        id: FactorId::Originality,
        label: "1. Source Popularity",
        description: "Famous track = high scrutiny.",
        options: [
            AnswerOption {
                text: "Mainstream hit.",
                score: 40,
            },
            AnswerOption {
                text: "Niche/known track.",
                score: 20,
            },
            AnswerOption {
                text: "Obscure/library track.",
                score: 5,
            },
        ],
    },
    RiskFactor {
        id: FactorId::Length,
        label: "2. Sample Length",
        description: "Over 3 seconds or 4 bars is substantial.",
        options: [
            AnswerOption {
                text: "Substantial (>6 seconds).",
                score: 35,
            },
            AnswerOption {
                text: "Moderate (3-6 seconds).",
                score: 15,
            },
            AnswerOption {
                text: "Minimal (<2 seconds).",
                score: 0,
            },
        ],
    },
    RiskFactor {
        id: FactorId::Manipulation,
        label: "3. Sample Manipulation",
        description: "Heavy alteration reduces claim, but doesn't eliminate it.",
        options: [
            AnswerOption {
                text: "Untouched loop.",
                score: 25,
            },
            AnswerOption {
                text: "Pitched, chopped.",
                score: 10,
            },
            AnswerOption {
                text: "Unrecognizable.",
                score: 0,
            },
        ],
    },
    RiskFactor {
        id: FactorId::Usage,
        label: "4. Sample Usage",
        description: "If it's the main hook, risk is high.",
        options: [
            AnswerOption {
                text: "Main hook/chorus.",
                score: 30,
            },
            AnswerOption {
                text: "Background layer.",
                score: 15,
            },
            AnswerOption {
                text: "One-shot FX.",
                score: 5,
            },
        ],
    },
    RiskFactor {
        id: FactorId::Commercial,
        label: "5. Release Type",
        description: "Commercial intent is the primary trigger for legal action.",
        options: [
            AnswerOption {
                text: "Major commercial release.",
                score: 40,
            },
            AnswerOption {
                text: "Independent/mixtape release.",
                score: 20,
            },
            AnswerOption {
                text: "Non-profit, free release.",
                score: 0,
            },
        ],
    },
];
