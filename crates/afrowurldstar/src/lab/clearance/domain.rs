use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::{AnswerOption, RiskFactor, RISK_FACTORS};

/// Closed set of scoring dimensions, declared in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorId {
    Originality,
    Length,
    Manipulation,
    Usage,
    Commercial,
}

impl FactorId {
    pub const COUNT: usize = 5;

    pub const ALL: [FactorId; FactorId::COUNT] = [
        FactorId::Originality,
        FactorId::Length,
        FactorId::Manipulation,
        FactorId::Usage,
        FactorId::Commercial,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FactorId::Originality => "originality",
            FactorId::Length => "length",
            FactorId::Manipulation => "manipulation",
            FactorId::Usage => "usage",
            FactorId::Commercial => "commercial",
        }
    }

    /// Position in catalog order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn first() -> Self {
        FactorId::ALL[0]
    }

    pub fn next(&self) -> Option<Self> {
        FactorId::ALL.get(self.index() + 1).copied()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn factor(&self) -> &'static RiskFactor {
        &RISK_FACTORS[self.index()]
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FactorId {
    type Err = ClearanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        FactorId::ALL
            .into_iter()
            .find(|id| id.key() == needle)
            .ok_or_else(|| ClearanceError::InvalidFactor(value.to_string()))
    }
}

/// Input validation failures for raw factor keys and scores.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClearanceError {
    #[error("unknown risk factor '{0}'")]
    InvalidFactor(String),
    #[error("score {score} is not an option of factor '{factor}'")]
    InvalidOption { factor: FactorId, score: u8 },
    #[error("factor '{factor}' has no option #{position}")]
    InvalidOptionPosition { factor: FactorId, position: usize },
}

/// Severity band of an option, derived from its rank within the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Moderate,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Moderate => "moderate",
            Severity::Low => "low",
        }
    }
}

/// Validated reference to one option of one factor. Only catalog weights can
/// be carried into an answer state through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionChoice {
    factor: FactorId,
    option_index: usize,
}

impl OptionChoice {
    /// Picks an option by its 1-based position in the factor's list.
    pub fn at_position(factor: FactorId, position: usize) -> Result<Self, ClearanceError> {
        let options = &factor.factor().options;
        if position == 0 || position > options.len() {
            return Err(ClearanceError::InvalidOptionPosition { factor, position });
        }
        Ok(Self {
            factor,
            option_index: position - 1,
        })
    }

    /// Picks the option carrying `score`.
    pub fn from_score(factor: FactorId, score: u8) -> Result<Self, ClearanceError> {
        factor
            .factor()
            .options
            .iter()
            .position(|option| option.score == score)
            .map(|option_index| Self {
                factor,
                option_index,
            })
            .ok_or(ClearanceError::InvalidOption { factor, score })
    }

    /// Resolves a raw factor key and score as emitted by a front end.
    pub fn resolve(factor_key: &str, score: u8) -> Result<Self, ClearanceError> {
        let factor = factor_key.parse::<FactorId>()?;
        Self::from_score(factor, score)
    }

    pub fn factor(&self) -> FactorId {
        self.factor
    }

    pub fn option(&self) -> &'static AnswerOption {
        &self.factor.factor().options[self.option_index]
    }

    pub fn score(&self) -> u8 {
        self.option().score
    }

    pub fn severity(&self) -> Severity {
        self.factor.factor().severity_of(self.option())
    }
}
