mod config;
pub(crate) mod policy;

pub use config::RiskThresholds;
pub use policy::RiskLevel;

use super::answers::AnswerState;
use super::catalog::MAX_SCORE;
use super::domain::FactorId;
use policy::classify;
use serde::Serialize;

/// Stateless evaluator that applies the thresholds to an answer state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearanceEngine {
    thresholds: RiskThresholds,
}

impl ClearanceEngine {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn evaluate(&self, answers: &AnswerState) -> AggregateResult {
        let components: Vec<ScoreComponent> = FactorId::ALL
            .into_iter()
            .filter_map(|factor| answers.choice(factor))
            .map(|choice| ScoreComponent {
                factor: choice.factor(),
                score: choice.score(),
                answer: choice.option().text,
            })
            .collect();

        let total_score = components
            .iter()
            .map(|component| u16::from(component.score))
            .sum();
        let complete = answers.is_complete();

        AggregateResult {
            total_score,
            max_score: MAX_SCORE,
            complete,
            level: classify(total_score, complete, &self.thresholds),
            components,
        }
    }
}

/// Evaluates `answers` against the standard thresholds.
pub fn compute_result(answers: &AnswerState) -> AggregateResult {
    ClearanceEngine::default().evaluate(answers)
}

/// Weight contributed by one answered factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: FactorId,
    pub score: u8,
    pub answer: &'static str,
}

/// Derived view of an answer state. Never stored, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    pub total_score: u16,
    pub max_score: u16,
    pub complete: bool,
    pub level: RiskLevel,
    pub components: Vec<ScoreComponent>,
}

impl AggregateResult {
    /// "score / max", only once every factor is answered.
    pub fn display_score(&self) -> Option<String> {
        self.complete
            .then(|| format!("{} / {}", self.total_score, self.max_score))
    }
}
