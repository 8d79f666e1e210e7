//! Sample clearance risk analyzer: a fixed five-factor catalog, a pure
//! scoring engine and the guided questionnaire that drives it.

mod answers;
mod catalog;
mod domain;
pub(crate) mod engine;
mod questionnaire;

#[cfg(test)]
mod tests;

pub use answers::AnswerState;
pub use catalog::{AnswerOption, RiskFactor, MAX_SCORE, RISK_FACTORS};
pub use domain::{ClearanceError, FactorId, OptionChoice, Severity};
pub use engine::{
    compute_result, AggregateResult, ClearanceEngine, RiskLevel, RiskThresholds, ScoreComponent,
};
pub use questionnaire::SampleClearanceQuestionnaire;

/// Fresh answer state with every factor unanswered.
pub fn reset() -> AnswerState {
    AnswerState::new()
}
