use tracing::debug;

use super::answers::AnswerState;
use super::catalog::AnswerOption;
use super::domain::{ClearanceError, FactorId, OptionChoice};
use super::engine::{AggregateResult, ClearanceEngine};

/// Guided one-question-at-a-time session over the risk catalog.
///
/// Selecting an option always moves focus to the next factor by catalog
/// position, even when that factor is already answered; manual review goes
/// through [`toggle_focus`](Self::toggle_focus).
#[derive(Debug, Clone)]
pub struct SampleClearanceQuestionnaire {
    answers: AnswerState,
    focus: Option<FactorId>,
    engine: ClearanceEngine,
}

impl Default for SampleClearanceQuestionnaire {
    fn default() -> Self {
        Self::new(ClearanceEngine::default())
    }
}

impl SampleClearanceQuestionnaire {
    pub fn new(engine: ClearanceEngine) -> Self {
        Self {
            answers: AnswerState::new(),
            focus: Some(FactorId::first()),
            engine,
        }
    }

    pub fn answers(&self) -> &AnswerState {
        &self.answers
    }

    pub fn focus(&self) -> Option<FactorId> {
        self.focus
    }

    pub fn is_expanded(&self, factor: FactorId) -> bool {
        self.focus == Some(factor)
    }

    pub fn selected_option(&self, factor: FactorId) -> Option<&'static AnswerOption> {
        self.answers.choice(factor).map(|choice| choice.option())
    }

    pub fn result(&self) -> AggregateResult {
        self.engine.evaluate(&self.answers)
    }

    /// Records `choice` and advances focus. Returns the refreshed result.
    pub fn select(&mut self, choice: OptionChoice) -> AggregateResult {
        let factor = choice.factor();
        self.answers.record(choice);
        self.focus = factor.next();
        debug!(
            factor = %factor,
            score = choice.score(),
            focus = ?self.focus,
            "recorded clearance answer"
        );
        self.result()
    }

    /// Raw variant of [`select`](Self::select) for callers holding a factor
    /// key and score. Rejected input leaves the session unchanged.
    pub fn select_option(
        &mut self,
        factor_key: &str,
        score: u8,
    ) -> Result<AggregateResult, ClearanceError> {
        let choice = OptionChoice::resolve(factor_key, score)?;
        Ok(self.select(choice))
    }

    pub fn toggle_focus(&mut self, factor: FactorId) {
        self.focus = if self.focus == Some(factor) {
            None
        } else {
            Some(factor)
        };
        debug!(factor = %factor, focus = ?self.focus, "toggled clearance focus");
    }

    pub fn reset_all(&mut self) -> AggregateResult {
        self.answers = AnswerState::new();
        self.focus = Some(FactorId::first());
        debug!("reset clearance questionnaire");
        self.result()
    }
}
