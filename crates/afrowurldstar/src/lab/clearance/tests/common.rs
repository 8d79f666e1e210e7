use crate::lab::clearance::{AnswerState, FactorId, OptionChoice};

pub(super) fn choice(factor: FactorId, score: u8) -> OptionChoice {
    OptionChoice::from_score(factor, score).expect("score belongs to the catalog")
}

/// Answer state built from scores listed in catalog order.
pub(super) fn answers_from(scores: [Option<u8>; 5]) -> AnswerState {
    let mut state = AnswerState::new();
    for (factor, score) in FactorId::ALL.into_iter().zip(scores) {
        if let Some(score) = score {
            state.record(choice(factor, score));
        }
    }
    state
}

pub(super) fn complete_answers(scores: [u8; 5]) -> AnswerState {
    answers_from(scores.map(Some))
}
