use super::common::*;
use crate::lab::clearance::{
    ClearanceError, FactorId, RiskLevel, SampleClearanceQuestionnaire,
};

#[test]
fn starts_focused_on_first_factor() {
    let session = SampleClearanceQuestionnaire::default();

    assert_eq!(session.focus(), Some(FactorId::Originality));
    assert!(session.is_expanded(FactorId::Originality));
    assert_eq!(session.answers().answered_count(), 0);
    assert_eq!(session.result().level, RiskLevel::Incomplete);
}

#[test]
fn selecting_advances_focus_by_position() {
    let mut session = SampleClearanceQuestionnaire::default();

    for (factor, expected_next) in FactorId::ALL.into_iter().zip(FactorId::ALL.into_iter().skip(1))
    {
        session.select(choice(factor, factor.factor().options[1].score));
        assert_eq!(session.focus(), Some(expected_next));
    }

    let result = session.select(choice(FactorId::Commercial, 20));
    assert_eq!(session.focus(), None);
    assert!(result.complete);
    assert_eq!(result.total_score, 20 + 15 + 10 + 15 + 20);
    assert_eq!(result.level, RiskLevel::Medium);
}

#[test]
fn advance_does_not_skip_answered_factors() {
    let mut session = SampleClearanceQuestionnaire::default();
    session.select(choice(FactorId::Originality, 40));
    session.select(choice(FactorId::Length, 35));

    session.toggle_focus(FactorId::Originality);
    session.select(choice(FactorId::Originality, 5));

    assert_eq!(session.focus(), Some(FactorId::Length));
    assert_eq!(session.answers().score(FactorId::Length), Some(35));
    assert_eq!(session.result().total_score, 40);
}

#[test]
fn toggle_collapses_and_expands() {
    let mut session = SampleClearanceQuestionnaire::default();

    session.toggle_focus(FactorId::Originality);
    assert_eq!(session.focus(), None);

    session.toggle_focus(FactorId::Usage);
    assert_eq!(session.focus(), Some(FactorId::Usage));

    session.toggle_focus(FactorId::Length);
    assert_eq!(session.focus(), Some(FactorId::Length));
}

#[test]
fn selecting_from_collapsed_state_still_advances() {
    let mut session = SampleClearanceQuestionnaire::default();
    session.toggle_focus(FactorId::Originality);

    session.select(choice(FactorId::Manipulation, 0));

    assert_eq!(session.focus(), Some(FactorId::Usage));
}

#[test]
fn reset_clears_answers_and_refocuses() {
    let mut session = SampleClearanceQuestionnaire::default();
    for score in [40, 35, 25, 30, 40] {
        let factor = session.focus().expect("a factor is focused");
        session.select(choice(factor, score));
    }
    assert_eq!(session.result().level, RiskLevel::High);

    let result = session.reset_all();

    assert!(!result.complete);
    assert_eq!(result.total_score, 0);
    assert_eq!(session.focus(), Some(FactorId::Originality));
    assert!(session.selected_option(FactorId::Usage).is_none());
}

#[test]
fn raw_selection_rejects_out_of_catalog_values() {
    let mut session = SampleClearanceQuestionnaire::default();

    let err = session
        .select_option("usage", 12)
        .expect_err("12 is not a usage weight");
    assert_eq!(
        err,
        ClearanceError::InvalidOption {
            factor: FactorId::Usage,
            score: 12
        }
    );
    let err = session
        .select_option("vibe", 5)
        .expect_err("vibe is not a factor");
    assert!(matches!(err, ClearanceError::InvalidFactor(_)));

    assert_eq!(session.focus(), Some(FactorId::Originality));
    assert_eq!(session.answers().answered_count(), 0);

    let result = session
        .select_option("usage", 15)
        .expect("background layer is a catalog option");
    assert_eq!(result.total_score, 15);
    assert_eq!(
        session.selected_option(FactorId::Usage).map(|option| option.text),
        Some("Background layer.")
    );
    assert_eq!(session.focus(), Some(FactorId::Commercial));
}
