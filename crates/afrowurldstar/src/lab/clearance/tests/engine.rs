use super::common::*;
use crate::lab::clearance::engine::policy::classify;
use crate::lab::clearance::{
    compute_result, ClearanceEngine, FactorId, RiskLevel, RiskThresholds, MAX_SCORE,
};

#[test]
fn partial_answers_sum_but_stay_incomplete() {
    let answers = answers_from([Some(40), None, Some(25), None, Some(40)]);

    let result = compute_result(&answers);

    assert_eq!(result.total_score, 105);
    assert!(!result.complete);
    assert_eq!(result.level, RiskLevel::Incomplete);
    assert_eq!(result.display_score(), None);
    let factors: Vec<FactorId> = result.components.iter().map(|c| c.factor).collect();
    assert_eq!(
        factors,
        vec![
            FactorId::Originality,
            FactorId::Manipulation,
            FactorId::Commercial
        ]
    );
}

#[test]
fn empty_state_scores_zero() {
    let result = compute_result(&answers_from([None; 5]));
    assert_eq!(result.total_score, 0);
    assert!(result.components.is_empty());
    assert_eq!(result.level, RiskLevel::Incomplete);
}

#[test]
fn policy_band_edges() {
    let thresholds = RiskThresholds::STANDARD;
    assert_eq!(classify(40, true, &thresholds), RiskLevel::Low);
    assert_eq!(classify(41, true, &thresholds), RiskLevel::Medium);
    assert_eq!(classify(85, true, &thresholds), RiskLevel::Medium);
    assert_eq!(classify(86, true, &thresholds), RiskLevel::High);
    assert_eq!(classify(10, false, &thresholds), RiskLevel::Incomplete);
}

#[test]
fn catalog_totals_around_the_low_edge() {
    let at_edge = compute_result(&complete_answers([20, 15, 0, 5, 0]));
    assert_eq!(at_edge.total_score, 40);
    assert_eq!(at_edge.level, RiskLevel::Low);

    let above = compute_result(&complete_answers([5, 35, 0, 5, 0]));
    assert_eq!(above.total_score, 45);
    assert_eq!(above.level, RiskLevel::Medium);
}

#[test]
fn catalog_totals_around_the_medium_edge() {
    let at_edge = compute_result(&complete_answers([40, 15, 0, 30, 0]));
    assert_eq!(at_edge.total_score, 85);
    assert_eq!(at_edge.level, RiskLevel::Medium);

    let above = compute_result(&complete_answers([40, 35, 0, 15, 0]));
    assert_eq!(above.total_score, 90);
    assert_eq!(above.level, RiskLevel::High);
}

#[test]
fn maximum_and_minimum_scores() {
    let max = compute_result(&complete_answers([40, 35, 25, 30, 40]));
    assert_eq!(max.total_score, MAX_SCORE);
    assert_eq!(max.level, RiskLevel::High);
    assert_eq!(max.display_score().as_deref(), Some("170 / 170"));

    let min = compute_result(&complete_answers([5, 0, 0, 5, 0]));
    assert_eq!(min.total_score, 10);
    assert_eq!(min.level, RiskLevel::Low);
    assert_eq!(
        min.level.message(),
        "Low risk. Document your process thoroughly."
    );
}

#[test]
fn evaluation_is_repeatable() {
    let answers = complete_answers([20, 35, 10, 15, 20]);
    let engine = ClearanceEngine::default();
    let first = engine.evaluate(&answers);
    let second = engine.evaluate(&answers);
    assert_eq!(first, second);
    assert_eq!(first.total_score, 100);
}

#[test]
fn re_answering_counts_only_the_latest_weight() {
    let mut answers = complete_answers([20, 15, 0, 5, 0]);
    answers.record(choice(FactorId::Manipulation, 10));
    answers.record(choice(FactorId::Manipulation, 25));

    let result = compute_result(&answers);

    assert_eq!(result.total_score, 65);
    assert_eq!(result.level, RiskLevel::Medium);
}

#[test]
fn band_edges_follow_custom_thresholds() {
    let engine = ClearanceEngine::new(RiskThresholds { low: 10, medium: 50 });
    assert_eq!(
        engine.evaluate(&complete_answers([5, 0, 0, 5, 0])).level,
        RiskLevel::Low
    );
    assert_eq!(
        engine.evaluate(&complete_answers([5, 15, 0, 5, 0])).level,
        RiskLevel::Medium
    );
    assert_eq!(engine.thresholds().medium, 50);
}
