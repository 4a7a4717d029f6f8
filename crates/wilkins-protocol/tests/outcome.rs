use wilkins_core::models::reading::ReadingSamples;
use wilkins_protocol::outcome::{
    Improvement, ImprovementTier, Outcome, SignificanceReason, mean, phase_mean,
};

fn samples(values: &[u32]) -> ReadingSamples {
    let mut samples = ReadingSamples::new();
    for &v in values {
        samples.push(v);
    }
    samples
}

#[test]
fn mean_of_nothing_is_undefined() {
    assert_eq!(mean(&[]), None);
}

#[test]
fn mean_rounds_half_up_and_ignores_order() {
    assert_eq!(mean(&[80, 90]), Some(85));
    assert_eq!(mean(&[80, 81]), Some(81));
    assert_eq!(mean(&[81, 80]), Some(81));
    assert_eq!(mean(&[0, 0]), Some(0));
}

#[test]
fn phase_mean_needs_both_readings() {
    assert_eq!(phase_mean(&samples(&[90])), None);
    assert_eq!(phase_mean(&samples(&[90, 100])), Some(95));
}

#[test]
fn both_criteria_met() {
    let improvement = Improvement::between(100, 122).unwrap();
    assert_eq!(improvement.absolute, 22);
    assert_eq!(improvement.percent, 22);
    assert!(improvement.is_significant());
    assert_eq!(improvement.reason(), Some(SignificanceReason::Relative));
}

#[test]
fn absolute_criterion_alone_is_enough() {
    let improvement = Improvement::between(200, 222).unwrap();
    assert_eq!(improvement.absolute, 22);
    assert_eq!(improvement.percent, 11);
    assert!(improvement.is_significant());
    assert_eq!(improvement.tier(), ImprovementTier::Significant);
    assert_eq!(improvement.reason(), Some(SignificanceReason::Absolute));
}

#[test]
fn relative_criterion_alone_is_enough() {
    let improvement = Improvement::between(40, 46).unwrap();
    assert_eq!(improvement.absolute, 6);
    assert_eq!(improvement.percent, 15);
    assert!(improvement.is_significant());
}

#[test]
fn small_gain_is_no_improvement() {
    let improvement = Improvement::between(100, 104).unwrap();
    assert_eq!(improvement.percent, 4);
    assert_eq!(improvement.absolute, 4);
    assert!(!improvement.is_significant());
    assert_eq!(improvement.tier(), ImprovementTier::Absent);
}

#[test]
fn modest_gain_is_marginal() {
    let improvement = Improvement::between(100, 108).unwrap();
    assert_eq!(improvement.tier(), ImprovementTier::Marginal);
}

#[test]
fn decline_is_negative() {
    let improvement = Improvement::between(100, 90).unwrap();
    assert_eq!(improvement.percent, -10);
    assert_eq!(improvement.absolute, -10);
    assert_eq!(improvement.tier(), ImprovementTier::Absent);
}

#[test]
fn zero_baseline_has_no_improvement() {
    assert!(Improvement::between(0, 50).is_none());
    let outcome = Outcome::from_samples(&samples(&[0, 0]), &samples(&[40, 60]));
    assert_eq!(outcome.baseline_mean, Some(0));
    assert_eq!(outcome.tinted_mean, Some(50));
    assert!(outcome.improvement.is_none());
    assert!(!outcome.is_significant());
}

#[test]
fn outcome_from_complete_phases() {
    let outcome = Outcome::from_samples(&samples(&[98, 102]), &samples(&[120, 124]));
    assert_eq!(outcome.baseline_mean, Some(100));
    assert_eq!(outcome.tinted_mean, Some(122));
    assert!(outcome.is_significant());
    assert_eq!(outcome.tier(), ImprovementTier::Significant);
}
