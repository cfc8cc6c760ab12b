mod common;

use common::risk;
use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::result::StepKind;
use thyrocalc_core::models::suppression::TargetRange;
use thyrocalc_engine::titration::{TitrationInput, next_step};

fn input(current: f64, lab: f64, ideal: f64, risk: RiskAssessment) -> TitrationInput {
    TitrationInput {
        current_dose_mcg: current,
        current_lab_value: lab,
        ideal_dose_mcg: ideal,
        target: TargetRange::new(0.5, 2.5),
        risk,
    }
}

#[test]
fn naive_cardiovascular_patient_starts_at_twenty_five() {
    let config = DosingConfig::default();
    let step = next_step(&input(0.0, 8.0, 70.0, risk(true, false, false)), &config);
    assert_eq!(step.kind, StepKind::InitiateConservative);
    assert_eq!(step.next_dose_mcg, 25.0);
    assert!(step.rationale.contains("initiate conservatively"));
}

#[test]
fn naive_patient_without_cv_risk_starts_on_full_dose() {
    let config = DosingConfig::default();
    let step = next_step(&input(0.0, 8.0, 112.0, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::InitiateFull);
    assert_eq!(step.next_dose_mcg, 112.0);
    assert_eq!(step.change_mcg, 112.0);
    assert!(step.kind.is_exempt());
}

#[test]
fn naive_pregnant_cardiovascular_patient_is_not_held_back() {
    let config = DosingConfig::default();
    let step = next_step(&input(0.0, 8.0, 96.0, risk(true, false, true)), &config);
    assert_eq!(step.kind, StepKind::InitiateFull);
    assert_eq!(step.next_dose_mcg, 96.0);
}

#[test]
fn under_treated_pregnancy_is_urgent_and_exempt() {
    let config = DosingConfig::default();
    let step = next_step(&input(100.0, 4.0, 125.0, risk(false, false, true)), &config);
    assert_eq!(step.kind, StepKind::PregnancyUrgent);
    assert_eq!(step.next_dose_mcg, 125.0);
    assert!(step.kind.is_exempt());
    assert!(step.rationale.starts_with("URGENT"));
}

#[test]
fn cardiovascular_increase_never_exceeds_fine_step() {
    let config = DosingConfig::default();
    for ideal in [0.0, 70.0, 112.5, 250.0] {
        let step = next_step(&input(100.0, 6.0, ideal, risk(true, false, false)), &config);
        assert_eq!(step.kind, StepKind::IncreaseCapped);
        assert_eq!(step.next_dose_mcg, 112.5);
    }
}

#[test]
fn large_gap_takes_one_full_step_only() {
    let config = DosingConfig::default();
    let step = next_step(&input(50.0, 6.0, 112.0, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::Increase);
    assert_eq!(step.next_dose_mcg, 75.0);
    assert_eq!(step.change_mcg, 25.0);
}

#[test]
fn medium_gap_takes_a_fine_step() {
    let config = DosingConfig::default();
    let step = next_step(&input(90.0, 6.0, 110.0, risk(false, false, false)), &config);
    assert_eq!(step.next_dose_mcg, 102.5);

    // Exactly one full step of gap still takes the fine step.
    let step = next_step(&input(75.0, 6.0, 100.0, risk(false, false, false)), &config);
    assert_eq!(step.next_dose_mcg, 87.5);
}

#[test]
fn small_gap_closes_directly() {
    let config = DosingConfig::default();
    let step = next_step(&input(100.0, 6.0, 110.0, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::CloseGap);
    assert_eq!(step.next_dose_mcg, 110.0);

    let step = next_step(&input(100.0, 6.0, 112.5, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::CloseGap);
    assert_eq!(step.next_dose_mcg, 112.5);
}

#[test]
fn dose_already_at_calculation_holds_and_checks_adherence() {
    let config = DosingConfig::default();
    let step = next_step(&input(150.0, 6.0, 112.0, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::HoldCheckAdherence);
    assert_eq!(step.next_dose_mcg, 150.0);
    assert_eq!(step.change_mcg, 0.0);
}

#[test]
fn over_treated_patient_with_risk_gets_urgent_reduction() {
    let config = DosingConfig::default();
    let step = next_step(&input(100.0, 0.1, 100.0, risk(false, true, false)), &config);
    assert_eq!(step.kind, StepKind::DecreaseUrgent);
    assert_eq!(step.next_dose_mcg, 87.5);
}

#[test]
fn over_treated_patient_without_risk_gets_routine_reduction() {
    let config = DosingConfig::default();
    let step = next_step(&input(100.0, 0.1, 100.0, risk(false, false, false)), &config);
    assert_eq!(step.kind, StepKind::Decrease);
    assert_eq!(step.next_dose_mcg, 87.5);
    assert_eq!(step.change_mcg, -12.5);
}

#[test]
fn reduction_never_goes_below_zero() {
    let config = DosingConfig::default();
    let step = next_step(&input(10.0, 0.1, 100.0, risk(false, false, false)), &config);
    assert_eq!(step.next_dose_mcg, 0.0);
}

#[test]
fn on_target_continues_current_dose() {
    let config = DosingConfig::default();
    for lab in [0.5, 1.2, 2.5] {
        let step = next_step(&input(100.0, lab, 150.0, risk(true, true, false)), &config);
        assert_eq!(step.kind, StepKind::Continue);
        assert_eq!(step.next_dose_mcg, 100.0);
    }
}

#[test]
fn increases_stop_at_the_absolute_cap() {
    let config = DosingConfig::default();
    let step = next_step(&input(290.0, 6.0, 400.0, risk(false, false, false)), &config);
    assert_eq!(step.next_dose_mcg, 300.0);

    let step = next_step(&input(295.0, 6.0, 300.0, risk(true, false, false)), &config);
    assert_eq!(step.next_dose_mcg, 300.0);

    let step = next_step(&input(320.0, 6.0, 300.0, risk(true, false, false)), &config);
    assert_eq!(step.kind, StepKind::HoldAtCap);
    assert_eq!(step.next_dose_mcg, 320.0);
}

#[test]
fn patient_already_at_the_cap_is_held_not_increased() {
    let config = DosingConfig::default();
    let cases = [
        (300.0, risk(true, false, false)),
        (300.0, risk(false, false, false)),
        (300.0, risk(false, false, true)),
        (310.0, risk(false, false, true)),
    ];
    for (current, risk) in cases {
        let step = next_step(&input(current, 6.0, 400.0, risk), &config);
        assert_eq!(step.kind, StepKind::HoldAtCap, "current {current}");
        assert_eq!(step.next_dose_mcg, current);
        assert_eq!(step.change_mcg, 0.0);
        assert!(!step.kind.is_exempt());
        assert!(step.rationale.contains("300.0 mcg/day maximum"), "{}", step.rationale);
        assert!(!step.rationale.contains("increase"), "{}", step.rationale);
    }
}

#[test]
fn on_target_boundaries_use_the_inclusive_range() {
    let config = DosingConfig::default();
    let target = TargetRange::new(0.5, 2.5);
    for lab in [0.49, 0.5, 2.5, 2.51] {
        let step = next_step(&input(100.0, lab, 100.0, risk(false, false, false)), &config);
        assert_eq!(
            step.kind == StepKind::Continue,
            target.contains(lab),
            "lab {lab}"
        );
    }
}
