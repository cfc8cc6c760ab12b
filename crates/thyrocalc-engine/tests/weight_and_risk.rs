mod common;

use common::{assert_close, profile};
use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::patient::{Indication, PregnancyStatus, Sex};
use thyrocalc_engine::{risk, weight};

#[test]
fn missing_height_leaves_weight_unchanged() {
    let config = DosingConfig::default();
    assert_eq!(weight::compute_bmi(120.0, None), None);
    assert_eq!(weight::effective_weight(120.0, None, &config.weight), 120.0);
}

#[test]
fn zero_height_has_no_bmi() {
    assert_eq!(weight::compute_bmi(70.0, Some(0.0)), None);
    assert_eq!(weight::compute_bmi(70.0, Some(-160.0)), None);
}

#[test]
fn non_obese_weight_is_used_as_is() {
    let config = DosingConfig::default();
    assert_close(weight::compute_bmi(70.0, Some(160.0)).unwrap(), 70.0 / 2.56);
    assert_eq!(weight::effective_weight(70.0, Some(160.0), &config.weight), 70.0);
}

#[test]
fn obese_patient_gets_forty_percent_of_excess_weight() {
    let config = DosingConfig::default();
    // BMI 41.5 at 170 cm; reference weight 72.25 kg.
    assert_close(weight::reference_weight(170.0, &config.weight), 72.25);
    assert_close(weight::effective_weight(120.0, Some(170.0), &config.weight), 91.35);
}

#[test]
fn obesity_cutoff_follows_config() {
    // BMI 34.6: obese under the canonical cutoff, not under the conservative one.
    let canonical = DosingConfig::default();
    let conservative = DosingConfig::conservative();
    assert_close(weight::effective_weight(100.0, Some(170.0), &canonical.weight), 83.35);
    assert_eq!(weight::effective_weight(100.0, Some(170.0), &conservative.weight), 100.0);
}

#[test]
fn age_alone_marks_cardiovascular_risk() {
    let config = DosingConfig::default();
    let mut p = profile(Indication::PostRaiHyperthyroidism);
    p.age = 59;
    assert!(!risk::assess(&p, &config.risk).high_cv_risk);
    p.age = 60;
    assert!(risk::assess(&p, &config.risk).high_cv_risk);
    assert!(!risk::assess(&p, &DosingConfig::conservative().risk).high_cv_risk);
}

#[test]
fn each_cardiac_comorbidity_marks_cardiovascular_risk() {
    let config = DosingConfig::default();
    let setters: [fn(&mut thyrocalc_core::models::patient::Comorbidities); 4] = [
        |c| c.ischemic_heart_disease = true,
        |c| c.arrhythmia = true,
        |c| c.heart_failure = true,
        |c| c.diabetes = true,
    ];
    for set in setters {
        let mut p = profile(Indication::BenignHypothyroidism);
        set(&mut p.comorbidities);
        let assessment = risk::assess(&p, &config.risk);
        assert!(assessment.high_cv_risk);
        assert!(!assessment.high_bone_risk);
    }
}

#[test]
fn bone_risk_from_osteoporosis_or_older_women() {
    let config = DosingConfig::default();

    let mut man = profile(Indication::BenignHypothyroidism);
    man.age = 58;
    assert!(!risk::assess(&man, &config.risk).high_bone_risk);
    man.comorbidities.osteoporosis = true;
    assert!(risk::assess(&man, &config.risk).high_bone_risk);

    let mut woman = profile(Indication::BenignHypothyroidism);
    woman.sex = Sex::Female;
    woman.age = 54;
    assert!(!risk::assess(&woman, &config.risk).high_bone_risk);
    woman.age = 55;
    assert!(risk::assess(&woman, &config.risk).high_bone_risk);
}

#[test]
fn planning_pregnancy_is_not_pregnant() {
    let config = DosingConfig::default();
    let mut p = profile(Indication::BenignHypothyroidism);
    p.pregnancy_status = PregnancyStatus::PlanningPregnancy;
    assert!(!risk::assess(&p, &config.risk).is_pregnant);
    p.pregnancy_status = PregnancyStatus::Trimester3;
    assert!(risk::assess(&p, &config.risk).is_pregnant);
}
