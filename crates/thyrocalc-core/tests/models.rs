use thyrocalc_core::models::patient::{
    Indication, PatientProfile, PregnancyStatus, ResponseCategory, RiskTier, Scenario, Sex,
};
use thyrocalc_core::models::suppression::SuppressionLevel;

#[test]
fn minimal_profile_deserializes_with_defaults() {
    let profile: PatientProfile = serde_json::from_str(
        r#"{
            "age": 45,
            "sex": "female",
            "weight_kg": 65.0,
            "indication": "benign_hypothyroidism"
        }"#,
    )
    .unwrap();

    assert_eq!(profile.sex, Sex::Female);
    assert_eq!(profile.pregnancy_status, PregnancyStatus::NonPregnant);
    assert_eq!(profile.height_cm, None);
    assert_eq!(profile.current_dose_mcg, 0.0);
    assert!(profile.is_treatment_naive());
    assert!(!profile.comorbidities.any_cardiovascular());
}

#[test]
fn cancer_profile_carries_staging() {
    let profile: PatientProfile = serde_json::from_str(
        r#"{
            "age": 50,
            "sex": "male",
            "weight_kg": 80.0,
            "height_cm": 178.0,
            "indication": "post_thyroidectomy_cancer",
            "comorbidities": { "diabetes": true },
            "cancer": {
                "risk_tier": "high",
                "response": "biochemical_incomplete",
                "years_since_surgery": 2.5
            },
            "current_dose_mcg": 150.0,
            "current_lab_value": 0.8
        }"#,
    )
    .unwrap();

    let staging = profile.cancer.unwrap();
    assert_eq!(staging.risk_tier, Some(RiskTier::High));
    assert_eq!(staging.response, Some(ResponseCategory::BiochemicalIncomplete));
    assert_eq!(staging.years_since_surgery, 2.5);
    assert!(profile.comorbidities.diabetes);
    assert!(profile.comorbidities.any_cardiovascular());
}

#[test]
fn indications_map_to_scenarios() {
    assert_eq!(Indication::BenignHypothyroidism.scenario(), Scenario::Benign);
    assert_eq!(Indication::PostThyroidectomyCancer.scenario(), Scenario::Cancer);
    assert_eq!(Indication::PostRaiHyperthyroidism.scenario(), Scenario::PostRai);
}

#[test]
fn only_trimesters_count_as_pregnant() {
    assert!(!PregnancyStatus::NonPregnant.is_pregnant());
    assert!(!PregnancyStatus::PlanningPregnancy.is_pregnant());
    assert!(PregnancyStatus::Trimester1.is_pregnant());
    assert!(PregnancyStatus::Trimester2.is_pregnant());
    assert!(PregnancyStatus::Trimester3.is_pregnant());
}

#[test]
fn suppression_levels_are_totally_ordered() {
    assert!(SuppressionLevel::None < SuppressionLevel::Mild);
    assert!(SuppressionLevel::Mild < SuppressionLevel::Moderate);
    assert!(SuppressionLevel::Moderate < SuppressionLevel::Strong);
    for (i, level) in SuppressionLevel::ALL.iter().enumerate() {
        assert_eq!(usize::from(level.index()), i);
        assert_eq!(SuppressionLevel::from_index(level.index()), Some(*level));
    }
    assert_eq!(SuppressionLevel::from_index(4), None);
}
