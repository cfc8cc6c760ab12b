#![allow(dead_code)]

use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::patient::{
    CancerStaging, Comorbidities, Indication, PatientProfile, PregnancyStatus, ResponseCategory,
    RiskTier, Sex,
};

/// 45-year-old man, 70 kg, no height, no comorbidities, treatment-naive.
pub fn profile(indication: Indication) -> PatientProfile {
    PatientProfile {
        age: 45,
        sex: Sex::Male,
        weight_kg: 70.0,
        height_cm: None,
        pregnancy_status: PregnancyStatus::NonPregnant,
        indication,
        comorbidities: Comorbidities::default(),
        cancer: None,
        current_dose_mcg: 0.0,
        current_lab_value: None,
    }
}

pub fn cancer_profile(tier: RiskTier, response: ResponseCategory, years: f64) -> PatientProfile {
    PatientProfile {
        cancer: Some(CancerStaging {
            risk_tier: Some(tier),
            response: Some(response),
            years_since_surgery: years,
        }),
        ..profile(Indication::PostThyroidectomyCancer)
    }
}

pub fn risk(high_cv_risk: bool, high_bone_risk: bool, is_pregnant: bool) -> RiskAssessment {
    RiskAssessment {
        high_cv_risk,
        high_bone_risk,
        is_pregnant,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
