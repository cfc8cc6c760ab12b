use thyrocalc_core::config::RiskConfig;
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::patient::{PatientProfile, Sex};

/// Derive the cardiovascular, bone and pregnancy flags for a profile.
pub fn assess(profile: &PatientProfile, config: &RiskConfig) -> RiskAssessment {
    let high_cv_risk =
        profile.age >= config.cv_risk_age || profile.comorbidities.any_cardiovascular();
    let high_bone_risk = profile.comorbidities.osteoporosis
        || (profile.sex == Sex::Female && profile.age >= config.bone_risk_female_age);

    RiskAssessment {
        high_cv_risk,
        high_bone_risk,
        is_pregnant: profile.pregnancy_status.is_pregnant(),
    }
}
