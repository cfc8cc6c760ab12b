use thyrocalc_core::config::{SafetyConfig, TitrationConfig};
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::patient::{PatientProfile, PregnancyStatus};
use thyrocalc_core::models::result::{SafetyFlag, SafetyFlagKind};
use thyrocalc_core::models::suppression::SuppressionLevel;

/// Advisories for the final computed state. Each check is independent and
/// none of them touches the dose.
pub fn flags(
    profile: &PatientProfile,
    risk: &RiskAssessment,
    level: SuppressionLevel,
    ideal_dose_mcg: f64,
    effective_weight_kg: f64,
    config: &SafetyConfig,
    titration: &TitrationConfig,
) -> Vec<SafetyFlag> {
    let mut flags = Vec::new();

    if risk.high_cv_risk {
        flags.push(flag(
            SafetyFlagKind::HighCvRiskProtocol,
            format!(
                "High CV risk protocol: start low, titrate slow ({:.1} mcg steps). Avoid TSH < 0.1.",
                titration.fine_step_mcg
            ),
        ));
    }

    if profile.comorbidities.diabetes {
        flags.push(flag(
            SafetyFlagKind::DiabetesMonitoring,
            "Diabetes: monitor for silent ischemia when initiating or escalating suppression."
                .to_string(),
        ));
    }

    if risk.high_bone_risk && level >= SuppressionLevel::Moderate {
        flags.push(flag(
            SafetyFlagKind::BoneHealth,
            "Bone health: prolonged suppression increases fracture risk. Ensure calcium and \
             vitamin D supplementation."
                .to_string(),
        ));
    }

    if profile.pregnancy_status != PregnancyStatus::NonPregnant {
        flags.push(flag(
            SafetyFlagKind::PregnancyProtocol,
            "Pregnancy: dose requirements usually rise 25-30%. Check TSH every 4 weeks and \
             follow obstetric endocrinology guidance."
                .to_string(),
        ));
    }

    if effective_weight_kg > 0.0 {
        let per_kg = ideal_dose_mcg / effective_weight_kg;
        if per_kg > config.high_dose_mcg_per_kg {
            flags.push(flag(
                SafetyFlagKind::HighDosePerKg,
                format!(
                    "High dose: {per_kg:.2} mcg/kg exceeds {:.1} mcg/kg. Rule out malabsorption \
                     or poor adherence.",
                    config.high_dose_mcg_per_kg
                ),
            ));
        }
    }

    flags
}

fn flag(kind: SafetyFlagKind, message: String) -> SafetyFlag {
    SafetyFlag { kind, message }
}
