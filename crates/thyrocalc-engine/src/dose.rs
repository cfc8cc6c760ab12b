//! Theoretical daily levothyroxine dose.
//!
//! `ideal = base_rate × effective_weight × suppression_factor`, followed by
//! the naive graded start (benign only), the pregnancy override and finally
//! the absolute cap.

use thyrocalc_core::config::DoseConfig;
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::patient::{PatientProfile, Scenario};
use thyrocalc_core::models::suppression::SuppressionLevel;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoseCalculation {
    /// mcg/kg/day.
    pub base_rate: f64,
    pub suppression_factor: f64,
    /// Weight-based value before any override or cap.
    pub theoretical_mcg: f64,
    pub ideal_mcg: f64,
}

/// CV risk wins outright, then age, then the scenario rate. Cancer patients
/// only get the higher rate while some suppression is actually wanted.
pub fn base_rate(
    age: u32,
    scenario: Scenario,
    level: SuppressionLevel,
    risk: &RiskAssessment,
    config: &DoseConfig,
) -> f64 {
    if risk.high_cv_risk {
        config.cv_risk_rate
    } else if age > config.elderly_age {
        config.elderly_rate
    } else if scenario == Scenario::Cancer && level > SuppressionLevel::None {
        config.cancer_suppression_rate
    } else {
        config.replacement_rate
    }
}

pub fn suppression_factor(scenario: Scenario, level: SuppressionLevel, config: &DoseConfig) -> f64 {
    if scenario != Scenario::Cancer {
        return config.factor_none;
    }
    match level {
        SuppressionLevel::None => config.factor_none,
        SuppressionLevel::Mild => config.factor_mild,
        SuppressionLevel::Moderate => config.factor_moderate,
        SuppressionLevel::Strong => config.factor_strong,
    }
}

/// Cap for a treatment-naive benign patient, or `None` when the lab value is
/// high enough to start on the full theoretical dose. A missing lab value
/// takes the smallest band.
pub fn naive_start_cap(theoretical_mcg: f64, lab_value: Option<f64>, config: &DoseConfig) -> Option<f64> {
    let pick = |(low, high): (f64, f64)| {
        if theoretical_mcg < config.naive_dose_split_mcg {
            low
        } else {
            high
        }
    };

    match lab_value {
        Some(lab) if lab >= config.naive_moderate_lab => None,
        Some(lab) if lab >= config.naive_mild_lab => Some(pick(config.naive_moderate_caps_mcg)),
        _ => Some(pick(config.naive_mild_caps_mcg)),
    }
}

pub fn calculate(
    profile: &PatientProfile,
    risk: &RiskAssessment,
    effective_weight_kg: f64,
    level: SuppressionLevel,
    config: &DoseConfig,
) -> DoseCalculation {
    let scenario = profile.indication.scenario();
    let base_rate = base_rate(profile.age, scenario, level, risk, config);
    let suppression_factor = suppression_factor(scenario, level, config);
    let theoretical_mcg = base_rate * effective_weight_kg * suppression_factor;

    let mut ideal = theoretical_mcg;

    if scenario == Scenario::Benign
        && profile.is_treatment_naive()
        && let Some(cap) = naive_start_cap(theoretical_mcg, profile.current_lab_value, config)
    {
        ideal = ideal.min(cap);
        debug!(cap, "naive graded start applied");
    }

    if risk.is_pregnant {
        ideal = if profile.is_treatment_naive() {
            config.pregnancy_naive_rate * effective_weight_kg
        } else {
            profile.current_dose_mcg * config.pregnancy_increase_factor
        };
        debug!(ideal, "pregnancy dose override applied");
    }

    if ideal > config.max_daily_dose_mcg {
        debug!(
            ideal,
            cap = config.max_daily_dose_mcg,
            "ideal dose clipped to absolute cap"
        );
        ideal = config.max_daily_dose_mcg;
    }

    DoseCalculation {
        base_rate,
        suppression_factor,
        theoretical_mcg,
        ideal_mcg: ideal,
    }
}
