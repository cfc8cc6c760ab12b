//! Effective dosing weight.
//!
//! Obese patients are dosed on a reference weight plus a fraction of their
//! excess weight, clamped between the reference weight and actual weight.

use thyrocalc_core::config::WeightConfig;

/// Body-mass index, or `None` when height is missing or not positive.
pub fn compute_bmi(weight_kg: f64, height_cm: Option<f64>) -> Option<f64> {
    let height_m = height_m(height_cm)?;
    Some(weight_kg / (height_m * height_m))
}

/// Weight at the configured reference BMI for this height.
pub fn reference_weight(height_cm: f64, config: &WeightConfig) -> f64 {
    let h = height_cm / 100.0;
    config.reference_bmi * h * h
}

pub fn effective_weight(weight_kg: f64, height_cm: Option<f64>, config: &WeightConfig) -> f64 {
    let Some(bmi) = compute_bmi(weight_kg, height_cm) else {
        return weight_kg;
    };
    if bmi < config.obesity_bmi_threshold {
        return weight_kg;
    }
    let Some(height_cm) = height_cm else {
        return weight_kg;
    };

    let ideal = reference_weight(height_cm, config);
    let adjusted = ideal + config.excess_weight_credit * (weight_kg - ideal);
    adjusted.min(weight_kg).max(ideal.min(weight_kg))
}

fn height_m(height_cm: Option<f64>) -> Option<f64> {
    match height_cm {
        Some(h) if h > 0.0 => Some(h / 100.0),
        _ => None,
    }
}
