//! thyrocalc-engine
//!
//! The clinical rule engine. Every stage is a pure function of the
//! sanitized profile and the dosing configuration; [`calculate`] wires
//! them together in dependency order.

pub mod dose;
pub mod error;
pub mod intake;
pub mod risk;
pub mod safety;
pub mod suppression;
pub mod tablet;
pub mod target;
pub mod titration;
pub mod weight;

use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::patient::PatientProfile;
use thyrocalc_core::models::result::CalculationResult;
use tracing::{debug, info};

use error::EngineError;
use titration::TitrationInput;

/// Rationale used when no lab value was supplied.
pub const NO_LAB_RATIONALE: &str =
    "No current TSH supplied: titration skipped. Showing calculated dose and target range only.";

/// Sanitize `profile` at the input boundary, then run the full pipeline.
pub fn calculate(
    profile: &PatientProfile,
    config: &DosingConfig,
) -> Result<CalculationResult, EngineError> {
    let clean = intake::sanitize(profile)?;
    Ok(evaluate(&clean, config))
}

/// Run the pipeline on an already sanitized profile.
pub fn evaluate(profile: &PatientProfile, config: &DosingConfig) -> CalculationResult {
    let scenario = profile.indication.scenario();

    let risk = risk::assess(profile, &config.risk);
    let bmi = weight::compute_bmi(profile.weight_kg, profile.height_cm);
    let effective_weight = weight::effective_weight(profile.weight_kg, profile.height_cm, &config.weight);
    debug!(
        high_cv_risk = risk.high_cv_risk,
        high_bone_risk = risk.high_bone_risk,
        is_pregnant = risk.is_pregnant,
        effective_weight,
        "risk and weight assessed"
    );

    let level = suppression::resolve(profile, &risk, &config.suppression);
    let target_range = target::resolve(scenario, level, profile.pregnancy_status, &config.targets);

    let dose = dose::calculate(profile, &risk, effective_weight, level, &config.dose);
    debug!(
        base_rate = dose.base_rate,
        factor = dose.suppression_factor,
        theoretical = dose.theoretical_mcg,
        ideal = dose.ideal_mcg,
        "dose calculated"
    );

    let titration = profile.current_lab_value.map(|lab| {
        titration::next_step(
            &TitrationInput {
                current_dose_mcg: profile.current_dose_mcg,
                current_lab_value: lab,
                ideal_dose_mcg: dose.ideal_mcg,
                target: target_range,
                risk,
            },
            config,
        )
    });

    let safety_flags = safety::flags(
        profile,
        &risk,
        level,
        dose.ideal_mcg,
        effective_weight,
        &config.safety,
        &config.titration,
    );

    let (safe_next_dose_mcg, rationale) = match &titration {
        Some(step) => (Some(step.next_dose_mcg), step.rationale.clone()),
        None => (None, NO_LAB_RATIONALE.to_string()),
    };

    info!(
        scenario = ?scenario,
        suppression = level.label(),
        ideal_dose_mcg = dose.ideal_mcg,
        safe_next_dose_mcg = ?safe_next_dose_mcg,
        flags = safety_flags.len(),
        "calculation complete"
    );

    CalculationResult {
        scenario,
        suppression_level: level,
        target_range,
        ideal_dose_mcg: dose.ideal_mcg,
        safe_next_dose_mcg,
        rationale,
        titration,
        safety_flags,
        effective_weight_kg: effective_weight,
        bmi,
    }
}
