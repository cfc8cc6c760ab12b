//! Input boundary. Clamps out-of-range demographics and rejects values no
//! downstream stage can interpret.

use thyrocalc_core::models::patient::PatientProfile;
use tracing::warn;

use crate::error::IntakeError;

pub const AGE_RANGE: (u32, u32) = (18, 99);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 200.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 220.0);

/// Return a copy of `profile` that every engine stage can consume safely.
pub fn sanitize(profile: &PatientProfile) -> Result<PatientProfile, IntakeError> {
    let mut clean = profile.clone();

    finite("weight_kg", clean.weight_kg)?;
    if clean.weight_kg <= 0.0 {
        return Err(IntakeError::NotPositive {
            field: "weight_kg",
            value: clean.weight_kg,
        });
    }
    finite("current_dose_mcg", clean.current_dose_mcg)?;
    non_negative("current_dose_mcg", clean.current_dose_mcg)?;
    if let Some(lab) = clean.current_lab_value {
        finite("current_lab_value", lab)?;
        non_negative("current_lab_value", lab)?;
    }
    if let Some(staging) = &clean.cancer {
        finite("years_since_surgery", staging.years_since_surgery)?;
        non_negative("years_since_surgery", staging.years_since_surgery)?;
    }

    let age = clean.age.clamp(AGE_RANGE.0, AGE_RANGE.1);
    if age != clean.age {
        warn!(from = clean.age, to = age, "age clamped");
        clean.age = age;
    }

    let weight = clean.weight_kg.clamp(WEIGHT_RANGE_KG.0, WEIGHT_RANGE_KG.1);
    if weight != clean.weight_kg {
        warn!(from = clean.weight_kg, to = weight, "weight clamped");
        clean.weight_kg = weight;
    }

    clean.height_cm = match clean.height_cm {
        Some(h) if h.is_finite() && h > 0.0 => {
            let clamped = h.clamp(HEIGHT_RANGE_CM.0, HEIGHT_RANGE_CM.1);
            if clamped != h {
                warn!(from = h, to = clamped, "height clamped");
            }
            Some(clamped)
        }
        // Absent, zero or garbage height: no BMI adjustment.
        _ => None,
    };

    Ok(clean)
}

fn finite(field: &'static str, value: f64) -> Result<(), IntakeError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IntakeError::NotFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), IntakeError> {
    if value < 0.0 {
        Err(IntakeError::Negative { field, value })
    } else {
        Ok(())
    }
}
