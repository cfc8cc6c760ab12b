//! Dosing thresholds, rates and lookup values.
//!
//! Several of these values drifted between clinic variants (CV-risk age,
//! obesity BMI cutoff, absolute cap, high-dose alert). The canonical set is
//! [`DosingConfig::default`]; [`DosingConfig::conservative`] is the stricter
//! variant. Neither is mutated after construction.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::suppression::TargetRange;

/// Current config file version. Bump when the shape changes.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Upper bound on `titration.step_mcg` accepted from a config file.
pub const MAX_STEP_MCG: f64 = 25.0;
/// Upper bound on `titration.fine_step_mcg` accepted from a config file.
pub const MAX_FINE_STEP_MCG: f64 = 12.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DosingConfig {
    /// Schema version. Missing or 0 = pre-versioned file.
    pub config_version: u32,

    pub weight: WeightConfig,
    pub risk: RiskConfig,
    pub suppression: SuppressionConfig,
    pub targets: TargetConfig,
    pub dose: DoseConfig,
    pub titration: TitrationConfig,
    pub safety: SafetyConfig,
    pub tablets: TabletConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WeightConfig {
    /// BMI at or above which excess weight is discounted.
    pub obesity_bmi_threshold: f64,
    /// BMI used to derive the reference (ideal) weight.
    pub reference_bmi: f64,
    /// Fraction of excess weight credited toward the dosing weight.
    pub excess_weight_credit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RiskConfig {
    pub cv_risk_age: u32,
    pub bone_risk_female_age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SuppressionConfig {
    /// Years after surgery before a high-risk excellent responder relaxes to Mild.
    pub high_risk_relax_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TargetConfig {
    pub trimester1: TargetRange,
    pub trimester2_3: TargetRange,
    pub planning_pregnancy: TargetRange,
    pub benign: TargetRange,
    pub post_rai: TargetRange,
    pub cancer_none: TargetRange,
    pub cancer_mild: TargetRange,
    pub cancer_moderate: TargetRange,
    pub cancer_strong: TargetRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct DoseConfig {
    /// mcg/kg/day when the patient carries cardiovascular risk.
    pub cv_risk_rate: f64,
    /// Age strictly above which the elderly rate applies.
    pub elderly_age: u32,
    pub elderly_rate: f64,
    pub replacement_rate: f64,
    pub cancer_suppression_rate: f64,
    pub factor_none: f64,
    pub factor_mild: f64,
    pub factor_moderate: f64,
    pub factor_strong: f64,
    /// Theoretical dose at which naive graded starts pick the higher cap.
    pub naive_dose_split_mcg: f64,
    /// Lab value below which the smallest graded start applies.
    pub naive_mild_lab: f64,
    /// Lab value below which the middle graded start applies.
    pub naive_moderate_lab: f64,
    pub naive_mild_caps_mcg: (f64, f64),
    pub naive_moderate_caps_mcg: (f64, f64),
    pub pregnancy_increase_factor: f64,
    pub pregnancy_naive_rate: f64,
    pub max_daily_dose_mcg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TitrationConfig {
    /// Largest single increase for patients without CV risk.
    pub step_mcg: f64,
    /// Fine step: the CV-risk ceiling and the usual decrease.
    pub fine_step_mcg: f64,
    pub conservative_start_mcg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SafetyConfig {
    pub high_dose_mcg_per_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TabletConfig {
    /// Ascending list of manufactured strengths in mcg.
    pub strengths_mcg: Vec<f64>,
    pub tolerance_mcg: f64,
}

impl Default for DosingConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_CONFIG_VERSION,
            weight: WeightConfig::default(),
            risk: RiskConfig::default(),
            suppression: SuppressionConfig::default(),
            targets: TargetConfig::default(),
            dose: DoseConfig::default(),
            titration: TitrationConfig::default(),
            safety: SafetyConfig::default(),
            tablets: TabletConfig::default(),
        }
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            obesity_bmi_threshold: 30.0,
            reference_bmi: 25.0,
            excess_weight_credit: 0.4,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            cv_risk_age: 60,
            bone_risk_female_age: 55,
        }
    }
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            high_risk_relax_years: 5.0,
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            trimester1: TargetRange::new(0.1, 2.5),
            trimester2_3: TargetRange::new(0.2, 3.0),
            planning_pregnancy: TargetRange::new(0.5, 2.5),
            benign: TargetRange::new(0.4, 4.0),
            post_rai: TargetRange::new(0.5, 2.5),
            cancer_none: TargetRange::new(0.5, 2.0),
            cancer_mild: TargetRange::new(0.1, 0.5),
            cancer_moderate: TargetRange::new(0.1, 0.5),
            cancer_strong: TargetRange::new(0.01, 0.1),
        }
    }
}

impl Default for DoseConfig {
    fn default() -> Self {
        Self {
            cv_risk_rate: 1.0,
            elderly_age: 60,
            elderly_rate: 1.4,
            replacement_rate: 1.6,
            cancer_suppression_rate: 2.0,
            factor_none: 1.0,
            factor_mild: 1.10,
            factor_moderate: 1.20,
            factor_strong: 1.30,
            naive_dose_split_mcg: 75.0,
            naive_mild_lab: 10.0,
            naive_moderate_lab: 20.0,
            naive_mild_caps_mcg: (25.0, 50.0),
            naive_moderate_caps_mcg: (50.0, 75.0),
            pregnancy_increase_factor: 1.25,
            pregnancy_naive_rate: 1.6,
            max_daily_dose_mcg: 300.0,
        }
    }
}

impl Default for TitrationConfig {
    fn default() -> Self {
        Self {
            step_mcg: 25.0,
            fine_step_mcg: 12.5,
            conservative_start_mcg: 25.0,
        }
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            high_dose_mcg_per_kg: 2.4,
        }
    }
}

impl Default for TabletConfig {
    fn default() -> Self {
        Self {
            strengths_mcg: vec![
                12.5, 25.0, 50.0, 62.5, 75.0, 88.0, 100.0, 112.0, 125.0, 137.0, 150.0, 175.0,
                200.0,
            ],
            tolerance_mcg: 5.0,
        }
    }
}

static CANONICAL: LazyLock<DosingConfig> = LazyLock::new(DosingConfig::default);

impl DosingConfig {
    /// The process-wide canonical configuration.
    pub fn canonical() -> &'static DosingConfig {
        &CANONICAL
    }

    /// Stricter clinic variant: later CV-risk age, higher obesity cutoff,
    /// lower absolute cap and an earlier high-dose alert.
    pub fn conservative() -> Self {
        let mut config = Self::default();
        config.risk.cv_risk_age = 70;
        config.weight.obesity_bmi_threshold = 35.0;
        config.dose.max_daily_dose_mcg = 250.0;
        config.safety.high_dose_mcg_per_kg = 2.2;
        config
    }

    /// Parse a config file body, rejecting versions this build does not know.
    pub fn from_json(contents: &str) -> Result<Self, CoreError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;
        if version > CURRENT_CONFIG_VERSION {
            return Err(CoreError::UnsupportedConfigVersion {
                found: version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }

        let mut config: DosingConfig = serde_json::from_value(json)?;
        config.config_version = CURRENT_CONFIG_VERSION;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would let the engine produce nonsense.
    pub fn validate(&self) -> Result<(), CoreError> {
        let positive = [
            ("weight.obesity_bmi_threshold", self.weight.obesity_bmi_threshold),
            ("weight.reference_bmi", self.weight.reference_bmi),
            ("dose.cv_risk_rate", self.dose.cv_risk_rate),
            ("dose.elderly_rate", self.dose.elderly_rate),
            ("dose.replacement_rate", self.dose.replacement_rate),
            ("dose.cancer_suppression_rate", self.dose.cancer_suppression_rate),
            ("dose.factor_none", self.dose.factor_none),
            ("dose.factor_mild", self.dose.factor_mild),
            ("dose.factor_moderate", self.dose.factor_moderate),
            ("dose.factor_strong", self.dose.factor_strong),
            ("dose.naive_mild_caps_mcg.0", self.dose.naive_mild_caps_mcg.0),
            ("dose.naive_mild_caps_mcg.1", self.dose.naive_mild_caps_mcg.1),
            ("dose.naive_moderate_caps_mcg.0", self.dose.naive_moderate_caps_mcg.0),
            ("dose.naive_moderate_caps_mcg.1", self.dose.naive_moderate_caps_mcg.1),
            ("dose.pregnancy_increase_factor", self.dose.pregnancy_increase_factor),
            ("dose.pregnancy_naive_rate", self.dose.pregnancy_naive_rate),
            ("dose.max_daily_dose_mcg", self.dose.max_daily_dose_mcg),
            ("titration.step_mcg", self.titration.step_mcg),
            ("titration.fine_step_mcg", self.titration.fine_step_mcg),
            ("titration.conservative_start_mcg", self.titration.conservative_start_mcg),
            ("safety.high_dose_mcg_per_kg", self.safety.high_dose_mcg_per_kg),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let non_negative = [
            ("suppression.high_risk_relax_years", self.suppression.high_risk_relax_years),
            ("dose.naive_dose_split_mcg", self.dose.naive_dose_split_mcg),
            ("dose.naive_mild_lab", self.dose.naive_mild_lab),
            ("dose.naive_moderate_lab", self.dose.naive_moderate_lab),
            ("tablets.tolerance_mcg", self.tablets.tolerance_mcg),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if self.dose.pregnancy_increase_factor < 1.0 {
            return Err(CoreError::InvalidConfig(format!(
                "dose.pregnancy_increase_factor must be at least 1, got {}",
                self.dose.pregnancy_increase_factor
            )));
        }

        if !(0.0..=1.0).contains(&self.weight.excess_weight_credit) {
            return Err(CoreError::InvalidConfig(format!(
                "weight.excess_weight_credit must be within [0, 1], got {}",
                self.weight.excess_weight_credit
            )));
        }

        if self.titration.step_mcg > MAX_STEP_MCG {
            return Err(CoreError::InvalidConfig(format!(
                "titration.step_mcg must not exceed {MAX_STEP_MCG} mcg, got {}",
                self.titration.step_mcg
            )));
        }
        if self.titration.fine_step_mcg > MAX_FINE_STEP_MCG {
            return Err(CoreError::InvalidConfig(format!(
                "titration.fine_step_mcg must not exceed {MAX_FINE_STEP_MCG} mcg, got {}",
                self.titration.fine_step_mcg
            )));
        }
        if self.titration.fine_step_mcg > self.titration.step_mcg {
            return Err(CoreError::InvalidConfig(
                "titration.fine_step_mcg must not exceed titration.step_mcg".to_string(),
            ));
        }

        let ranges = [
            ("targets.trimester1", self.targets.trimester1),
            ("targets.trimester2_3", self.targets.trimester2_3),
            ("targets.planning_pregnancy", self.targets.planning_pregnancy),
            ("targets.benign", self.targets.benign),
            ("targets.post_rai", self.targets.post_rai),
            ("targets.cancer_none", self.targets.cancer_none),
            ("targets.cancer_mild", self.targets.cancer_mild),
            ("targets.cancer_moderate", self.targets.cancer_moderate),
            ("targets.cancer_strong", self.targets.cancer_strong),
        ];
        for (name, range) in ranges {
            if !(range.low >= 0.0 && range.low <= range.high) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must satisfy 0 <= low <= high, got [{}, {}]",
                    range.low, range.high
                )));
            }
        }

        let strengths = &self.tablets.strengths_mcg;
        if strengths.is_empty() {
            return Err(CoreError::InvalidConfig(
                "tablets.strengths_mcg must not be empty".to_string(),
            ));
        }
        if strengths.windows(2).any(|w| w[0] >= w[1]) || strengths.iter().any(|s| *s <= 0.0) {
            return Err(CoreError::InvalidConfig(
                "tablets.strengths_mcg must be positive and strictly ascending".to_string(),
            ));
        }

        Ok(())
    }
}
