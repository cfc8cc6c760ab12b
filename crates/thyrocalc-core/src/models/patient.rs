use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PregnancyStatus {
    #[default]
    NonPregnant,
    PlanningPregnancy,
    Trimester1,
    Trimester2,
    Trimester3,
}

impl PregnancyStatus {
    /// True for any trimester. Planning a pregnancy does not count.
    pub fn is_pregnant(self) -> bool {
        matches!(self, Self::Trimester1 | Self::Trimester2 | Self::Trimester3)
    }
}

/// The clinical indication for thyroid hormone therapy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Indication {
    BenignHypothyroidism,
    PostThyroidectomyCancer,
    PostRaiHyperthyroidism,
}

impl Indication {
    pub fn scenario(self) -> Scenario {
        match self {
            Self::BenignHypothyroidism => Scenario::Benign,
            Self::PostThyroidectomyCancer => Scenario::Cancer,
            Self::PostRaiHyperthyroidism => Scenario::PostRai,
        }
    }
}

/// Top-level rule subset selected by the indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scenario {
    Benign,
    Cancer,
    PostRai,
}

/// Initial recurrence-risk tier after thyroidectomy.
///
/// `VeryLow` only appears in the four-tier stratification and is treated
/// exactly like `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    VeryLow,
    Low,
    Intermediate,
    High,
}

/// Dynamic response-to-therapy category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseCategory {
    Excellent,
    Indeterminate,
    BiochemicalIncomplete,
    StructuralIncomplete,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Comorbidities {
    pub ischemic_heart_disease: bool,
    pub arrhythmia: bool,
    pub heart_failure: bool,
    pub diabetes: bool,
    pub osteoporosis: bool,
}

impl Comorbidities {
    /// Any condition that by itself marks the patient as cardiovascular risk.
    pub fn any_cardiovascular(&self) -> bool {
        self.ischemic_heart_disease || self.arrhythmia || self.heart_failure || self.diabetes
    }
}

/// Cancer-only staging inputs. Missing tier or response falls back to the
/// conservative suppression level downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CancerStaging {
    #[serde(default)]
    pub risk_tier: Option<RiskTier>,
    #[serde(default)]
    pub response: Option<ResponseCategory>,
    #[serde(default)]
    pub years_since_surgery: f64,
}

/// Everything the engine needs for one calculation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub pregnancy_status: PregnancyStatus,
    pub indication: Indication,
    #[serde(default)]
    pub comorbidities: Comorbidities,
    /// Only read when `indication` is the cancer indication.
    #[serde(default)]
    pub cancer: Option<CancerStaging>,
    /// Daily levothyroxine dose in mcg; 0 means treatment-naive.
    #[serde(default)]
    pub current_dose_mcg: f64,
    /// Most recent TSH in mIU/L.
    #[serde(default)]
    pub current_lab_value: Option<f64>,
}

impl PatientProfile {
    pub fn is_treatment_naive(&self) -> bool {
        self.current_dose_mcg <= 0.0
    }
}
