use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Scenario;
use super::suppression::{SuppressionLevel, TargetRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SafetyFlagKind {
    HighCvRiskProtocol,
    DiabetesMonitoring,
    BoneHealth,
    PregnancyProtocol,
    HighDosePerKg,
}

/// An advisory attached to the result. Flags never alter the computed doses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SafetyFlag {
    pub kind: SafetyFlagKind,
    pub message: String,
}

/// Which branch of the titration state machine produced the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepKind {
    InitiateConservative,
    InitiateFull,
    PregnancyUrgent,
    IncreaseCapped,
    Increase,
    CloseGap,
    HoldCheckAdherence,
    /// Above target but already at or over the absolute daily cap.
    HoldAtCap,
    DecreaseUrgent,
    Decrease,
    Continue,
}

impl StepKind {
    /// Paths allowed to move the dose by more than the per-call step ceiling.
    pub fn is_exempt(self) -> bool {
        matches!(
            self,
            Self::InitiateConservative | Self::InitiateFull | Self::PregnancyUrgent
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TitrationStep {
    pub kind: StepKind,
    pub next_dose_mcg: f64,
    /// Signed difference from the current dose.
    pub change_mcg: f64,
    pub rationale: String,
}

/// Output of one engine run. Read-only display data; never fed back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculationResult {
    pub scenario: Scenario,
    pub suppression_level: SuppressionLevel,
    pub target_range: TargetRange,
    /// Theoretical weight-based dose after overrides and the absolute cap.
    pub ideal_dose_mcg: f64,
    /// Bounded next dose. `None` when no lab value was supplied.
    pub safe_next_dose_mcg: Option<f64>,
    pub rationale: String,
    pub titration: Option<TitrationStep>,
    pub safety_flags: Vec<SafetyFlag>,
    pub effective_weight_kg: f64,
    pub bmi: Option<f64>,
}

impl CalculationResult {
    /// The dose a prescriber would write next: the titration step when one
    /// was computed, otherwise the ideal dose.
    pub fn prescribable_dose_mcg(&self) -> f64 {
        self.safe_next_dose_mcg.unwrap_or(self.ideal_dose_mcg)
    }

    pub fn has_flag(&self, kind: SafetyFlagKind) -> bool {
        self.safety_flags.iter().any(|f| f.kind == kind)
    }
}
