//! Suppression intensity for post-thyroidectomy cancer patients.
//!
//! Resolution happens in three steps:
//!
//! 1. Base level from the (risk tier, response) table.
//! 2. Pregnancy override: Strong is forced down to Moderate.
//! 3. Comorbidity softening: one step down the scale when the patient has
//!    cardiovascular or bone risk. Skipped when step 2 fired.
//!
//! Every other indication resolves to [`SuppressionLevel::None`].

use thyrocalc_core::config::SuppressionConfig;
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::patient::{
    CancerStaging, PatientProfile, ResponseCategory, RiskTier, Scenario,
};
use thyrocalc_core::models::suppression::SuppressionLevel;
use tracing::{debug, warn};

/// Level used when tier or response is missing.
pub const FALLBACK_LEVEL: SuppressionLevel = SuppressionLevel::Mild;

/// One cell of the base table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEntry {
    Fixed(SuppressionLevel),
    /// Relaxes once enough years have passed since surgery.
    AfterYears {
        before: SuppressionLevel,
        after: SuppressionLevel,
    },
}

impl TableEntry {
    pub fn level(self, years_since_surgery: f64, config: &SuppressionConfig) -> SuppressionLevel {
        match self {
            Self::Fixed(level) => level,
            Self::AfterYears { before, after } => {
                if years_since_surgery >= config.high_risk_relax_years {
                    after
                } else {
                    before
                }
            }
        }
    }
}

/// The full tier × response table. Every combination is listed.
pub fn table_entry(tier: RiskTier, response: ResponseCategory) -> TableEntry {
    use ResponseCategory::*;
    use SuppressionLevel as L;
    use TableEntry::Fixed;

    match (tier, response) {
        (RiskTier::VeryLow | RiskTier::Low, Excellent) => Fixed(L::None),
        (RiskTier::VeryLow | RiskTier::Low, Indeterminate) => Fixed(L::Mild),
        (RiskTier::VeryLow | RiskTier::Low, BiochemicalIncomplete) => Fixed(L::Mild),
        (RiskTier::VeryLow | RiskTier::Low, StructuralIncomplete) => Fixed(L::Strong),

        (RiskTier::Intermediate, Excellent) => Fixed(L::Mild),
        (RiskTier::Intermediate, Indeterminate) => Fixed(L::Moderate),
        (RiskTier::Intermediate, BiochemicalIncomplete) => Fixed(L::Moderate),
        (RiskTier::Intermediate, StructuralIncomplete) => Fixed(L::Strong),

        (RiskTier::High, Excellent) => TableEntry::AfterYears {
            before: L::Moderate,
            after: L::Mild,
        },
        (RiskTier::High, Indeterminate) => Fixed(L::Strong),
        (RiskTier::High, BiochemicalIncomplete) => Fixed(L::Strong),
        (RiskTier::High, StructuralIncomplete) => Fixed(L::Strong),
    }
}

/// Step 1. Unspecified tier or response falls back to [`FALLBACK_LEVEL`].
pub fn base_level(staging: Option<&CancerStaging>, config: &SuppressionConfig) -> SuppressionLevel {
    match staging {
        Some(CancerStaging {
            risk_tier: Some(tier),
            response: Some(response),
            years_since_surgery,
        }) => table_entry(*tier, *response).level(*years_since_surgery, config),
        _ => {
            warn!("cancer staging incomplete, using fallback suppression level");
            FALLBACK_LEVEL
        }
    }
}

/// Steps 2 and 3. Pregnancy is evaluated first and, when it fires,
/// comorbidity softening is not applied on top.
pub fn soften(level: SuppressionLevel, risk: &RiskAssessment) -> SuppressionLevel {
    if risk.is_pregnant && level == SuppressionLevel::Strong {
        return SuppressionLevel::Moderate;
    }
    if risk.has_comorbid_risk() {
        return level.step_down();
    }
    level
}

pub fn resolve(
    profile: &PatientProfile,
    risk: &RiskAssessment,
    config: &SuppressionConfig,
) -> SuppressionLevel {
    if profile.indication.scenario() != Scenario::Cancer {
        return SuppressionLevel::None;
    }

    let base = base_level(profile.cancer.as_ref(), config);
    let softened = soften(base, risk);
    debug!(
        base = base.label(),
        resolved = softened.label(),
        "suppression level resolved"
    );
    softened
}
