use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk flags derived once from demographics and comorbidities, then read
/// by every downstream stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub high_cv_risk: bool,
    pub high_bone_risk: bool,
    pub is_pregnant: bool,
}

impl RiskAssessment {
    /// Either comorbidity axis warrants softer suppression.
    pub fn has_comorbid_risk(&self) -> bool {
        self.high_cv_risk || self.high_bone_risk
    }
}
