use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The manufactured strength closest to a continuous dose target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TabletRecommendation {
    pub target_mcg: f64,
    pub closest_mcg: f64,
    /// The closest strength is within the configured tolerance of the target.
    pub within_tolerance: bool,
    /// Offered when the target falls awkwardly between two strengths.
    pub alternating: Option<AlternatingRegimen>,
}

/// Alternate-day dosing between two neighbouring strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlternatingRegimen {
    pub lower_mcg: f64,
    pub upper_mcg: f64,
}
