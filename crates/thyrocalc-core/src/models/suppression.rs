use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// TSH suppression intensity. Declaration order is the total order
/// used by [`SuppressionLevel::step_down`] and [`SuppressionLevel::step_up`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
#[repr(u8)]
pub enum SuppressionLevel {
    None,
    Mild,
    Moderate,
    Strong,
}

impl SuppressionLevel {
    pub const ALL: [SuppressionLevel; 4] = [Self::None, Self::Mild, Self::Moderate, Self::Strong];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// One position down the scale, floored at `None`.
    pub fn step_down(self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(Self::None)
    }

    /// One position up the scale, capped at `Strong`.
    pub fn step_up(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::Strong)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

/// Target TSH window in mIU/L. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TargetRange {
    pub low: f64,
    pub high: f64,
}

impl TargetRange {
    /// Builds a range, swapping the bounds if they arrive reversed.
    pub fn new(low: f64, high: f64) -> Self {
        if low <= high {
            Self { low, high }
        } else {
            Self { low: high, high: low }
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.low
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.high
    }
}
