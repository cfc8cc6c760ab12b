//! Snap a continuous dose to a manufactured tablet strength.

use thyrocalc_core::config::TabletConfig;
use thyrocalc_core::models::tablet::{AlternatingRegimen, TabletRecommendation};

/// Nearest strength to `target_mcg`; ties go to the lower strength.
/// Returns `None` only for an empty strength list.
pub fn nearest_tablet(target_mcg: f64, config: &TabletConfig) -> Option<TabletRecommendation> {
    let strengths = &config.strengths_mcg;
    let closest = strengths
        .iter()
        .copied()
        .min_by(|a, b| (a - target_mcg).abs().total_cmp(&(b - target_mcg).abs()))?;

    let within_tolerance = (closest - target_mcg).abs() <= config.tolerance_mcg;
    let alternating = if within_tolerance {
        None
    } else {
        let smallest = strengths.first().copied().unwrap_or(closest);
        let largest = strengths.last().copied().unwrap_or(closest);
        let lower = strengths
            .iter()
            .rev()
            .copied()
            .find(|s| *s < target_mcg)
            .unwrap_or(smallest);
        let upper = strengths
            .iter()
            .copied()
            .find(|s| *s > target_mcg)
            .unwrap_or(largest);
        Some(AlternatingRegimen {
            lower_mcg: lower,
            upper_mcg: upper,
        })
    };

    Some(TabletRecommendation {
        target_mcg,
        closest_mcg: closest,
        within_tolerance,
        alternating,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strength_list_yields_nothing() {
        let config = TabletConfig {
            strengths_mcg: vec![],
            tolerance_mcg: 5.0,
        };
        assert!(nearest_tablet(100.0, &config).is_none());
    }

    #[test]
    fn equidistant_target_picks_lower_strength() {
        let config = TabletConfig {
            strengths_mcg: vec![50.0, 100.0],
            tolerance_mcg: 30.0,
        };
        let rec = nearest_tablet(75.0, &config).unwrap();
        assert_eq!(rec.closest_mcg, 50.0);
    }
}
