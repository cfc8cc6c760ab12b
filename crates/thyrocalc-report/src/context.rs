//! Display-ready view of a calculation. All numbers are pre-formatted so the
//! template never has to care about float rendering.

use serde::Serialize;
use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::patient::Scenario;
use thyrocalc_core::models::result::CalculationResult;
use thyrocalc_core::models::tablet::TabletRecommendation;
use thyrocalc_engine::tablet::nearest_tablet;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext {
    pub scenario: String,
    pub suppression: String,
    pub target_range: String,
    pub effective_weight: String,
    pub bmi: Option<String>,
    pub ideal_dose: String,
    pub next_dose: Option<String>,
    pub rationale: String,
    pub tablet: String,
    pub flags: Vec<String>,
}

impl SummaryContext {
    pub fn new(result: &CalculationResult, config: &DosingConfig) -> Self {
        let tablet = nearest_tablet(result.prescribable_dose_mcg(), &config.tablets);

        Self {
            scenario: scenario_label(result.scenario).to_string(),
            suppression: format!("{} suppression", result.suppression_level.label()),
            target_range: format!(
                "{} - {} mIU/L",
                result.target_range.low, result.target_range.high
            ),
            effective_weight: format!("{:.1}", result.effective_weight_kg),
            bmi: result.bmi.map(|b| format!("{b:.1}")),
            ideal_dose: format!("{:.1}", result.ideal_dose_mcg),
            next_dose: result.safe_next_dose_mcg.map(|d| format!("{d:.1}")),
            rationale: result.rationale.clone(),
            tablet: tablet
                .map(|t| tablet_advice(&t))
                .unwrap_or_else(|| "No tablet strengths configured.".to_string()),
            flags: result.safety_flags.iter().map(|f| f.message.clone()).collect(),
        }
    }
}

pub fn scenario_label(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Benign => "Benign hypothyroidism",
        Scenario::Cancer => "Post-thyroidectomy differentiated thyroid cancer",
        Scenario::PostRai => "Post-RAI hypothyroidism",
    }
}

/// One-line tablet advice, with an alternate-day option when the dose
/// falls between strengths.
pub fn tablet_advice(rec: &TabletRecommendation) -> String {
    match rec.alternating {
        Some(alt) if !rec.within_tolerance => format!(
            "Target ~{:.0} mcg falls between strengths. Option A: {} mcg daily (closest). \
             Option B: alternate {} mcg and {} mcg.",
            rec.target_mcg,
            mcg(rec.closest_mcg),
            mcg(alt.lower_mcg),
            mcg(alt.upper_mcg),
        ),
        _ => format!("{} mcg tablet once daily.", mcg(rec.closest_mcg)),
    }
}

fn mcg(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
