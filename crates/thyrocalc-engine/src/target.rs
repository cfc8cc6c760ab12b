use thyrocalc_core::config::TargetConfig;
use thyrocalc_core::models::patient::{PregnancyStatus, Scenario};
use thyrocalc_core::models::suppression::{SuppressionLevel, TargetRange};

/// Target TSH window. Pregnancy outranks everything, then planning a
/// pregnancy, then the scenario (with cancer keyed by suppression level).
pub fn resolve(
    scenario: Scenario,
    level: SuppressionLevel,
    pregnancy: PregnancyStatus,
    config: &TargetConfig,
) -> TargetRange {
    match pregnancy {
        PregnancyStatus::Trimester1 => return config.trimester1,
        PregnancyStatus::Trimester2 | PregnancyStatus::Trimester3 => return config.trimester2_3,
        PregnancyStatus::PlanningPregnancy => return config.planning_pregnancy,
        PregnancyStatus::NonPregnant => {}
    }

    match scenario {
        Scenario::Benign => config.benign,
        Scenario::PostRai => config.post_rai,
        Scenario::Cancer => cancer_range(level, config),
    }
}

pub fn cancer_range(level: SuppressionLevel, config: &TargetConfig) -> TargetRange {
    match level {
        SuppressionLevel::None => config.cancer_none,
        SuppressionLevel::Mild => config.cancer_mild,
        SuppressionLevel::Moderate => config.cancer_moderate,
        SuppressionLevel::Strong => config.cancer_strong,
    }
}
