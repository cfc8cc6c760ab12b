//! Bounded next dosing step.
//!
//! Outside of treatment initiation and the under-treated pregnancy case,
//! no step moves the dose by more than `titration.step_mcg`, and CV-risk
//! patients never go up by more than `titration.fine_step_mcg`.

use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::assessment::RiskAssessment;
use thyrocalc_core::models::result::{StepKind, TitrationStep};
use thyrocalc_core::models::suppression::TargetRange;

/// Snapshot of the patient's current therapy plus the engine's targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitrationInput {
    pub current_dose_mcg: f64,
    pub current_lab_value: f64,
    pub ideal_dose_mcg: f64,
    pub target: TargetRange,
    pub risk: RiskAssessment,
}

pub fn next_step(input: &TitrationInput, config: &DosingConfig) -> TitrationStep {
    let current = input.current_dose_mcg;
    let lab = input.current_lab_value;
    let t = &config.titration;
    let cap = config.dose.max_daily_dose_mcg;

    if current <= 0.0 {
        return if input.risk.high_cv_risk && !input.risk.is_pregnant {
            let dose = t.conservative_start_mcg;
            step(
                StepKind::InitiateConservative,
                current,
                dose,
                format!(
                    "Treatment-naive with high cardiovascular risk: initiate conservatively at \
                     {dose:.1} mcg/day and titrate in {:.1} mcg steps.",
                    t.fine_step_mcg
                ),
            )
        } else {
            let dose = input.ideal_dose_mcg;
            step(
                StepKind::InitiateFull,
                current,
                dose,
                format!("Treatment-naive: initiate full calculated replacement at {dose:.1} mcg/day."),
            )
        };
    }

    if input.target.contains(lab) {
        return step(
            StepKind::Continue,
            current,
            current,
            format!("TSH {lab:.2} on target: continue current dose of {current:.1} mcg/day."),
        );
    }

    if input.target.is_above(lab) {
        if input.risk.is_pregnant {
            let dose = (current * config.dose.pregnancy_increase_factor).min(cap);
            if dose <= current {
                return hold_at_cap(current, lab, cap);
            }
            return step(
                StepKind::PregnancyUrgent,
                current,
                dose,
                format!(
                    "URGENT: TSH {lab:.2} above the pregnancy target ({:.2}). Increase now to \
                     {dose:.1} mcg/day and recheck TSH in 4 weeks.",
                    input.target.high
                ),
            );
        }
        return increase(input, config);
    }

    let dose = (current - t.fine_step_mcg).max(0.0);
    if input.risk.has_comorbid_risk() {
        step(
            StepKind::DecreaseUrgent,
            current,
            dose,
            format!(
                "TSH {lab:.2} below target with cardiovascular or bone risk: reduce to \
                 {dose:.1} mcg/day and review promptly."
            ),
        )
    } else {
        step(
            StepKind::Decrease,
            current,
            dose,
            format!("TSH {lab:.2} below target: reduce to {dose:.1} mcg/day and recheck in 6-8 weeks."),
        )
    }
}

/// Above target, not pregnant.
fn increase(input: &TitrationInput, config: &DosingConfig) -> TitrationStep {
    let current = input.current_dose_mcg;
    let lab = input.current_lab_value;
    let t = &config.titration;
    let cap = config.dose.max_daily_dose_mcg;

    if input.risk.high_cv_risk {
        let dose = (current + t.fine_step_mcg).min(cap);
        if dose <= current {
            return hold_at_cap(current, lab, cap);
        }
        return step(
            StepKind::IncreaseCapped,
            current,
            dose,
            format!(
                "TSH {lab:.2} above target. High cardiovascular risk: increase by at most \
                 {:.1} mcg (total {dose:.1} mcg/day). Recheck in 6-8 weeks.",
                t.fine_step_mcg
            ),
        );
    }

    let gap = input.ideal_dose_mcg - current;
    if gap > 0.0 && current >= cap {
        return hold_at_cap(current, lab, cap);
    }

    if gap > t.step_mcg {
        let dose = (current + t.step_mcg).min(cap);
        step(
            StepKind::Increase,
            current,
            dose,
            format!(
                "TSH {lab:.2} above target and dose {gap:.1} mcg below the calculated dose: \
                 increase by {:.1} mcg (total {dose:.1} mcg/day), further steps may follow.",
                t.step_mcg
            ),
        )
    } else if gap > t.fine_step_mcg {
        let dose = (current + t.fine_step_mcg).min(cap);
        step(
            StepKind::Increase,
            current,
            dose,
            format!(
                "TSH {lab:.2} above target: increase by {:.1} mcg (total {dose:.1} mcg/day).",
                t.fine_step_mcg
            ),
        )
    } else if gap > 0.0 {
        let dose = input.ideal_dose_mcg.min(cap);
        step(
            StepKind::CloseGap,
            current,
            dose,
            format!("TSH {lab:.2} above target: move to the calculated dose of {dose:.1} mcg/day."),
        )
    } else {
        step(
            StepKind::HoldCheckAdherence,
            current,
            current,
            format!(
                "TSH {lab:.2} above target but the current dose already meets the weight-based \
                 calculation. Check adherence and absorption before increasing."
            ),
        )
    }
}

fn hold_at_cap(current: f64, lab: f64, cap: f64) -> TitrationStep {
    step(
        StepKind::HoldAtCap,
        current,
        current,
        format!(
            "TSH {lab:.2} above target but {current:.1} mcg/day already meets the \
             {cap:.1} mcg/day maximum: hold the dose and review for malabsorption or \
             poor adherence."
        ),
    )
}

fn step(kind: StepKind, current: f64, next: f64, rationale: String) -> TitrationStep {
    TitrationStep {
        kind,
        next_dose_mcg: next,
        change_mcg: next - current,
        rationale,
    }
}
