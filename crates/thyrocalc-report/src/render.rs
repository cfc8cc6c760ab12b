use tera::{Context, Tera};
use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::result::CalculationResult;

use crate::context::SummaryContext;
use crate::error::ReportError;

pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

pub const SUMMARY_TEMPLATE: &str = "\
Thyroid Dose & Suppression Summary
==================================
Scenario:          {{ scenario }}
Clinical goal:     {{ suppression }}
Target TSH:        {{ target_range }}
Effective weight:  {{ effective_weight }} kg{% if bmi %} (BMI {{ bmi }}){% endif %}
Calculated dose:   {{ ideal_dose }} mcg/day
{% if next_dose %}Next dose:         {{ next_dose }} mcg/day
{% endif %}
Titration: {{ rationale }}
Tablet:    {{ tablet }}
{% if flags %}
Safety alerts:
{% for flag in flags %}  - {{ flag }}
{% endfor %}{% endif %}
Decision support only. Confirm every prescription clinically.
";

/// Render a Tera template against the summary view of `result`.
///
/// `template_name` decides autoescaping the way Tera does (`.html` names
/// are escaped), so text templates should use a `.txt` name.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    result: &CalculationResult,
    config: &DosingConfig,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(SummaryContext::new(result, config))?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, bytes = rendered.len(), "summary rendered");
    Ok(rendered)
}

/// Render the built-in plain-text summary.
pub fn render_summary(result: &CalculationResult, config: &DosingConfig) -> Result<String, ReportError> {
    render_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, result, config)
}
