use serde::Serialize;
use tera::{Context, Tera};

use wilkins_protocol::prescription::{OVERLAY_CAVEAT, PATIENT_GUIDANCE, Prescription};
use wilkins_protocol::session_summaries;
use wilkins_protocol::wizard::WizardState;

use crate::error::ExportError;

pub const PRESCRIPTION_TEMPLATE_NAME: &str = "prescription.md";

/// Built-in prescription layout.
pub const PRESCRIPTION_TEMPLATE: &str = include_str!("../templates/prescription.md.tera");

/// Everything the prescription template can address.
#[derive(Debug, Clone, Serialize)]
pub struct PrintContext {
    pub header: String,
    pub rx: Prescription,
    pub tier: &'static str,
    pub symptom_band: &'static str,
    pub pattern_glare: &'static str,
    pub warnings: Vec<String>,
    pub caveat: &'static str,
    pub guidance: &'static str,
    /// Raw answers per instrument, appended after a page break.
    pub instruments: Vec<String>,
}

impl PrintContext {
    /// Fails when a recorded answer no longer validates against its instrument.
    pub fn from_state(state: &WizardState, header: &str) -> Result<Self, ExportError> {
        let rx = state.prescription();
        let instruments = session_summaries(state)?;

        Ok(Self {
            header: header.to_string(),
            tier: rx.tier.description(),
            symptom_band: rx.symptom_score.band().description(),
            pattern_glare: rx.pattern_glare.verdict.description(),
            warnings: rx.warning_messages(),
            caveat: OVERLAY_CAVEAT,
            guidance: PATIENT_GUIDANCE,
            instruments,
            rx,
        })
    }
}

/// Render a Tera template with a print context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The context fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &PrintContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in prescription layout.
pub fn render_prescription(context: &PrintContext) -> Result<String, ExportError> {
    let rendered = render_template(PRESCRIPTION_TEMPLATE_NAME, PRESCRIPTION_TEMPLATE, context)?;
    tracing::debug!(bytes = rendered.len(), "prescription rendered");
    Ok(rendered)
}
