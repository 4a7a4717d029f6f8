use std::path::{Path, PathBuf};

use wilkins_export::docx::generate_docx;
use wilkins_export::render::{PrintContext, render_prescription};
use wilkins_protocol::wizard::WizardState;

use crate::config::TerminalConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedFiles {
    pub text: PathBuf,
    pub docx: PathBuf,
}

/// Lowercase ASCII slug of a patient name, `patient` when nothing is left.
pub fn slug(name: &str) -> String {
    let mut out = String::new();
    for ch in name.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "patient".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<date>-<patient>-prescription`, without extension.
pub fn file_stem(state: &WizardState) -> String {
    format!(
        "{}-{}-prescription",
        state.evaluation_date,
        slug(&state.patient.name)
    )
}

/// Render the prescription and write it as text and DOCX into `dir`.
pub fn print_to(
    dir: &Path,
    state: &WizardState,
    config: &TerminalConfig,
) -> eyre::Result<PrintedFiles> {
    std::fs::create_dir_all(dir)
        .map_err(|e| eyre::eyre!("failed to create {}: {e}", dir.display()))?;

    let context = PrintContext::from_state(state, &config.clinic_header)?;
    let rendered = render_prescription(&context)?;
    let docx = generate_docx(&rendered, &config.styles)?;

    let stem = file_stem(state);
    let files = PrintedFiles {
        text: dir.join(format!("{stem}.txt")),
        docx: dir.join(format!("{stem}.docx")),
    };
    std::fs::write(&files.text, rendered.as_bytes())?;
    std::fs::write(&files.docx, docx)?;

    tracing::info!(
        text = %files.text.display(),
        docx = %files.docx.display(),
        "prescription printed"
    );
    Ok(files)
}
