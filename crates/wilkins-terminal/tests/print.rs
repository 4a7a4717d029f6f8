use jiff::civil::date;
use wilkins_protocol::wizard::{Action, WizardState, reduce};
use wilkins_terminal::config::TerminalConfig;
use wilkins_terminal::print::{file_stem, print_to, slug};

#[test]
fn slugs_are_file_safe() {
    assert_eq!(slug("Ana Souza"), "ana-souza");
    assert_eq!(slug("  O'Brien,  Kate "), "o-brien-kate");
    assert_eq!(slug("   "), "patient");
    assert_eq!(slug("Zoë"), "zo");
}

#[test]
fn stem_starts_with_the_iso_date() {
    let mut state = WizardState::new(date(2026, 3, 4));
    state = reduce(&state, Action::SetPatientName("Ana".to_string()));
    assert_eq!(file_stem(&state), "2026-03-04-ana-prescription");
}

#[test]
fn print_creates_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("rx").join("2026");
    let state = WizardState::new(date(2026, 3, 4));

    let files = print_to(&target, &state, &TerminalConfig::default()).unwrap();

    assert_eq!(
        files.text,
        target.join("2026-03-04-patient-prescription.txt")
    );
    let text = std::fs::read_to_string(&files.text).unwrap();
    assert!(text.starts_with("# Prescription · Wilkins Protocol"));
    assert!(files.docx.exists());
}
