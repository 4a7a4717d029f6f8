use jiff::civil::date;
use wilkins_core::catalog::GratingId;
use wilkins_protocol::wizard::{Action, Screen, WizardState, reduce};
use wilkins_terminal::screens::render;

fn on(screen: Screen) -> WizardState {
    let mut state = WizardState::new(date(2026, 3, 14));
    state.screen = screen;
    state
}

#[test]
fn intro_numbers_every_protocol_stage() {
    let text = render(&on(Screen::Intro));
    assert!(text.contains("1. Patient details: Identification and main complaint\n"));
    assert!(text.contains("8. Prescription: Report with specifications"));
    assert!(!text.contains("9. "));
}

#[test]
fn saturation_marks_the_selected_level() {
    let text = render(&on(Screen::Saturation));
    assert!(text.contains("*3. Moderate"));
    assert!(text.contains(" 1. Very low"));
    assert!(!text.contains("Preview"));
}

#[test]
fn active_grating_shows_ticked_symptoms() {
    let state = on(Screen::PatternGlare {
        active_grating: Some(GratingId::Mid),
    });
    let state = reduce(
        &state,
        Action::SetPatternSymptom {
            grating: GratingId::Mid,
            symptom_id: "ps_blur".to_string(),
            checked: true,
        },
    );

    let text = render(&state);
    assert!(text.contains("1. [x] Blurring of the stripes"));
    assert!(text.contains("2. [ ] "));
    assert!(text.contains("(not scored)"));
}
