mod common;

use common::{apply, at_baseline, at_validation, phase_len, read, today};
use wilkins_core::catalog::GratingId;
use wilkins_core::models::reading::ReadingPhase;
use wilkins_core::models::selection::{FamilyIndex, SaturationIndex};
use wilkins_core::models::symptoms::Severity;
use wilkins_protocol::reading::TimerStatus;
use wilkins_protocol::wizard::{Action, Screen, WizardState, reduce};

#[test]
fn screens_round_trip_through_their_index() {
    for index in 0..Screen::COUNT {
        let screen = Screen::from_index(index).unwrap();
        assert_eq!(screen.index(), index);
    }
    assert!(Screen::from_index(Screen::COUNT).is_none());
    assert!(Screen::Intro.previous().is_none());
    assert!(Screen::Result.next().is_none());
}

#[test]
fn patient_name_gates_the_symptom_screen() {
    let state = apply(WizardState::new(today()), [Action::Next, Action::Next]);
    assert_eq!(state.screen, Screen::Patient);
    assert!(!state.can_advance());

    let blank = Action::SetPatientName("  ".to_string());
    let state = apply(state, [blank, Action::Next]);
    assert_eq!(state.screen, Screen::Patient);

    let named = Action::SetPatientName("Ana".to_string());
    let state = apply(state, [named, Action::Next]);
    assert_eq!(state.screen, Screen::Symptoms);
}

#[test]
fn baseline_screen_needs_exactly_two_samples() {
    let state = at_baseline();
    assert_eq!(state.screen, Screen::BaselineReading);
    assert!(!state.can_advance());

    let state = read(state, 0, 60);
    assert_eq!(phase_len(&state, ReadingPhase::Baseline), 1);
    assert_eq!(state.screen, Screen::BaselineReading);
    let blocked = reduce(&state, Action::GoTo(Screen::ColorFamily));
    assert_eq!(blocked.screen, Screen::BaselineReading);

    // Zero-word readings still count as samples.
    let state = read(state, 0, 60);
    assert_eq!(state.baseline.as_slice(), &[0, 0]);
    assert_eq!(state.screen, Screen::ColorFamily);
}

#[test]
fn jumping_ahead_checks_every_earlier_prerequisite() {
    let state = apply(
        WizardState::new(today()),
        [Action::SetPatientName("Ana".to_string())],
    );
    assert!(state.can_enter(Screen::Symptoms));
    assert!(!state.can_enter(Screen::ColorFamily));
    assert!(!state.can_enter(Screen::Result));

    let state = reduce(&state, Action::GoTo(Screen::BaselineReading));
    assert_eq!(state.screen, Screen::BaselineReading);
}

#[test]
fn going_back_is_always_allowed() {
    let state = at_baseline();
    let state = reduce(&state, Action::Back);
    assert!(matches!(state.screen, Screen::PatternGlare { .. }));
    let state = reduce(&state, Action::GoTo(Screen::Intro));
    assert_eq!(state.screen, Screen::Intro);
}

#[test]
fn color_family_gates_saturation() {
    let mut state = at_baseline();
    state = read(state, 80, 60);
    state = read(state, 90, 60);
    assert_eq!(state.screen, Screen::ColorFamily);

    let blocked = reduce(&state, Action::Next);
    assert_eq!(blocked.screen, Screen::ColorFamily);

    let state = apply(
        state,
        [
            Action::SelectFamily(FamilyIndex::new(3).unwrap()),
            Action::Next,
        ],
    );
    assert_eq!(state.screen, Screen::Saturation);
    assert_eq!(state.selection.saturation.index(), 2);
}

#[test]
fn tinted_phase_reaches_the_result() {
    let state = at_validation([100, 100], 1);
    assert_eq!(state.screen, Screen::Validation);
    assert!(!state.can_enter(Screen::Result));

    let state = reduce(&state, Action::StartReading);
    assert!(state.timer.overlay_active());

    let state = reduce(&state, Action::FinishReading);
    assert_eq!(state.tinted.as_slice(), &[0]);
    assert_eq!(state.screen, Screen::Validation);

    let state = read(state, 122, 60);
    assert_eq!(state.screen, Screen::Result);
    assert!(!state.timer.overlay_active());
}

#[test]
fn expiry_records_the_reading_implicitly() {
    let state = read(at_baseline(), 42, 60);
    assert_eq!(state.timer.status(), TimerStatus::Idle);
    assert_eq!(state.baseline.as_slice(), &[42]);
}

#[test]
fn reading_only_starts_on_reading_screens() {
    let state = apply(
        WizardState::new(today()),
        [Action::Next, Action::StartReading],
    );
    assert_eq!(state.timer.status(), TimerStatus::Idle);
}

#[test]
fn navigation_is_blocked_while_reading() {
    let state = reduce(&at_baseline(), Action::StartReading);
    let state = reduce(&state, Action::Back);
    assert_eq!(state.screen, Screen::BaselineReading);
    assert!(state.timer.is_running());
}

#[test]
fn a_complete_phase_cannot_be_extended() {
    let state = at_validation([60, 60], 0);
    let state = reduce(&state, Action::GoTo(Screen::BaselineReading));
    assert_eq!(state.screen, Screen::BaselineReading);
    let state = reduce(&state, Action::StartReading);
    assert_eq!(state.timer.status(), TimerStatus::Idle);
    assert_eq!(phase_len(&state, ReadingPhase::Baseline), 2);
}

#[test]
fn grating_selection_lives_on_the_pattern_glare_screen() {
    let state = apply(
        WizardState::new(today()),
        [
            Action::SetPatientName("Ana".to_string()),
            Action::GoTo(Screen::PatternGlare {
                active_grating: None,
            }),
            Action::ShowGrating(GratingId::Mid),
            Action::SetPatternSymptom {
                grating: GratingId::Mid,
                symptom_id: "ps_blur".to_string(),
                checked: true,
            },
        ],
    );
    assert_eq!(
        state.screen,
        Screen::PatternGlare {
            active_grating: Some(GratingId::Mid)
        }
    );
    assert_eq!(state.pattern_glare_report().mid.count, 1);

    let back = reduce(&state, Action::Back);
    let elsewhere = reduce(&back, Action::ShowGrating(GratingId::Low));
    assert_eq!(elsewhere.screen, Screen::Symptoms);
}

#[test]
fn unknown_symptom_ids_are_ignored() {
    let state = WizardState::new(today());
    let next = reduce(
        &state,
        Action::SetSeverity {
            symptom_id: "nope".to_string(),
            severity: Severity::new(4).unwrap(),
        },
    );
    assert_eq!(next, state);
}

#[test]
fn reducer_does_not_mutate_the_previous_snapshot() {
    let before = at_baseline();
    let after = reduce(&before, Action::StartReading);
    assert_eq!(before.timer.status(), TimerStatus::Idle);
    assert_eq!(after.timer.status(), TimerStatus::Running);
}

#[test]
fn reset_returns_to_initial_state() {
    let state = apply(
        at_validation([70, 80], 5),
        [Action::SelectSaturation(SaturationIndex::new(4).unwrap())],
    );
    let reset = reduce(&state, Action::Reset);
    assert_eq!(reset, WizardState::new(today()));
}
