#![allow(dead_code)]

use jiff::civil::{Date, date};
use wilkins_core::models::reading::ReadingPhase;
use wilkins_core::models::selection::FamilyIndex;
use wilkins_protocol::wizard::{Action, Screen, WizardState, reduce};

pub fn today() -> Date {
    date(2026, 3, 14)
}

pub fn apply(state: WizardState, actions: impl IntoIterator<Item = Action>) -> WizardState {
    actions
        .into_iter()
        .fold(state, |state, action| reduce(&state, action))
}

/// Run one reading on the current screen: tally `words`, let `seconds` pass,
/// then stop manually (or let it expire when `seconds` is 60).
pub fn read(state: WizardState, words: u32, seconds: u32) -> WizardState {
    let mut state = reduce(&state, Action::StartReading);
    for _ in 0..words {
        state = reduce(&state, Action::IncrementWords);
    }
    for _ in 0..seconds {
        state = reduce(&state, Action::Tick);
    }
    if state.timer.is_running() {
        state = reduce(&state, Action::FinishReading);
    }
    state
}

/// A session standing on the baseline reading screen.
pub fn at_baseline() -> WizardState {
    apply(
        WizardState::new(today()),
        [
            Action::Next,
            Action::SetPatientName("Ana Souza".to_string()),
            Action::Next,
            Action::Next,
            Action::Next,
        ],
    )
}

/// A session standing on the validation screen with the given baseline
/// readings taken (each as words read over a full minute).
pub fn at_validation(baseline: [u32; 2], family: usize) -> WizardState {
    let mut state = at_baseline();
    for words in baseline {
        state = read(state, words, 60);
    }
    assert_eq!(state.screen, Screen::ColorFamily);
    apply(
        state,
        [
            Action::SelectFamily(FamilyIndex::new(family).unwrap()),
            Action::Next,
            Action::Next,
        ],
    )
}

pub fn phase_len(state: &WizardState, phase: ReadingPhase) -> usize {
    state.samples(phase).len()
}
