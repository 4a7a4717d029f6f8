//! The protocol as a linear wizard over nine screens.
//!
//! [`WizardState`] is an immutable snapshot; [`reduce`] applies one user
//! action and returns the next snapshot. Actions that the current state does
//! not allow (leaving a screen before its data is collected, tallying words
//! with no reading running) leave the state unchanged, which is how a host
//! renders a disabled control.

use jiff::civil::Date;
use serde::Serialize;
use tracing::{debug, info};

use wilkins_core::catalog::GratingId;
use wilkins_core::models::patient::Patient;
use wilkins_core::models::pattern_glare::PatternGlareResponses;
use wilkins_core::models::reading::{ReadingPhase, ReadingSamples};
use wilkins_core::models::selection::{ColorSelection, FamilyIndex, SaturationIndex};
use wilkins_core::models::symptoms::{Severity, SymptomResponses};

use crate::outcome::Outcome;
use crate::pattern_glare::{self, PatternGlareReport};
use crate::prescription::{self, Prescription};
use crate::reading::{CompletedReading, ReadingTimer};
use crate::symptoms::{self, SymptomScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Intro,
    Patient,
    Symptoms,
    PatternGlare { active_grating: Option<GratingId> },
    BaselineReading,
    ColorFamily,
    Saturation,
    Validation,
    Result,
}

impl Screen {
    pub const COUNT: usize = 9;

    pub fn index(self) -> usize {
        match self {
            Screen::Intro => 0,
            Screen::Patient => 1,
            Screen::Symptoms => 2,
            Screen::PatternGlare { .. } => 3,
            Screen::BaselineReading => 4,
            Screen::ColorFamily => 5,
            Screen::Saturation => 6,
            Screen::Validation => 7,
            Screen::Result => 8,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Some(match index {
            0 => Screen::Intro,
            1 => Screen::Patient,
            2 => Screen::Symptoms,
            3 => Screen::PatternGlare {
                active_grating: None,
            },
            4 => Screen::BaselineReading,
            5 => Screen::ColorFamily,
            6 => Screen::Saturation,
            7 => Screen::Validation,
            8 => Screen::Result,
            _ => return None,
        })
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Intro => "Start",
            Screen::Patient => "Patient",
            Screen::Symptoms => "Symptoms",
            Screen::PatternGlare { .. } => "Pattern Glare",
            Screen::BaselineReading => "Baseline Reading",
            Screen::ColorFamily => "Color",
            Screen::Saturation => "Saturation",
            Screen::Validation => "Validation",
            Screen::Result => "Result",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// The reading phase run on this screen, if any.
    pub fn reading_phase(self) -> Option<ReadingPhase> {
        match self {
            Screen::BaselineReading => Some(ReadingPhase::Baseline),
            Screen::Validation => Some(ReadingPhase::Tinted),
            _ => None,
        }
    }
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GoTo(Screen),
    Next,
    Back,
    SetPatientName(String),
    SetPatientAge(Option<u32>),
    SetComplaint(String),
    SetEvaluationDate(Date),
    SetSeverity {
        symptom_id: String,
        severity: Severity,
    },
    ShowGrating(GratingId),
    SetPatternSymptom {
        grating: GratingId,
        symptom_id: String,
        checked: bool,
    },
    SelectFamily(FamilyIndex),
    SelectSaturation(SaturationIndex),
    StartReading,
    Tick,
    IncrementWords,
    DecrementWords,
    FinishReading,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    pub screen: Screen,
    pub evaluation_date: Date,
    pub patient: Patient,
    pub symptoms: SymptomResponses,
    pub pattern_glare: PatternGlareResponses,
    pub selection: ColorSelection,
    pub baseline: ReadingSamples,
    pub tinted: ReadingSamples,
    pub timer: ReadingTimer,
}

impl WizardState {
    pub fn new(evaluation_date: Date) -> Self {
        Self {
            screen: Screen::Intro,
            evaluation_date,
            patient: Patient::default(),
            symptoms: SymptomResponses::new(),
            pattern_glare: PatternGlareResponses::new(),
            selection: ColorSelection::default(),
            baseline: ReadingSamples::new(),
            tinted: ReadingSamples::new(),
            timer: ReadingTimer::new(),
        }
    }

    /// Whether everything collected before `target` is in place. Screens at
    /// or before the current one are always reachable.
    pub fn can_enter(&self, target: Screen) -> bool {
        if self.timer.is_running() {
            return false;
        }
        let index = target.index();
        if index <= self.screen.index() {
            return true;
        }
        (index < 2 || self.patient.has_name())
            && (index < 5 || self.baseline.is_complete())
            && (index < 6 || self.selection.family.is_some())
            && (index < 8 || self.tinted.is_complete())
    }

    pub fn can_advance(&self) -> bool {
        self.screen.next().is_some_and(|next| self.can_enter(next))
    }

    pub fn samples(&self, phase: ReadingPhase) -> &ReadingSamples {
        match phase {
            ReadingPhase::Baseline => &self.baseline,
            ReadingPhase::Tinted => &self.tinted,
        }
    }

    pub fn symptom_score(&self) -> SymptomScore {
        symptoms::score(&self.symptoms)
    }

    pub fn suggested_families(&self) -> Vec<FamilyIndex> {
        symptoms::suggested_families(&self.symptoms)
    }

    pub fn pattern_glare_report(&self) -> PatternGlareReport {
        pattern_glare::interpret(&self.pattern_glare)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_samples(&self.baseline, &self.tinted)
    }

    pub fn prescription(&self) -> Prescription {
        prescription::assemble(self)
    }
}

/// Apply one action, producing the next state.
pub fn reduce(state: &WizardState, action: Action) -> WizardState {
    let mut next = state.clone();

    match action {
        Action::GoTo(target) => navigate(&mut next, target),
        Action::Next => {
            if let Some(target) = state.screen.next() {
                navigate(&mut next, target);
            }
        }
        Action::Back => {
            if let Some(target) = state.screen.previous() {
                navigate(&mut next, target);
            }
        }
        Action::SetPatientName(name) => next.patient.name = name,
        Action::SetPatientAge(age) => next.patient.age = age,
        Action::SetComplaint(complaint) => next.patient.complaint = complaint,
        Action::SetEvaluationDate(date) => next.evaluation_date = date,
        Action::SetSeverity {
            symptom_id,
            severity,
        } => {
            if let Err(e) = next.symptoms.set(&symptom_id, severity) {
                debug!(error = %e, "severity ignored");
            }
        }
        Action::ShowGrating(grating) => {
            if let Screen::PatternGlare { .. } = state.screen {
                next.screen = Screen::PatternGlare {
                    active_grating: Some(grating),
                };
            }
        }
        Action::SetPatternSymptom {
            grating,
            symptom_id,
            checked,
        } => {
            if let Err(e) = next.pattern_glare.set(grating, &symptom_id, checked) {
                debug!(error = %e, "pattern glare answer ignored");
            }
        }
        Action::SelectFamily(family) => next.selection.family = Some(family),
        Action::SelectSaturation(saturation) => next.selection.saturation = saturation,
        Action::StartReading => start_reading(&mut next),
        Action::Tick => {
            next.timer = state.timer.tick();
            if state.timer.is_running() && !next.timer.is_running() {
                debug!("reading countdown expired");
                finish_reading(&mut next);
            }
        }
        Action::IncrementWords => next.timer = state.timer.increment(),
        Action::DecrementWords => next.timer = state.timer.decrement(),
        Action::FinishReading => finish_reading(&mut next),
        Action::Reset => {
            info!("wizard reset");
            next = WizardState::new(state.evaluation_date);
        }
    }

    next
}

fn navigate(state: &mut WizardState, target: Screen) {
    if state.can_enter(target) {
        state.screen = target;
    } else {
        debug!(
            from = state.screen.title(),
            to = target.title(),
            "navigation blocked"
        );
    }
}

fn start_reading(state: &mut WizardState) {
    let Some(phase) = state.screen.reading_phase() else {
        debug!(
            screen = state.screen.title(),
            "no reading test on this screen"
        );
        return;
    };
    if state.samples(phase).is_complete() || state.timer.is_running() {
        return;
    }
    if phase == ReadingPhase::Tinted && state.selection.family.is_none() {
        return;
    }
    state.timer = state.timer.start(phase);
    info!(
        phase = phase.label(),
        round = state.samples(phase).len() + 1,
        "reading started"
    );
}

fn finish_reading(state: &mut WizardState) {
    let (timer, completed) = state.timer.finish();
    state.timer = timer;
    let Some(CompletedReading {
        phase,
        wpm,
        words,
        elapsed_seconds,
    }) = completed
    else {
        return;
    };

    let samples = match phase {
        ReadingPhase::Baseline => &mut state.baseline,
        ReadingPhase::Tinted => &mut state.tinted,
    };
    if !samples.push(wpm) {
        debug!(
            phase = phase.label(),
            "phase already complete, reading dropped"
        );
        return;
    }
    info!(
        phase = phase.label(),
        words,
        elapsed_seconds,
        wpm,
        "reading recorded"
    );

    if samples.is_complete() {
        let target = match phase {
            ReadingPhase::Baseline => Screen::ColorFamily,
            ReadingPhase::Tinted => Screen::Result,
        };
        navigate(state, target);
    }
}
