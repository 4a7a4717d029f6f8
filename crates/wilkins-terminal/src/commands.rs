//! Translation of typed lines into wizard actions.

use thiserror::Error;

use wilkins_core::catalog::{GratingId, PATTERN_SYMPTOMS, SYMPTOMS};
use wilkins_core::models::selection::{FamilyIndex, SaturationIndex};
use wilkins_core::models::symptoms::Severity;
use wilkins_protocol::wizard::{Action, Screen, WizardState};

/// Most words counted by a single `+<n>`.
const MAX_WORD_BATCH: u32 = 200;

pub const HELP: &str = "\
n / next          next screen
b / back          previous screen
go <0-8>          jump to a screen
reset             start over with a new patient
p / print         write the prescription files
q / quit          leave
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Vec<Action>),
    Print,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("expected a number between {min} and {max}, got {got:?}")]
    OutOfRange { min: usize, max: usize, got: String },
    #[error("invalid date {0:?}, use yyyy-mm-dd")]
    InvalidDate(String),
    #[error("show a grating first (low, mid or high)")]
    NoGrating,
}

fn one(action: Action) -> Result<Command, CommandError> {
    Ok(Command::Apply(vec![action]))
}

/// Parse a 1-based choice into a 0-based index below `len`.
fn choice(text: &str, len: usize) -> Result<usize, CommandError> {
    text.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| CommandError::OutOfRange {
            min: 1,
            max: len,
            got: text.trim().to_string(),
        })
}

pub fn parse(state: &WizardState, line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word {
        "n" | "next" => return one(Action::Next),
        "b" | "back" => return one(Action::Back),
        "reset" => return one(Action::Reset),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "?" | "help" => return Ok(Command::Help),
        "p" | "print" => return Ok(Command::Print),
        "go" => {
            let index = rest
                .parse::<usize>()
                .ok()
                .and_then(Screen::from_index)
                .ok_or_else(|| CommandError::OutOfRange {
                    min: 0,
                    max: Screen::COUNT - 1,
                    got: rest.to_string(),
                })?;
            return one(Action::GoTo(index));
        }
        _ => {}
    }

    match state.screen {
        Screen::Patient => patient(word, rest),
        Screen::Symptoms => symptom(word, rest),
        Screen::PatternGlare { active_grating } => pattern_glare(state, active_grating, word),
        Screen::BaselineReading | Screen::Validation => reading(word),
        Screen::ColorFamily => {
            let index = choice(word, wilkins_core::catalog::COLOR_FAMILIES.len())?;
            let family = FamilyIndex::new(index)
                .map_err(|_| CommandError::Unknown(line.to_string()))?;
            one(Action::SelectFamily(family))
        }
        Screen::Saturation => {
            let index = choice(word, wilkins_core::catalog::SATURATION_LEVELS.len())?;
            let level = SaturationIndex::new(index)
                .map_err(|_| CommandError::Unknown(line.to_string()))?;
            one(Action::SelectSaturation(level))
        }
        Screen::Intro | Screen::Result => Err(CommandError::Unknown(line.to_string())),
    }
}

fn patient(word: &str, rest: &str) -> Result<Command, CommandError> {
    match word {
        "name" => one(Action::SetPatientName(rest.to_string())),
        "complaint" => one(Action::SetComplaint(rest.to_string())),
        "age" if rest.is_empty() => one(Action::SetPatientAge(None)),
        "age" => {
            let age = rest.parse::<u32>().map_err(|_| CommandError::OutOfRange {
                min: 0,
                max: 120,
                got: rest.to_string(),
            })?;
            one(Action::SetPatientAge(Some(age)))
        }
        "date" => {
            let date = rest
                .parse::<jiff::civil::Date>()
                .map_err(|_| CommandError::InvalidDate(rest.to_string()))?;
            one(Action::SetEvaluationDate(date))
        }
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn symptom(word: &str, rest: &str) -> Result<Command, CommandError> {
    let index = choice(word, SYMPTOMS.len())?;
    let severity = rest
        .parse::<u8>()
        .ok()
        .and_then(|v| Severity::new(v).ok())
        .ok_or_else(|| CommandError::OutOfRange {
            min: 0,
            max: usize::from(Severity::MAX),
            got: rest.to_string(),
        })?;
    one(Action::SetSeverity {
        symptom_id: SYMPTOMS[index].id.to_string(),
        severity,
    })
}

fn pattern_glare(
    state: &WizardState,
    active: Option<GratingId>,
    word: &str,
) -> Result<Command, CommandError> {
    match word {
        "low" => one(Action::ShowGrating(GratingId::Low)),
        "mid" => one(Action::ShowGrating(GratingId::Mid)),
        "high" => one(Action::ShowGrating(GratingId::High)),
        _ => {
            let grating = active.ok_or(CommandError::NoGrating)?;
            let index = choice(word, PATTERN_SYMPTOMS.len())?;
            let symptom_id = PATTERN_SYMPTOMS[index].id;
            one(Action::SetPatternSymptom {
                grating,
                symptom_id: symptom_id.to_string(),
                checked: !state.pattern_glare.is_checked(grating, symptom_id),
            })
        }
    }
}

fn reading(word: &str) -> Result<Command, CommandError> {
    match word {
        "s" | "start" => one(Action::StartReading),
        "f" | "finish" | "stop" => one(Action::FinishReading),
        "-" => one(Action::DecrementWords),
        "+" | "" => one(Action::IncrementWords),
        other => {
            let count = other
                .strip_prefix('+')
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|n| (1..=MAX_WORD_BATCH).contains(n))
                .ok_or_else(|| CommandError::Unknown(other.to_string()))?;
            Ok(Command::Apply(
                std::iter::repeat_n(Action::IncrementWords, count as usize).collect(),
            ))
        }
    }
}
