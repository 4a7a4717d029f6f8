//! Text rendering of each wizard screen.

use wilkins_core::catalog::{
    self, COLOR_FAMILIES, GRATINGS, PATTERN_SYMPTOMS, PROTOCOL_OVERVIEW, READING_WORDS,
    SATURATION_LEVELS, SCREENING_QUESTION, SEVERITY_LABELS, SYMPTOMS,
};
use wilkins_core::color::{self, FAMILY_SWATCH_SATURATION, HexColor, lightness};
use wilkins_core::models::reading::{ReadingPhase, ReadingSamples};
use wilkins_protocol::pattern_glare::GratingSignal;
use wilkins_protocol::reading::ReadingTimer;
use wilkins_protocol::wizard::{Screen, WizardState};

const BAR_WIDTH: usize = 30;

/// Render the whole frame for the current screen.
pub fn render(state: &WizardState) -> String {
    let mut out = header(state);
    let body = match state.screen {
        Screen::Intro => intro(),
        Screen::Patient => patient(state),
        Screen::Symptoms => symptoms(state),
        Screen::PatternGlare { active_grating } => pattern_glare(state, active_grating),
        Screen::BaselineReading => reading(state, ReadingPhase::Baseline),
        Screen::ColorFamily => color_family(state),
        Screen::Saturation => saturation(state),
        Screen::Validation => reading(state, ReadingPhase::Tinted),
        Screen::Result => result(state),
    };
    out.push_str(&body);
    out.push_str(&footer(state));
    out
}

fn header(state: &WizardState) -> String {
    let steps: Vec<String> = (0..Screen::COUNT)
        .filter_map(Screen::from_index)
        .map(|s| {
            if s.index() == state.screen.index() {
                format!("[{}]", s.title())
            } else {
                s.title().to_string()
            }
        })
        .collect();
    format!(
        "\n{}\n== {}. {} ==\n\n",
        steps.join(" > "),
        state.screen.index(),
        state.screen.title()
    )
}

fn footer(state: &WizardState) -> String {
    let mut hints = Vec::new();
    if state.screen.previous().is_some() {
        hints.push("b = back");
    }
    if state.can_advance() {
        hints.push("n = next");
    }
    hints.push("? = help");
    hints.push("q = quit");
    format!("\n({})\n", hints.join(", "))
}

/// Horizontal score bar filled to `ratio` (0 to 1).
pub fn bar(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn swatch(hex: &HexColor) -> String {
    let fg = color::contrast_color(hex);
    format!("{} on {}", fg.hex(), hex.to_uppercase())
}

fn intro() -> String {
    let mut out = String::from(
        "Wilkins colorimetry screening: symptoms, pattern glare, reading speed with and \
         without a colored filter, and a printable prescription.\n\n",
    );
    for (n, stage) in (1..).zip(PROTOCOL_OVERVIEW.iter()) {
        out.push_str(&format!("{n}. {}: {}\n", stage.title, stage.description));
    }
    out
}

fn patient(state: &WizardState) -> String {
    let p = &state.patient;
    let mut out = String::new();
    out.push_str(&format!("Name:       {}\n", p.name));
    out.push_str(&format!(
        "Age:        {}\n",
        p.age.map(|a| a.to_string()).unwrap_or_default()
    ));
    out.push_str(&format!("Complaint:  {}\n", p.complaint));
    out.push_str(&format!(
        "Date:       {}\n",
        state.evaluation_date.strftime("%d/%m/%Y")
    ));
    if !p.has_name() {
        out.push_str("\nEnter the patient's name to continue.\n");
    }
    out.push_str("\nname <text> | age <years> | complaint <text> | date <yyyy-mm-dd>\n");
    out
}

fn symptoms(state: &WizardState) -> String {
    let mut out = format!("{SCREENING_QUESTION}\n\n");
    let legend: Vec<String> = SEVERITY_LABELS
        .iter()
        .enumerate()
        .map(|(i, l)| format!("{i} {l}"))
        .collect();
    out.push_str(&format!("Scale: {}\n\n", legend.join(" · ")));

    for (i, symptom) in SYMPTOMS.iter().enumerate() {
        let answer = if state.symptoms.is_answered(symptom.id) {
            state.symptoms.get(symptom.id).label()
        } else {
            ""
        };
        out.push_str(&format!("{:>2}. {:<60} {answer}\n", i + 1, symptom.text));
    }

    let score = state.symptom_score();
    out.push_str(&format!(
        "\nScore {} / {} {} {:?}\n{}\n",
        score.score,
        score.max_score,
        bar(score.ratio()),
        score.tone(),
        score.band().description()
    ));

    let suggested = state.suggested_families();
    if !suggested.is_empty() {
        let names: Vec<&str> = suggested.iter().map(|f| f.family().name).collect();
        out.push_str(&format!("Suggested families: {}\n", names.join(", ")));
    }
    out.push_str("\n<item> <0-4> to answer\n");
    out
}

fn pattern_glare(state: &WizardState, active: Option<catalog::GratingId>) -> String {
    let report = state.pattern_glare_report();
    let mut out = String::from(
        "Show each grating at reading distance and tick what the patient reports.\n\n",
    );

    for g in &GRATINGS {
        let count = state.pattern_glare.count(g.id);
        let marker = if Some(g.id) == active { ">" } else { " " };
        let scored = if g.clinically_scored {
            ""
        } else {
            " (not scored)"
        };
        out.push_str(&format!(
            "{marker} {:<5} {} {}{scored}: {count}/{}\n",
            format!("{:?}", g.id).to_lowercase(),
            g.label,
            g.cycles,
            PATTERN_SYMPTOMS.len()
        ));
    }

    if let Some(id) = active {
        let g = catalog::grating(id);
        out.push_str(&format!("\n{}\n", g.description));
        out.push_str(&format!("{}\n", stripes(g.stripe_width)));
        for (i, symptom) in PATTERN_SYMPTOMS.iter().enumerate() {
            let checked = state.pattern_glare.is_checked(id, symptom.id);
            let mark = if checked { "x" } else { " " };
            out.push_str(&format!("  {}. [{mark}] {}\n", i + 1, symptom.text));
        }
    }

    if state.pattern_glare.any_checked() {
        out.push('\n');
        for result in [report.low, report.mid] {
            let signal = match result.signal {
                GratingSignal::Normal => "normal",
                GratingSignal::Mild => "mild",
                GratingSignal::Attention => "attention",
                GratingSignal::Positive => "positive",
            };
            out.push_str(&format!(
                "{:<5} {} {}% {signal}\n",
                format!("{:?}", result.grating).to_lowercase(),
                bar(f64::from(result.percent) / 100.0),
                result.percent
            ));
        }
        out.push_str(&format!(
            "{}\nConfidence: {:?}\n",
            report.verdict.description(),
            report.confidence()
        ));
    }
    out.push_str("\nlow | mid | high to show a grating, <n> to toggle a symptom\n");
    out
}

/// A row of alternating stripes scaled down from the grating's pixel width.
fn stripes(stripe_width: u16) -> String {
    let cell = usize::from((stripe_width / 4).max(1));
    let mut row = String::new();
    let mut dark = true;
    while row.chars().count() < 64 {
        let ch = if dark { '█' } else { ' ' };
        row.extend(std::iter::repeat_n(ch, cell));
        dark = !dark;
    }
    row.chars().take(64).collect()
}

fn ordinal(round: usize) -> &'static str {
    match round {
        1 => "1st",
        _ => "2nd",
    }
}

fn samples_line(samples: &ReadingSamples) -> String {
    let values: Vec<String> = samples.as_slice().iter().map(|w| format!("{w} wpm")).collect();
    if values.is_empty() {
        "no readings yet".to_string()
    } else {
        values.join(" · ")
    }
}

fn reading(state: &WizardState, phase: ReadingPhase) -> String {
    let samples = state.samples(phase);
    let mut out = format!("Reading {}\n", phase.label());

    if phase == ReadingPhase::Tinted {
        match state.selection.tint(lightness::VALIDATION_SWATCH) {
            Some(hex) => out.push_str(&format!(
                "Filter: {} {}% ({})\n",
                state.selection.family.map(|f| f.family().name).unwrap_or_default(),
                state.selection.saturation_percent(),
                swatch(&hex)
            )),
            None => out.push_str("Choose a color family first.\n"),
        }
    }

    out.push_str(&format!("Readings: {}\n\n", samples_line(samples)));

    let timer = state.timer;
    if timer.is_running() {
        out.push_str(&running(state, &timer, samples.len() + 1));
    } else if samples.is_complete() {
        out.push_str("Both readings recorded.\n");
    } else {
        out.push_str(&format!(
            "{} reading of {}. Type s to start the 60 second countdown.\n",
            ordinal(samples.len() + 1),
            ReadingSamples::REQUIRED
        ));
    }
    out
}

fn running(state: &WizardState, timer: &ReadingTimer, round: usize) -> String {
    let mut out = format!(
        "{} reading of {}  {:>2}s {}  words: {}\n",
        ordinal(round),
        ReadingSamples::REQUIRED,
        timer.remaining(),
        bar(timer.progress()),
        timer.words()
    );
    let background = if timer.overlay_active() {
        state.selection.tint(lightness::OVERLAY)
    } else {
        state.selection.tint(lightness::READING_BACKGROUND)
    };
    if let Some(hex) = background {
        out.push_str(&format!("Overlay {}\n", swatch(&hex)));
    }
    out.push('\n');
    out.push_str(&corpus());
    out.push_str("\n+ / +<n> count words, - undo, f finish\n");
    out
}

/// The word list three times over, ten words to a line.
pub fn corpus() -> String {
    let words: Vec<&str> = READING_WORDS
        .iter()
        .copied()
        .cycle()
        .take(READING_WORDS.len() * 3)
        .collect();
    let mut out = String::new();
    for line in words.chunks(10) {
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn color_family(state: &WizardState) -> String {
    let suggested = state.suggested_families();
    let mut out = String::from("Pick the color family that makes the text most comfortable.\n\n");
    for (i, family) in COLOR_FAMILIES.iter().enumerate() {
        let hex = color::hsl_to_hex(
            f64::from(family.hue),
            FAMILY_SWATCH_SATURATION,
            lightness::FAMILY_SWATCH,
        );
        let selected = state.selection.family.is_some_and(|f| f.index() == i);
        let mark = if selected { "*" } else { " " };
        let hint = if suggested.iter().any(|f| f.index() == i) {
            " (suggested)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{mark}{}. {:<13} {}  {}{hint}\n",
            i + 1,
            family.name,
            swatch(&hex),
            family.description
        ));
    }
    if let Some(preview) = state.selection.tint(lightness::LIVE_PREVIEW) {
        out.push_str(&format!("\nPreview {}\n", swatch(&preview)));
    }
    out.push_str("\n<n> to choose\n");
    out
}

fn saturation(state: &WizardState) -> String {
    let mut out = String::from("Adjust the filter intensity.\n\n");
    let hue = state.selection.hue();
    let selected = state.selection.saturation.index();
    for (i, level) in SATURATION_LEVELS.iter().enumerate() {
        let mark = if selected == i { "*" } else { " " };
        let hex = hue.map(|h| {
            let saturation = f64::from(level.value);
            color::hsl_to_hex(f64::from(h), saturation, lightness::SATURATION_OPTION)
        });
        out.push_str(&format!(
            "{mark}{}. {:<10} {:>2}% {}  {}\n",
            i + 1,
            level.label,
            level.value,
            hex.as_ref().map(swatch).unwrap_or_default(),
            level.description
        ));
    }
    if let Some(preview) = state.selection.tint(lightness::LIVE_PREVIEW) {
        out.push_str(&format!("\nPreview {}\n", swatch(&preview)));
    }
    out.push_str("\n<n> to choose\n");
    out
}

fn result(state: &WizardState) -> String {
    let rx = state.prescription();
    let mut out = String::new();

    if let Some(color) = &rx.color {
        out.push_str(&format!(
            "{} {}% ({} text on {})\n\n",
            color.family,
            color.saturation,
            color.banner_text.hex(),
            color.banner.to_uppercase()
        ));
    }

    let width = rx.lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
    for line in &rx.lines {
        out.push_str(&format!("{:<width$}  {}\n", line.label, line.value));
    }

    out.push_str(&format!("\n{}\n", rx.tier.description()));
    if let Some(reason) = &rx.significance {
        out.push_str(&format!("Criterion: {reason}\n"));
    }
    for warning in rx.warning_messages() {
        out.push_str(&format!("! {warning}\n"));
    }
    out.push_str("\np = print, reset = new patient\n");
    out
}
