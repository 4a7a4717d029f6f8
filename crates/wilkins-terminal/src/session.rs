use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};
use uuid::Uuid;

use wilkins_protocol::wizard::{Action, Screen, WizardState, reduce};

use crate::commands::{self, Command};
use crate::config::TerminalConfig;
use crate::print;
use crate::screens;
use crate::ticker::{self, Ticker};

/// One clinician sitting: the wizard state plus what printing needs.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub state: WizardState,
    pub config: TerminalConfig,
}

impl Session {
    pub fn new(state: WizardState, config: TerminalConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            state,
            config,
        }
    }

    fn apply(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    /// Drive the wizard from `input` until quit or end of input.
    ///
    /// While a reading runs, the one-second ticker races the input; it is
    /// dropped as soon as the reading stops for any reason.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> eyre::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut ticker: Option<Ticker> = None;

        write!(out, "{}", screens::render(&self.state))?;
        out.flush()?;

        loop {
            tokio::select! {
                _ = ticker::next_tick(&mut ticker) => {
                    let screen = self.state.screen;
                    self.apply(Action::Tick);
                    if self.state.timer.is_running() {
                        let remaining = self.state.timer.remaining();
                        if remaining % 10 == 0 || remaining <= 5 {
                            let words = self.state.timer.words();
                            writeln!(out, "  {remaining}s left, {words} words")?;
                        }
                    } else {
                        writeln!(out, "\nTime is up.")?;
                        self.redraw(screen, out)?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("input closed");
                        break;
                    };
                    if !self.handle_line(&line, out)? {
                        break;
                    }
                }
            }

            match (self.state.timer.is_running(), ticker.is_some()) {
                (true, false) => ticker = Some(Ticker::start()),
                (false, true) => ticker = None,
                _ => {}
            }
            out.flush()?;
        }

        info!(session = %self.id, screen = self.state.screen.title(), "session closed");
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> eyre::Result<bool> {
        let on_reading = self.state.screen.reading_phase().is_some();
        if line.trim().is_empty() && !(on_reading && self.state.timer.is_running()) {
            self.redraw(self.state.screen, out)?;
            return Ok(true);
        }

        match commands::parse(&self.state, line) {
            Ok(Command::Quit) => return Ok(false),
            Ok(Command::Help) => write!(out, "{}", commands::HELP)?,
            Ok(Command::Print) => self.print(out)?,
            Ok(Command::Apply(actions)) => {
                let screen = self.state.screen;
                let tallying = actions.iter().all(|a| {
                    matches!(a, Action::IncrementWords | Action::DecrementWords)
                });
                for action in actions {
                    self.apply(action);
                }
                if tallying && self.state.timer.is_running() {
                    writeln!(out, "  words: {}", self.state.timer.words())?;
                } else {
                    self.redraw(screen, out)?;
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        Ok(true)
    }

    fn redraw<W: Write>(&self, before: Screen, out: &mut W) -> eyre::Result<()> {
        if before.index() != self.state.screen.index() {
            debug!(
                from = before.title(),
                to = self.state.screen.title(),
                "screen changed"
            );
        }
        write!(out, "{}", screens::render(&self.state))?;
        Ok(())
    }

    fn print<W: Write>(&self, out: &mut W) -> eyre::Result<()> {
        if self.state.screen != Screen::Result {
            writeln!(out, "Complete the protocol before printing.")?;
            return Ok(());
        }
        match print::print_to(&self.config.output_dir, &self.state, &self.config) {
            Ok(files) => {
                writeln!(out, "Saved {}", files.text.display())?;
                writeln!(out, "Saved {}", files.docx.display())?;
            }
            Err(e) => {
                tracing::error!(session = %self.id, error = %e, "print failed");
                writeln!(out, "Printing failed: {e}")?;
            }
        }
        Ok(())
    }
}
