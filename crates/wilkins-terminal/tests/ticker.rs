use std::time::Duration;

use jiff::civil::date;
use tokio::time::{Instant, timeout};
use wilkins_protocol::wizard::{Action, Screen, WizardState, reduce};
use wilkins_terminal::ticker::{Ticker, next_tick};

#[tokio::test(start_paused = true)]
async fn first_tick_waits_a_full_second() {
    let start = Instant::now();
    let mut ticker = Ticker::start();
    ticker.tick().await;
    assert_eq!(start.elapsed(), Duration::from_secs(1));
    ticker.tick().await;
    assert_eq!(start.elapsed(), Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn absent_ticker_never_fires() {
    let mut ticker = None;
    let waited = timeout(Duration::from_secs(120), next_tick(&mut ticker)).await;
    assert!(waited.is_err());
}

#[tokio::test(start_paused = true)]
async fn countdown_expires_after_sixty_ticks() {
    let mut state = WizardState::new(date(2026, 3, 14));
    for action in [
        Action::Next,
        Action::SetPatientName("Ana Souza".to_string()),
        Action::Next,
        Action::Next,
        Action::Next,
        Action::StartReading,
    ] {
        state = reduce(&state, action);
    }
    assert_eq!(state.screen, Screen::BaselineReading);
    for _ in 0..45 {
        state = reduce(&state, Action::IncrementWords);
    }

    let start = Instant::now();
    let mut ticker = Some(Ticker::start());
    while state.timer.is_running() {
        next_tick(&mut ticker).await;
        state = reduce(&state, Action::Tick);
    }

    assert_eq!(start.elapsed(), Duration::from_secs(60));
    assert_eq!(state.baseline.as_slice(), &[45]);
}
