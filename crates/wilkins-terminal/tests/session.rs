use std::time::Duration;

use jiff::civil::date;
use tokio::io::{AsyncWriteExt, BufReader};
use wilkins_protocol::wizard::{Screen, WizardState};
use wilkins_terminal::config::TerminalConfig;
use wilkins_terminal::session::Session;

const FULL_SESSION: &str = "\
n
name Ana Souza
age 9
n
1 3
n
mid
2
n
s
+30
f
s
+31
f
2
n
n
s
+40
f
s
+40
f
p
q
";

fn session_in(dir: &std::path::Path) -> Session {
    let config = TerminalConfig {
        output_dir: dir.to_path_buf(),
        ..TerminalConfig::default()
    };
    Session::new(WizardState::new(date(2026, 3, 14)), config)
}

#[tokio::test(start_paused = true)]
async fn scripted_session_prints_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let mut out = Vec::new();

    let input = FULL_SESSION.as_bytes();
    session.run(input, &mut out).await.unwrap();

    assert_eq!(session.state.screen, Screen::Result);
    assert_eq!(session.state.baseline.as_slice(), &[1800, 1860]);
    assert_eq!(session.state.tinted.as_slice(), &[2400, 2400]);

    let text_path = dir.path().join("2026-03-14-ana-souza-prescription.txt");
    let docx_path = dir.path().join("2026-03-14-ana-souza-prescription.docx");
    let text = std::fs::read_to_string(&text_path).unwrap();
    assert!(text.contains("- **Patient:** Ana Souza"));
    assert!(text.contains("- **Age:** 9 years"));
    assert!(std::fs::read(&docx_path).unwrap().starts_with(b"PK"));

    let screen = String::from_utf8(out).unwrap();
    assert!(screen.contains(&format!("Saved {}", text_path.display())));
}

#[tokio::test(start_paused = true)]
async fn printing_early_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let mut out = Vec::new();

    session.run("p\n".as_bytes(), &mut out).await.unwrap();

    let screen = String::from_utf8(out).unwrap();
    assert!(screen.contains("Complete the protocol before printing."));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn blocked_navigation_stays_put() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let mut out = Vec::new();

    let input = "n\nn\ngo 8\n".as_bytes();
    session.run(input, &mut out).await.unwrap();
    assert_eq!(session.state.screen, Screen::Patient);
}

#[tokio::test(start_paused = true)]
async fn countdown_expiry_records_the_reading() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = session_in(dir.path());
    let mut out = Vec::new();
    let (mut keyboard, input) = tokio::io::duplex(1024);

    let typing = async move {
        keyboard
            .write_all(b"n\nname Ana\nn\nn\nn\ns\n+12\n")
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(61)).await;
        drop(keyboard);
    };
    let (result, ()) = tokio::join!(session.run(BufReader::new(input), &mut out), typing);
    result.unwrap();

    assert_eq!(session.state.baseline.as_slice(), &[12]);
    assert!(!session.state.timer.is_running());
    let screen = String::from_utf8(out).unwrap();
    assert!(screen.contains("Time is up."));
    assert!(screen.contains("  30s left, 12 words"));
}
