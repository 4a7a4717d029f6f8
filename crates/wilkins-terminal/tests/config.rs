use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wilkins_terminal::config::{
    CURRENT_VERSION, DEFAULT_HEADER, LogFormat, TerminalConfig, load_config_from,
    log_format_hint, migrate, save_config_to,
};
use wilkins_terminal::logging;

/// Collects everything a subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, TerminalConfig::default());
    assert_eq!(config.clinic_header, DEFAULT_HEADER);
}

#[test]
fn save_then_load_keeps_every_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let mut config = TerminalConfig {
        config_version: 0,
        clinic_header: "Clínica Visão".to_string(),
        output_dir: PathBuf::from("/srv/prescriptions"),
        log_format: LogFormat::Json,
        ..TerminalConfig::default()
    };
    config.styles.body_font = "Arial".to_string();

    save_config_to(&path, &config).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.clinic_header, "Clínica Visão");
    assert_eq!(loaded.output_dir, PathBuf::from("/srv/prescriptions"));
    assert_eq!(loaded.log_format, LogFormat::Json);
    assert_eq!(loaded.styles.body_font, "Arial");
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn unversioned_config_gains_an_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "clinic_header": "Old clinic" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.clinic_header, "Old clinic");
    assert!(!config.output_dir.as_os_str().is_empty());
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn migration_keeps_an_existing_output_dir() {
    let json = serde_json::json!({ "output_dir": "/tmp/rx" });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["output_dir"], "/tmp/rx");
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["clinic_header"], DEFAULT_HEADER);
}

#[test]
fn newer_versions_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 9, "clinic_header": "x", "output_dir": "/tmp" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn partial_styles_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 1, "clinic_header": "x", "output_dir": "/tmp",
             "styles": { "body_size": 13 } }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.styles.body_size, 13);
    assert_eq!(config.styles.body_font, "Calibri");
}

#[test]
fn log_format_is_read_before_migration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    assert_eq!(log_format_hint(&path), LogFormat::Pretty);

    std::fs::write(&path, r#"{ "clinic_header": "X", "log_format": "json" }"#).unwrap();
    assert_eq!(log_format_hint(&path), LogFormat::Json);

    std::fs::write(&path, "not json").unwrap();
    assert_eq!(log_format_hint(&path), LogFormat::Pretty);
}

#[test]
fn migration_is_logged_through_the_installed_subscriber() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "clinic_header": "X", "log_format": "json" }"#).unwrap();

    let captured = Captured::default();
    let subscriber = logging::subscriber(
        log_format_hint(&path),
        EnvFilter::new("debug"),
        captured.clone(),
    );
    let loaded = tracing::subscriber::with_default(subscriber, || load_config_from(&path));
    let config = loaded.unwrap();

    assert_eq!(config.config_version, CURRENT_VERSION);
    let logs = captured.text();
    assert!(logs.contains("migrated config v0 → v1"));
    assert!(logs.trim_start().starts_with('{'));
}

#[test]
fn missing_file_is_logged_at_debug() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let captured = Captured::default();
    let subscriber = logging::subscriber(
        LogFormat::Pretty,
        EnvFilter::new("debug"),
        captured.clone(),
    );
    let loaded = tracing::subscriber::with_default(subscriber, || load_config_from(&path));
    assert_eq!(loaded.unwrap(), TerminalConfig::default());

    assert!(captured.text().contains("no config file, using defaults"));
}
