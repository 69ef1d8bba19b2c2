//! Unit tests for App wiring: settings, SQLite-backed history and the controller.

use std::sync::Arc;

use pwforge::app::App;
use pwforge::database::Database;
use pwforge::services::clock::ManualClock;
use pwforge::services::random_source::SequenceRandomSource;
use pwforge::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use pwforge::types::errors::AppError;
use pwforge::types::generation::GenerationConfig;
use tempfile::TempDir;

const START: i64 = 1_700_000_000_000;

fn settings_in(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(
        dir.path().join("settings.json").to_string_lossy().to_string(),
    ))
}

fn app_in(dir: &TempDir, db: Arc<Database>, clock: &ManualClock) -> App {
    App::new(
        db,
        settings_in(dir),
        Box::new(SequenceRandomSource::new(vec![0, 1, 2, 3])),
        Arc::new(clock.clone()),
    )
    .expect("app should build")
}

#[test]
fn test_startup_generates_with_default_config() {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(Database::open_in_memory().unwrap());
    let clock = ManualClock::new(START);
    let mut app = app_in(&dir, db, &clock);

    let first = app.startup().unwrap();
    assert_eq!(first.password, "ABCDABCD");
    assert_eq!(app.clipboard_text(), Some("ABCDABCD"));
    assert_eq!(app.controller.history().len(), 1);
}

#[test]
fn test_history_survives_app_restart() {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(Database::open(dir.path().join("pwforge.db")).unwrap());
    let clock = ManualClock::new(START);

    {
        let mut app = app_in(&dir, db.clone(), &clock);
        app.startup().unwrap();
        app.generate_now().unwrap();
    }

    clock.advance(1_000);
    let mut app = app_in(&dir, db, &clock);
    app.startup().unwrap();
    assert_eq!(app.controller.history().len(), 3);
}

#[test]
fn test_update_config_clamps_saves_and_debounces() {
    let dir = TempDir::new().unwrap();
    let db = Arc::new(Database::open_in_memory().unwrap());
    let clock = ManualClock::new(START);
    let mut app = app_in(&dir, db, &clock);
    app.startup().unwrap();

    app.update_config(GenerationConfig {
        length: 80,
        include_uppercase: false,
        include_lowercase: false,
        include_digits: true,
        include_symbols: false,
    });
    assert!(app.tick().is_none());

    clock.advance(150);
    let generated = app.tick().unwrap().unwrap();
    assert_eq!(generated.password, "0123".repeat(13)[..50].to_string());

    let mut reread = settings_in(&dir);
    assert_eq!(reread.load().unwrap().generator.length, 50);
}

#[test]
fn test_settings_drive_debounce_delay() {
    let dir = TempDir::new().unwrap();
    {
        let mut engine = settings_in(&dir);
        engine.load().unwrap();
        engine
            .set_value("debounce_ms", serde_json::json!(400))
            .unwrap();
    }

    let db = Arc::new(Database::open_in_memory().unwrap());
    let clock = ManualClock::new(START);
    let mut app = app_in(&dir, db, &clock);
    app.update_config(GenerationConfig::default());
    assert_eq!(app.controller.time_until_fire(), Some(400));
}

#[test]
fn test_malformed_settings_fail_app_construction() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "not json").unwrap();

    let result = App::new(
        Arc::new(Database::open_in_memory().unwrap()),
        settings_in(&dir),
        Box::new(SequenceRandomSource::zeros()),
        Arc::new(ManualClock::new(START)),
    );
    assert!(matches!(result, Err(AppError::Settings(_))));
}
