//! pwforge — console demo.
//!
//! Walks through every component with deterministic collaborators where it
//! helps, then runs a short session against a throwaway on-disk database.
//! Set `RUST_LOG=debug` to see the pipeline log lines.

use std::sync::Arc;

use pwforge::app::App;
use pwforge::database::Database;
use pwforge::managers::history_manager::{HistoryStore, HistoryStoreTrait};
use pwforge::managers::regeneration_controller::RegenerationController;
use pwforge::services::charset_builder::build_alphabet;
use pwforge::services::clock::{Clock, ManualClock, SystemClock};
use pwforge::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use pwforge::services::random_source::{SequenceRandomSource, SystemRandomSource};
use pwforge::services::settings_engine::SettingsEngine;
use pwforge::services::storage::MemoryKeyValueStore;
use pwforge::services::strength_scorer;
use pwforge::types::generation::GenerationConfig;
use pwforge::types::history::{HistoryPolicy, HISTORY_TTL_MS};

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 pwforge v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_charset();
    demo_generator();
    demo_scorer();
    demo_history();
    demo_debounce();
    if let Err(e) = demo_app() {
        eprintln!("  ✗ App demo failed: {}", e);
        std::process::exit(1);
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_charset() {
    section("Character Set Builder");

    let config = GenerationConfig {
        length: 10,
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
        include_symbols: false,
    };
    println!("  upper+lower+digits: {}", build_alphabet(&config));

    let none = GenerationConfig {
        include_uppercase: false,
        include_lowercase: false,
        ..config
    };
    println!("  nothing enabled falls back to: {}", build_alphabet(&none));
    println!();
}

fn demo_generator() {
    section("Password Generator");

    let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut fixed = PasswordGenerator::new(Box::new(SequenceRandomSource::zeros()));
    match fixed.generate(alphabet, 10) {
        Ok(p) => println!("  index-0 source, length 10: {}", p),
        Err(e) => println!("  ✗ {}", e),
    }

    let mut secure = PasswordGenerator::new(Box::new(SystemRandomSource::new()));
    match secure.generate(alphabet, 16) {
        Ok(p) => println!("  system source, length 16: {}", p),
        Err(e) => println!("  ✗ {}", e),
    }

    match secure.generate(alphabet, 0) {
        Ok(_) => println!("  ✗ zero length unexpectedly accepted"),
        Err(e) => println!("  zero length rejected: {}", e),
    }
    println!();
}

fn demo_scorer() {
    section("Strength Scorer");

    for sample in ["abcdefgh", "Abcdefgh1", "Abcdefgh1!", "AAAAAAAAAA", "Tr0ub4dor&3xyz"] {
        let (score, label) = strength_scorer::evaluate(sample);
        println!("  {:<16} {} / 6  {}", sample, score, label);
    }
    println!();
}

fn demo_history() {
    section("History Store");

    let clock = ManualClock::new(SystemClock.now_ms());
    let storage = MemoryKeyValueStore::new();
    let policy = HistoryPolicy::default();

    let mut store = HistoryStore::new(
        Box::new(storage.clone()),
        Arc::new(clock.clone()),
        policy.clone(),
    );
    store.load_and_prune();
    store.append("expires-soon", clock.now_ms() - HISTORY_TTL_MS + 1_000);
    for i in 0..55 {
        store.append(&format!("password-{}", i), clock.now_ms());
    }
    println!("  Appended 56 entries, kept {} (newest: {:?})", store.len(),
        store.latest().map(|e| e.password.as_str()));

    clock.advance(2_000);
    let mut reloaded = HistoryStore::new(Box::new(storage.clone()), Arc::new(clock.clone()), policy);
    let count = reloaded.load_and_prune().len();
    println!("  Reloaded {} entries after 2s", count);

    storage.set_fail_writes(true);
    reloaded.append("not-persisted", clock.now_ms());
    println!(
        "  Write failure kept in memory: {} entries, error: {}",
        reloaded.len(),
        reloaded
            .last_persist_error()
            .map(|e| e.to_string())
            .unwrap_or_default()
    );
    println!();
}

fn demo_debounce() {
    section("Regeneration Controller");

    let clock = ManualClock::new(0);
    let history = HistoryStore::new(
        Box::new(MemoryKeyValueStore::new()),
        Arc::new(clock.clone()),
        HistoryPolicy::default(),
    );
    let mut controller = RegenerationController::new(
        PasswordGenerator::with_system_random(),
        history,
        Arc::new(clock.clone()),
        150,
        GenerationConfig::default(),
    );

    if let Ok(first) = controller.start_session() {
        println!("  Session start: {} ({})", first.password, first.label);
    }

    for length in [9, 10, 11, 12] {
        controller.on_config_change(GenerationConfig {
            length,
            include_digits: true,
            ..GenerationConfig::default()
        });
        clock.advance(40);
        let _ = controller.poll();
    }
    println!("  4 changes within 150 ms, generations so far: {}", controller.generation_count());

    clock.advance(150);
    if let Some(Ok(p)) = controller.poll() {
        println!("  Debounce fired: {} (length {})", p.password, p.password.len());
    }
    println!("  Generations: {}, history: {}", controller.generation_count(), controller.history().len());
    println!();
}

fn demo_app() -> Result<(), Box<dyn std::error::Error>> {
    section("App Core");

    let dir = std::env::temp_dir().join(format!("pwforge-demo-{}", std::process::id()));
    let db = Database::open(dir.join("pwforge.db"))?;
    let settings = SettingsEngine::new(Some(dir.join("settings.json").to_string_lossy().to_string()));
    let mut app = App::new(
        Arc::new(db),
        settings,
        Box::new(SystemRandomSource::new()),
        Arc::new(SystemClock),
    )?;

    let first = app.startup()?;
    println!("  Startup password: {} ({} / 6, {})", first.password, first.score, first.label);

    app.update_config(GenerationConfig {
        length: 99,
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
        include_symbols: true,
    });
    while let Some(wait) = app.controller.time_until_fire() {
        std::thread::sleep(std::time::Duration::from_millis(wait.max(1)));
        if let Some(result) = app.tick() {
            let p = result?;
            println!("  After config change (length clamped): {} chars, {}", p.password.chars().count(), p.label);
        }
    }

    let manual = app.generate_now()?;
    println!("  Manual generate: {}", manual.password);
    println!("  Clipboard would receive: {}", app.clipboard_text().unwrap_or_default());
    println!("  History entries: {}", app.controller.history().len());

    drop(app);
    let _ = std::fs::remove_dir_all(&dir);
    println!("  ✓ App OK");
    Ok(())
}
