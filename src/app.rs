//! App Core for pwforge.
//!
//! Wires the database, settings, history store and regeneration controller
//! together and drives the session lifecycle.

use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::history_manager::HistoryStore;
use crate::managers::regeneration_controller::RegenerationController;
use crate::platform;
use crate::services::clock::{Clock, SystemClock};
use crate::services::password_generator::PasswordGenerator;
use crate::services::random_source::{RandomSource, SystemRandomSource};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::storage::SqliteKeyValueStore;
use crate::types::errors::AppError;
use crate::types::generation::{GeneratedPassword, GenerationConfig};

/// Central application struct holding the persistence layer and the controller.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub controller: RegenerationController,
}

impl App {
    /// Opens the database and settings at their platform default locations.
    pub fn open_default() -> Result<Self, AppError> {
        let db_path = platform::default_database_path();
        let db = Database::open(&db_path)?;
        Self::new(
            Arc::new(db),
            SettingsEngine::new(None),
            Box::new(SystemRandomSource::new()),
            Arc::new(SystemClock),
        )
    }

    /// Builds the app from explicit collaborators.
    ///
    /// Settings are loaded here; a malformed settings file is an error.
    pub fn new(
        db: Arc<Database>,
        mut settings_engine: SettingsEngine,
        random: Box<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        let settings = settings_engine.load()?;

        let history = HistoryStore::new(
            Box::new(SqliteKeyValueStore::new(db.clone())),
            clock.clone(),
            settings.history.policy(),
        );
        let controller = RegenerationController::new(
            PasswordGenerator::new(random),
            history,
            clock,
            settings.debounce_ms,
            settings.generator.clamped(),
        );

        Ok(Self {
            db,
            settings_engine,
            controller,
        })
    }

    /// Session start: prune history and generate the first password.
    pub fn startup(&mut self) -> Result<GeneratedPassword, AppError> {
        Ok(self.controller.start_session()?)
    }

    /// Applies a user configuration change.
    ///
    /// The length is clamped to the slider range before it reaches the core.
    /// Failing to remember the choice in settings is logged and ignored.
    pub fn update_config(&mut self, config: GenerationConfig) {
        let config = config.clamped();
        if let Err(e) = self.settings_engine.set_generation_config(&config) {
            log::warn!("Could not save generator settings: {}", e);
        }
        self.controller.on_config_change(config);
    }

    /// Host-loop tick forwarded to the controller.
    pub fn tick(&mut self) -> Option<Result<GeneratedPassword, AppError>> {
        self.controller
            .poll()
            .map(|result| result.map_err(AppError::from))
    }

    /// Manual "generate now".
    pub fn generate_now(&mut self) -> Result<GeneratedPassword, AppError> {
        Ok(self.controller.generate_now()?)
    }

    /// Text handed to the clipboard collaborator, if a password exists.
    pub fn clipboard_text(&self) -> Option<&str> {
        self.controller.current().map(|p| p.password.as_str())
    }
}
