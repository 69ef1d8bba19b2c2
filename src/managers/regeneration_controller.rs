//! Regeneration Controller for pwforge.
//!
//! Collapses bursts of configuration changes into one generation with a
//! trailing-edge debounce, and runs the generation pipeline:
//! alphabet → password → score → history.
//!
//! The controller never blocks or spawns. The host event loop calls
//! [`RegenerationController::poll`] (or [`RegenerationController::fire_pending`]
//! from its own timer), and [`RegenerationController::time_until_fire`] says
//! how long it may sleep.

use std::sync::Arc;

use crate::managers::history_manager::{HistoryStore, HistoryStoreTrait};
use crate::services::charset_builder::{CharacterSetBuilder, CharacterSetBuilderTrait};
use crate::services::clock::Clock;
use crate::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use crate::services::strength_scorer;
use crate::types::errors::GeneratorError;
use crate::types::generation::{GeneratedPassword, GenerationConfig};
use crate::types::history::HistoryEntry;

/// Cancellable one-shot deadline measured against the injected clock.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DebounceTimer {
    deadline: Option<i64>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer `delay_ms` after `now`, replacing any earlier deadline.
    ///
    /// Delays too large for the clock saturate to the far future.
    pub fn schedule(&mut self, now: i64, delay_ms: u64) {
        let delay = i64::try_from(delay_ms).unwrap_or(i64::MAX);
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Cancels the timer. Returns whether it was scheduled.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<i64> {
        self.deadline
    }

    /// True once `now` has reached the deadline.
    pub fn is_due(&self, now: i64) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }
}

/// Debounce state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
    /// No regeneration is waiting.
    Idle,
    /// A regeneration with `config` will run when the debounce timer fires.
    Pending { config: GenerationConfig },
}

pub struct RegenerationController {
    charset: CharacterSetBuilder,
    generator: PasswordGenerator,
    history: HistoryStore,
    clock: Arc<dyn Clock>,
    debounce_ms: u64,
    config: GenerationConfig,
    state: ControllerState,
    timer: DebounceTimer,
    current: Option<GeneratedPassword>,
    generation_count: u64,
}

impl RegenerationController {
    pub fn new(
        generator: PasswordGenerator,
        history: HistoryStore,
        clock: Arc<dyn Clock>,
        debounce_ms: u64,
        config: GenerationConfig,
    ) -> Self {
        Self {
            charset: CharacterSetBuilder,
            generator,
            history,
            clock,
            debounce_ms,
            config,
            state: ControllerState::Idle,
            timer: DebounceTimer::new(),
            current: None,
            generation_count: 0,
        }
    }

    /// Loads and prunes the history, then generates once without debouncing.
    pub fn start_session(&mut self) -> Result<GeneratedPassword, GeneratorError> {
        let retained = self.history.load_and_prune().len();
        log::info!("Session started with {} retained history entries", retained);
        let config = self.config.clone();
        self.run_pipeline(&config)
    }

    /// Records a configuration change and (re)starts the debounce timer.
    pub fn on_config_change(&mut self, config: GenerationConfig) {
        let now = self.clock.now_ms();
        if self.timer.cancel() {
            log::debug!("Configuration changed while pending, restarting debounce");
        }
        self.timer.schedule(now, self.debounce_ms);
        self.config = config.clone();
        self.state = ControllerState::Pending { config };
    }

    /// Host-loop tick: fires the pending regeneration if its timer is due.
    pub fn poll(&mut self) -> Option<Result<GeneratedPassword, GeneratorError>> {
        if self.timer.is_due(self.clock.now_ms()) {
            self.fire_pending()
        } else {
            None
        }
    }

    /// Timer-expiry callback: runs the pending regeneration and returns to idle.
    ///
    /// Returns `None` when nothing is pending.
    pub fn fire_pending(&mut self) -> Option<Result<GeneratedPassword, GeneratorError>> {
        match std::mem::replace(&mut self.state, ControllerState::Idle) {
            ControllerState::Idle => None,
            ControllerState::Pending { config } => {
                self.timer.cancel();
                Some(self.run_pipeline(&config))
            }
        }
    }

    /// Manual trigger: generates immediately with the latest configuration.
    ///
    /// A pending debounced regeneration is left untouched and still fires later.
    pub fn generate_now(&mut self) -> Result<GeneratedPassword, GeneratorError> {
        let config = self.config.clone();
        self.run_pipeline(&config)
    }

    /// Milliseconds until the pending timer fires, or `None` when idle.
    pub fn time_until_fire(&self) -> Option<u64> {
        self.timer
            .deadline()
            .map(|deadline| {
                let remaining = deadline.saturating_sub(self.clock.now_ms());
                u64::try_from(remaining).unwrap_or(0)
            })
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn timer(&self) -> &DebounceTimer {
        &self.timer
    }

    /// Latest configuration observed.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The password currently shown to the user, for the clipboard collaborator.
    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    /// Number of completed pipeline runs.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    fn run_pipeline(
        &mut self,
        config: &GenerationConfig,
    ) -> Result<GeneratedPassword, GeneratorError> {
        let alphabet = self.charset.build(config);
        let password = self.generator.generate(&alphabet, config.length)?;
        let (score, label) = strength_scorer::evaluate(&password);
        let created_at = self.clock.now_ms();

        self.history.append(&password, created_at);
        self.generation_count += 1;
        log::debug!(
            "Generated password #{} (length {}, alphabet {}, {} / {})",
            self.generation_count,
            config.length,
            alphabet.chars().count(),
            score,
            label
        );

        let generated = GeneratedPassword {
            password,
            score,
            label,
            created_at,
        };
        self.current = Some(generated.clone());
        Ok(generated)
    }
}
