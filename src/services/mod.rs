// pwforge services
// Stateless pipeline steps plus the injected ports (clock, randomness, storage) and settings.

pub mod charset_builder;
pub mod clock;
pub mod password_generator;
pub mod random_source;
pub mod settings_engine;
pub mod storage;
pub mod strength_scorer;
