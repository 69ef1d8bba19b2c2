// pwforge state managers
// Managers own mutable state: the password history and the debounce state machine.

pub mod history_manager;
pub mod regeneration_controller;
