// pwforge shared type definitions

pub mod errors;
pub mod generation;
pub mod history;
pub mod settings;
