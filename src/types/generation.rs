use std::fmt;

use serde::{Deserialize, Serialize};

/// Shortest password length the UI allows.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password length the UI allows.
pub const MAX_PASSWORD_LENGTH: usize = 50;

/// User-selected constraints for generating a password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 8,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: false,
            include_symbols: false,
        }
    }
}

impl GenerationConfig {
    /// Returns a copy with `length` clamped to the `[6, 50]` range the slider enforces.
    ///
    /// Meant for the input boundary. The generator itself never clamps.
    pub fn clamped(&self) -> Self {
        Self {
            length: self.length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
            ..self.clone()
        }
    }

    /// Returns true if no character category is enabled.
    pub fn has_no_categories(&self) -> bool {
        !(self.include_uppercase
            || self.include_lowercase
            || self.include_digits
            || self.include_symbols)
    }
}

/// Qualitative strength bucket derived from a 0-6 score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// A password produced by the pipeline, with its score and creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub score: u8,
    pub label: StrengthLabel,
    /// Milliseconds since the UNIX epoch.
    pub created_at: i64,
}
