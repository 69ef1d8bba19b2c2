//! Heuristic password strength scoring.
//!
//! Six independent criteria each add one point: length >= 8, length >= 12,
//! a lowercase letter, an uppercase letter, a digit, and any character
//! outside `[A-Za-z0-9]`. This is a checklist, not an entropy estimate.

use crate::types::generation::StrengthLabel;

/// Highest possible score.
pub const MAX_SCORE: u8 = 6;

/// Computes the 0-6 strength score of `password`.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let criteria = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.iter().filter(|met| **met).count() as u8
}

/// Maps a score to its label: 0-2 Weak, 3-4 Medium, 5-6 Strong.
pub fn label_for(score: u8) -> StrengthLabel {
    match score {
        0..=2 => StrengthLabel::Weak,
        3..=4 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    }
}

/// Scores `password` and returns the score with its label.
pub fn evaluate(password: &str) -> (u8, StrengthLabel) {
    let s = score(password);
    (s, label_for(s))
}
