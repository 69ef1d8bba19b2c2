//! Password Generator for pwforge.
//!
//! Draws every character independently and uniformly, with replacement, from
//! the given alphabet. No category is guaranteed to appear in the output.

use crate::services::random_source::{RandomSource, SystemRandomSource};
use crate::types::errors::GeneratorError;

/// Trait defining password generation.
pub trait PasswordGeneratorTrait {
    fn generate(&mut self, alphabet: &str, length: usize) -> Result<String, GeneratorError>;
}

/// Generator that samples indices from an injected [`RandomSource`].
pub struct PasswordGenerator {
    random: Box<dyn RandomSource>,
}

impl PasswordGenerator {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Creates a generator backed by the system CSPRNG.
    pub fn with_system_random() -> Self {
        Self::new(Box::new(SystemRandomSource::new()))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::with_system_random()
    }
}

impl PasswordGeneratorTrait for PasswordGenerator {
    /// Returns a string of exactly `length` characters drawn from `alphabet`.
    ///
    /// # Errors
    /// `InvalidArgument` if `length` is zero or `alphabet` is empty. The
    /// length is never clamped.
    fn generate(&mut self, alphabet: &str, length: usize) -> Result<String, GeneratorError> {
        if length == 0 {
            return Err(GeneratorError::InvalidArgument(
                "Password length must be positive".to_string(),
            ));
        }

        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "Alphabet must not be empty".to_string(),
            ));
        }

        let mut password = String::with_capacity(length);
        for _ in 0..length {
            let idx = self.random.next_index(chars.len())?;
            password.push(chars[idx]);
        }
        Ok(password)
    }
}
