//! Alphabet assembly from the enabled character categories.

use crate::types::generation::GenerationConfig;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Alphabet used when every category is disabled: upper and lower letters.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Trait defining alphabet assembly.
pub trait CharacterSetBuilderTrait {
    fn build(&self, config: &GenerationConfig) -> String;
}

/// Stateless builder over the fixed category sets.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterSetBuilder;

impl CharacterSetBuilderTrait for CharacterSetBuilder {
    fn build(&self, config: &GenerationConfig) -> String {
        build_alphabet(config)
    }
}

/// Concatenates the enabled categories in the order upper, lower, digits, symbols.
///
/// Never returns an empty string: with no category enabled the result is
/// [`DEFAULT_ALPHABET`].
pub fn build_alphabet(config: &GenerationConfig) -> String {
    let categories = [
        (config.include_uppercase, UPPERCASE),
        (config.include_lowercase, LOWERCASE),
        (config.include_digits, DIGITS),
        (config.include_symbols, SYMBOLS),
    ];

    let alphabet: String = categories
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, chars)| *chars)
        .collect();

    if alphabet.is_empty() {
        DEFAULT_ALPHABET.to_string()
    } else {
        alphabet
    }
}
