//! Unit tests for the Password Generator.

use pwforge::services::charset_builder::build_alphabet;
use pwforge::services::password_generator::{PasswordGenerator, PasswordGeneratorTrait};
use pwforge::services::random_source::SequenceRandomSource;
use pwforge::services::strength_scorer;
use pwforge::types::errors::GeneratorError;
use pwforge::types::generation::{GenerationConfig, StrengthLabel};

const ALNUM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn fixed(values: Vec<usize>) -> PasswordGenerator {
    PasswordGenerator::new(Box::new(SequenceRandomSource::new(values)))
}

#[test]
fn test_index_zero_source_repeats_first_character() {
    let config = GenerationConfig {
        length: 10,
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
        include_symbols: false,
    };
    let alphabet = build_alphabet(&config);
    assert_eq!(alphabet, ALNUM);

    let mut generator = fixed(vec![0]);
    let password = generator.generate(&alphabet, config.length).unwrap();
    assert_eq!(password, "AAAAAAAAAA");

    let (score, label) = strength_scorer::evaluate(&password);
    assert_eq!(score, 2);
    assert_eq!(label, StrengthLabel::Weak);
}

#[test]
fn test_indices_map_to_alphabet_positions() {
    let mut generator = fixed(vec![0, 26, 52, 61]);
    let password = generator.generate(ALNUM, 8).unwrap();
    assert_eq!(password, "Aa09Aa09");
}

#[test]
fn test_characters_may_repeat() {
    let mut generator = fixed(vec![3]);
    assert_eq!(generator.generate("xyzw", 6).unwrap(), "wwwwww");
}

#[test]
fn test_zero_length_is_invalid_argument() {
    let mut generator = fixed(vec![0]);
    let result = generator.generate(ALNUM, 0);
    assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
}

#[test]
fn test_empty_alphabet_is_invalid_argument() {
    let mut generator = fixed(vec![0]);
    let result = generator.generate("", 8);
    assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
}

#[test]
fn test_length_is_not_clamped() {
    let mut generator = PasswordGenerator::with_system_random();
    assert_eq!(generator.generate(ALNUM, 3).unwrap().len(), 3);
    assert_eq!(generator.generate(ALNUM, 120).unwrap().len(), 120);
}

#[test]
fn test_system_random_output_stays_in_alphabet() {
    let mut generator = PasswordGenerator::default();
    let alphabet = "!@#";
    let password = generator.generate(alphabet, 50).unwrap();
    assert_eq!(password.chars().count(), 50);
    assert!(password.chars().all(|c| alphabet.contains(c)));
}

#[test]
fn test_no_category_presence_guarantee() {
    // Digits are enabled but the source never lands on them.
    let config = GenerationConfig {
        length: 12,
        include_uppercase: true,
        include_lowercase: true,
        include_digits: true,
        include_symbols: false,
    };
    let mut generator = fixed(vec![1, 30]);
    let password = generator.generate(&build_alphabet(&config), 12).unwrap();
    assert!(!password.chars().any(|c| c.is_ascii_digit()));
}
