//! Randomness port used by the password generator.
//!
//! [`SystemRandomSource`] draws from the operating system CSPRNG through
//! `ring`. [`SequenceRandomSource`] replays fixed indices so tests and demos
//! can assert exact outputs.

use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroize;

use crate::types::errors::GeneratorError;

/// Source of uniform random indices.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[0, upper)`.
    ///
    /// # Errors
    /// `InvalidArgument` if `upper` is zero, `RandomGeneration` if the
    /// underlying source fails.
    fn next_index(&mut self, upper: usize) -> Result<usize, GeneratorError>;
}

/// Cryptographically secure random source backed by `ring::rand::SystemRandom`.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn next_index(&mut self, upper: usize) -> Result<usize, GeneratorError> {
        if upper == 0 {
            return Err(GeneratorError::InvalidArgument(
                "Random range upper bound must be positive".to_string(),
            ));
        }

        let bound = upper as u64;
        // Largest accepted draw; values above it would bias the modulo.
        let zone = u64::MAX - (u64::MAX - bound + 1) % bound;

        let mut buf = [0u8; 8];
        loop {
            self.rng.fill(&mut buf).map_err(|_| {
                GeneratorError::RandomGeneration("Failed to read system randomness".to_string())
            })?;
            let value = u64::from_le_bytes(buf);
            buf.zeroize();
            if value <= zone {
                return Ok((value % bound) as usize);
            }
        }
    }
}

/// Deterministic source that cycles through a fixed list of values.
///
/// Each value is reduced modulo the requested bound. An empty list always yields 0.
#[derive(Debug, Clone)]
pub struct SequenceRandomSource {
    values: Vec<usize>,
    position: usize,
}

impl SequenceRandomSource {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// A source that always selects index 0.
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_index(&mut self, upper: usize) -> Result<usize, GeneratorError> {
        if upper == 0 {
            return Err(GeneratorError::InvalidArgument(
                "Random range upper bound must be positive".to_string(),
            ));
        }
        if self.values.is_empty() {
            return Ok(0);
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        Ok(value % upper)
    }
}
