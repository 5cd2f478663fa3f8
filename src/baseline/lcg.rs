use alloc::vec::Vec;

use super::fold_be;
use crate::{PrngError, SeedlessPrng};

// CONSTANTS
// ================================================================================================

const MULTIPLIER: u32 = 1664525;
const INCREMENT: u32 = 1013904223;

// LINEAR CONGRUENTIAL BASELINE
// ================================================================================================

/// Seedless linear congruential generator over a 32-bit modulus.
///
/// Uses the Numerical Recipes constants (a = 1664525, c = 1013904223, m = 2^32). The
/// recurrence starts from zero and is fully predictable until a refresh folds entropy
/// into the state additively. One output byte is taken from bits 16..24 of each step,
/// skipping the weak low bits of the recurrence.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Returns a generator with a zero state.
    pub const fn new() -> Self {
        Lcg { state: 0 }
    }

    /// Current state word.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedlessPrng for Lcg {
    fn refresh(&mut self, data: &[u8]) {
        self.state = self.state.wrapping_add(fold_be(data));
    }

    fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError> {
        let mut output = Vec::with_capacity(n);
        for _ in 0..n {
            self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
            output.push((self.state >> 16) as u8);
        }
        Ok(output)
    }
}

// TESTS
// ================================================================================================
