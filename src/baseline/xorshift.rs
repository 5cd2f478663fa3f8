use alloc::vec::Vec;

use super::fold_be;
use crate::{PrngError, SeedlessPrng};

// XORSHIFT BASELINE
// ================================================================================================

/// xorshift32 recurrence (shifts 13, 17, 5) starting from Marsaglia's 2463534242 word.
///
/// A refresh replaces the state with the folded entropy rather than mixing it in; an
/// all-zero fold maps to 1 because the recurrence sticks at zero. The low byte of each
/// step is emitted.
pub struct Xorshift {
    state: u32,
}

impl Xorshift {
    /// Returns a generator with the default state word.
    pub const fn new() -> Self {
        Xorshift { state: 2463534242 }
    }

    /// Current state word.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Xorshift {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedlessPrng for Xorshift {
    fn refresh(&mut self, data: &[u8]) {
        let entropy = fold_be(data);
        self.state = if entropy == 0 { 1 } else { entropy };
    }

    fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError> {
        let mut output = Vec::with_capacity(n);
        for _ in 0..n {
            self.state ^= self.state << 13;
            self.state ^= self.state >> 17;
            self.state ^= self.state << 5;
            output.push(self.state as u8);
        }
        Ok(output)
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_stream_is_predictable() {
        // low bytes of the first steps from the default word
        let expected = hex::decode("637aa07ee1eaf23d").unwrap();

        let mut a = Xorshift::new();
        let mut b = Xorshift::new();
        assert_eq!(a.next(8).unwrap(), expected);
        assert_eq!(b.next(8).unwrap(), expected);
    }

    #[test]
    fn first_step_from_the_default_word() {
        let mut prng = Xorshift::new();
        prng.next(1).unwrap();
        assert_eq!(prng.state(), 723471715);
    }

    #[test]
    fn refresh_replaces_the_state() {
        let mut prng = Xorshift::new();
        prng.refresh(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(prng.state(), 0xdeadbeef);

        // a second refresh overwrites rather than folds
        prng.refresh(&[0, 0, 0, 7]);
        assert_eq!(prng.state(), 7);
    }

    #[test]
    fn zero_entropy_maps_to_one() {
        let mut prng = Xorshift::new();
        prng.refresh(&[0, 0, 0, 0]);
        assert_eq!(prng.state(), 1);

        prng.refresh(&[]);
        assert_eq!(prng.state(), 1);
    }

    #[test]
    fn output_length_is_exact() {
        let mut prng = Xorshift::new();
        for n in [0usize, 1, 16, 32, 64, 128] {
            assert_eq!(prng.next(n).unwrap().len(), n);
        }
    }
}
