use alloc::vec::Vec;

use crate::{PrngError, SeedlessPrng};

// BYTE-SWAP PERMUTATION BASELINE
// ================================================================================================

/// Keystream generator driven by a keyed byte-swap permutation (the RC4 schedule).
///
/// Unlike every other strategy in this crate, output requires key material first: `next`
/// before a keying refresh fails with [PrngError::Unready]. Each refresh rebuilds the
/// 256-entry permutation from scratch using the supplied bytes as the key; a refresh
/// with empty data cannot drive the schedule and leaves the generator unready.
pub struct ByteSwap {
    table: [u8; 256],
    i: u8,
    j: u8,
    keyed: bool,
}

impl ByteSwap {
    /// Returns an unkeyed generator; a refresh is required before output.
    pub fn new() -> Self {
        ByteSwap {
            table: identity_table(),
            i: 0,
            j: 0,
            keyed: false,
        }
    }

    /// Whether a keying refresh has been applied.
    pub fn is_keyed(&self) -> bool {
        self.keyed
    }
}

impl Default for ByteSwap {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedlessPrng for ByteSwap {
    fn refresh(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let mut table = identity_table();
        let mut j = 0u8;
        for idx in 0..256usize {
            j = j.wrapping_add(table[idx]).wrapping_add(data[idx % data.len()]);
            table.swap(idx, j as usize);
        }

        self.table = table;
        self.i = 0;
        self.j = 0;
        self.keyed = true;
    }

    fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError> {
        if !self.keyed {
            return Err(PrngError::Unready);
        }

        let mut output = Vec::with_capacity(n);
        for _ in 0..n {
            self.i = self.i.wrapping_add(1);
            self.j = self.j.wrapping_add(self.table[self.i as usize]);
            self.table.swap(self.i as usize, self.j as usize);
            let t = self.table[self.i as usize].wrapping_add(self.table[self.j as usize]);
            output.push(self.table[t as usize]);
        }
        Ok(output)
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn identity_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (idx, entry) in table.iter_mut().enumerate() {
        *entry = idx as u8;
    }
    table
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unkeyed_generator_refuses_output() {
        let mut prng = ByteSwap::new();
        assert!(!prng.is_keyed());
        assert_eq!(prng.next(1), Err(PrngError::Unready));
        assert_eq!(prng.next(0), Err(PrngError::Unready));
    }

    #[test]
    fn empty_refresh_leaves_the_generator_unready() {
        let mut prng = ByteSwap::new();
        prng.refresh(&[]);
        assert!(!prng.is_keyed());
        assert_eq!(prng.next(8), Err(PrngError::Unready));
    }

    #[test]
    fn keystream_matches_the_classic_vector() {
        // RC4 keystream for the key "Key"
        let expected = hex::decode("eb9f7781b734ca72a719").unwrap();

        let mut prng = ByteSwap::new();
        prng.refresh(b"Key");
        assert!(prng.is_keyed());
        assert_eq!(prng.next(10).unwrap(), expected);
    }

    #[test]
    fn refresh_rekeys_from_scratch() {
        let mut once = ByteSwap::new();
        once.refresh(b"Key");
        once.next(100).unwrap();
        once.refresh(b"Key");

        let mut fresh = ByteSwap::new();
        fresh.refresh(b"Key");

        assert_eq!(once.next(16).unwrap(), fresh.next(16).unwrap());
    }

    #[test]
    fn output_length_is_exact() {
        let mut prng = ByteSwap::new();
        prng.refresh(b"some key");
        for n in [0usize, 1, 16, 32, 64, 128] {
            assert_eq!(prng.next(n).unwrap().len(), n);
        }
    }
}
