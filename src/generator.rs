use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::extractor::Extractor;
use crate::{PrngError, BLOCK_SIZE, STATE_SIZE};

// SEEDLESS PRNG
// ================================================================================================

/// Common contract of every generator in this crate.
///
/// Extractor-backed generators and the non-cryptographic baselines expose the same two
/// operations, so callers can swap strategies without depending on the internal primitive
/// choice.
pub trait SeedlessPrng {
    /// Irreversibly folds entropy of arbitrary length into the generator.
    fn refresh(&mut self, data: &[u8]);

    /// Returns exactly `n` pseudo-random bytes.
    fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError>;
}

// GENERATOR
// ================================================================================================

/// Seedless pseudo-random generator parameterized by an extractor strategy.
///
/// A generator owns exactly two pieces of persistent state: a 32-byte secret `state` and
/// a block `counter`. It starts from a fixed, public, all-zero state, so output drawn
/// before the first [`refresh`](Self::refresh) with real entropy is a deterministic,
/// publicly predictable function of the zero state and must never be treated as secret.
/// This is documented behavior, not a defect: the construction targets cold-start
/// entropy accumulation, where output may be requested before the entropy pool fills.
///
/// `refresh` mutates only the state; [`next`](Self::next) never touches the state. An
/// unaligned draw leaves the unconsumed tail of its last derived block buffered, and the
/// following draw serves that tail before deriving new blocks, so the counter always
/// equals `ceil(total bytes drawn / BLOCK_SIZE)`. A generator is single-owner mutable
/// state: sharing one across threads requires an external lock held for the duration of
/// each call.
pub struct Generator<E: Extractor> {
    state: [u8; STATE_SIZE],
    counter: u128,
    // last derived block; bytes at `pos..` are keystream not yet handed out
    block: [u8; BLOCK_SIZE],
    pos: usize,
    _strategy: PhantomData<E>,
}

impl<E: Extractor> Generator<E> {
    /// Returns a generator with an all-zero state and a zero counter.
    pub const fn new() -> Self {
        Generator {
            state: [0; STATE_SIZE],
            counter: 0,
            block: [0; BLOCK_SIZE],
            pos: BLOCK_SIZE,
            _strategy: PhantomData,
        }
    }

    /// Folds `data` into the internal state using the extractor's state-update rule.
    ///
    /// Always succeeds, including for empty `data`, which still moves the state to a new
    /// deterministic value. The counter is unaffected; any buffered keystream tail is
    /// discarded, since a state change starts a new keystream.
    pub fn refresh(&mut self, data: &[u8]) {
        self.state = E::update(&self.state, data);
        self.pos = BLOCK_SIZE;
    }

    /// Returns exactly `n` pseudo-random bytes.
    ///
    /// The output is a prefix of a logically infinite keystream for the current state:
    /// `next(a)` followed by `next(b)` yields the same bytes as a single `next(a + b)`
    /// from an equal starting point, split at offset `a`. Buffered bytes from the
    /// previous draw are served first; the counter advances once per freshly derived
    /// block, so after any sequence of draws it equals `ceil(total bytes / BLOCK_SIZE)`.
    /// The state is never modified by this call.
    ///
    /// # Errors
    /// Returns [PrngError::CounterOverflow] if any freshly derived block would need a
    /// counter value outside the 64-bit encodable range. The failing call mutates
    /// nothing.
    pub fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError> {
        let buffered = BLOCK_SIZE - self.pos;
        let blocks = n.saturating_sub(buffered).div_ceil(BLOCK_SIZE);
        if self.counter + blocks as u128 > u64::MAX as u128 + 1 {
            return Err(PrngError::CounterOverflow);
        }

        let mut output = Vec::with_capacity(n);
        let take = buffered.min(n);
        output.extend_from_slice(&self.block[self.pos..self.pos + take]);
        self.pos += take;

        while output.len() < n {
            self.block = E::derive_block(&self.state, self.counter as u64);
            self.counter += 1;
            let take = (n - output.len()).min(BLOCK_SIZE);
            output.extend_from_slice(&self.block[..take]);
            self.pos = take;
        }
        Ok(output)
    }

    /// Read-only view of the internal state.
    pub fn state(&self) -> &[u8; STATE_SIZE] {
        &self.state
    }

    /// Number of output blocks produced so far.
    pub fn counter(&self) -> u128 {
        self.counter
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&mut self, counter: u128) {
        self.counter = counter;
    }
}

impl<E: Extractor> Default for Generator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Extractor> SeedlessPrng for Generator<E> {
    fn refresh(&mut self, data: &[u8]) {
        Generator::refresh(self, data)
    }

    fn next(&mut self, n: usize) -> Result<Vec<u8>, PrngError> {
        Generator::next(self, n)
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    use super::SeedlessPrng;
    use crate::{HkdfPrng, MonolithicPrng, OnlinePrng};

    #[test]
    fn zero_length_draw_is_free() {
        let mut prng = MonolithicPrng::new();
        assert_eq!(prng.next(0).unwrap(), Vec::<u8>::new());
        assert_eq!(prng.counter(), 0);
    }

    #[test]
    fn default_equals_new() {
        let mut a = HkdfPrng::default();
        let mut b = HkdfPrng::new();
        assert_eq!(a.state(), b.state());
        assert_eq!(a.next(32).unwrap(), b.next(32).unwrap());
    }

    #[test]
    fn generators_are_object_safe() {
        let mut prngs: Vec<Box<dyn SeedlessPrng>> = alloc::vec![
            Box::new(MonolithicPrng::new()),
            Box::new(OnlinePrng::new()),
            Box::new(HkdfPrng::new()),
        ];
        for prng in prngs.iter_mut() {
            prng.refresh(b"entropy");
            assert_eq!(prng.next(48).unwrap().len(), 48);
        }
    }
}
