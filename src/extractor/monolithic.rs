use super::{Extractor, StateRole};
use crate::primitive::{counter_bytes, sha256_concat};
use crate::{BLOCK_SIZE, STATE_SIZE};

// MONOLITHIC EXTRACTOR
// ================================================================================================

/// Single-shot hash extractor: `state' = SHA-256(state || data)`.
///
/// The simplest strategy: each refresh folds all new entropy in one hash invocation over
/// the concatenation of the old state and the data. Entropy arriving as many small
/// pieces costs a full hash call per piece, and a long attacker-chosen `data` is
/// processed in full on every refresh; both are accepted trade-offs of the one-shot
/// construction.
pub struct Monolithic;

impl Extractor for Monolithic {
    const STATE_ROLE: StateRole = StateRole::Message;

    fn update(state: &[u8; STATE_SIZE], data: &[u8]) -> [u8; STATE_SIZE] {
        sha256_concat(state, data)
    }

    fn derive_block(state: &[u8; STATE_SIZE], counter: u64) -> [u8; BLOCK_SIZE] {
        sha256_concat(state, &counter_bytes(counter))
    }
}
