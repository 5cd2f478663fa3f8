use super::{Extractor, StateRole};
use crate::primitive::{blake3_absorb, blake3_keyed, counter_bytes};
use crate::{BLOCK_SIZE, STATE_SIZE};

// ONLINE EXTRACTOR
// ================================================================================================

/// Streaming extractor built on BLAKE3's incremental hasher.
///
/// A refresh absorbs the state and then the entropy into one streaming context and
/// finalizes it into the new state; each refresh performs exactly one finalize. The
/// streaming API matters when entropy arrives as a sequence of chunks, which the
/// absorption loop handles without re-buffering the input.
///
/// Output blocks come from the keyed mode of the same primitive, with the state as key
/// and the counter encoding as message.
pub struct Online;

impl Extractor for Online {
    const STATE_ROLE: StateRole = StateRole::Message;

    fn update(state: &[u8; STATE_SIZE], data: &[u8]) -> [u8; STATE_SIZE] {
        blake3_absorb(&[state, data])
    }

    fn derive_block(state: &[u8; STATE_SIZE], counter: u64) -> [u8; BLOCK_SIZE] {
        blake3_keyed(state, &counter_bytes(counter))
    }
}
