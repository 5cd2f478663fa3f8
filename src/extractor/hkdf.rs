use super::{Extractor, StateRole};
use crate::primitive::{counter_bytes, hmac_sha256};
use crate::{BLOCK_SIZE, STATE_SIZE};

// HKDF-STYLE EXTRACTOR
// ================================================================================================

/// Extract-then-expand strategy built on HMAC-SHA256.
///
/// The extract phase runs the PRF with the *old state as key* and the entropy as
/// message: `state' = HMAC(key = state, message = data)`. This inverts the role the
/// other strategies give the state and matches the canonical two-phase construction:
/// key-material update (extract) and stream expansion (expand) are two uses of the same
/// PRF, each with a clear key/message split.
///
/// New strategies should treat this one as the reference design for deriving many
/// independent-looking output streams from a small secret.
pub struct HkdfStyle;

impl Extractor for HkdfStyle {
    const STATE_ROLE: StateRole = StateRole::Key;

    fn update(state: &[u8; STATE_SIZE], data: &[u8]) -> [u8; STATE_SIZE] {
        hmac_sha256(state, data)
    }

    fn derive_block(state: &[u8; STATE_SIZE], counter: u64) -> [u8; BLOCK_SIZE] {
        hmac_sha256(state, &counter_bytes(counter))
    }
}
