//! Thin adapters over the cryptographic primitives used by the extractor strategies.
//!
//! Key and message roles are explicit parameters throughout so a strategy cannot swap
//! them silently; which role the secret state plays is tagged per strategy via
//! [`StateRole`](crate::StateRole).

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::STATE_SIZE;

// COUNTER ENCODING
// ================================================================================================

/// Encodes a block counter as a fixed-width 8-byte little-endian integer.
pub fn counter_bytes(counter: u64) -> [u8; 8] {
    counter.to_le_bytes()
}

// SHA-256
// ================================================================================================

/// SHA-256 over the concatenation `prefix || suffix`, in one invocation.
pub fn sha256_concat(prefix: &[u8], suffix: &[u8]) -> [u8; STATE_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(prefix);
    hasher.update(suffix);
    hasher.finalize().into()
}

// BLAKE3
// ================================================================================================

/// Streaming BLAKE3 absorption: feeds `chunks` into one hasher context in order, then
/// finalizes.
pub fn blake3_absorb(chunks: &[&[u8]]) -> [u8; STATE_SIZE] {
    let mut hasher = blake3::Hasher::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    hasher.finalize().into()
}

/// Keyed BLAKE3 with an explicit key/message split.
pub fn blake3_keyed(key: &[u8; STATE_SIZE], message: &[u8]) -> [u8; STATE_SIZE] {
    blake3::keyed_hash(key, message).into()
}

// HMAC-SHA256
// ================================================================================================

/// HMAC-SHA256 with an explicit key/message split.
pub fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; STATE_SIZE] {
    let mut mac =
        <Hmac<Sha256> as Mac>::new_from_slice(key).expect("HMAC-SHA256 accepts any key length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

// TESTS
// ================================================================================================
