//! Non-cryptographic baseline generators.
//!
//! These share the `refresh`/`next` contract of the extractor-backed generators but use
//! plain arithmetic update rules; no extractor design applies to them. They exist to
//! contrast cryptographic and non-cryptographic next-bit unpredictability in tests and
//! demos, not for production use.
//!
//! The baselines are deliberately inconsistent about unseeded output: [`Lcg`] and
//! [`Xorshift`] silently produce predictable bytes before any refresh, while
//! [`ByteSwap`] fails with an unready error until key material arrives.

mod byte_swap;
mod lcg;
mod xorshift;

pub use byte_swap::ByteSwap;
pub use lcg::Lcg;
pub use xorshift::Xorshift;

// HELPER FUNCTIONS
// ================================================================================================

/// Folds an arbitrary-length big-endian byte string into a 32-bit word (mod 2^32).
pub(crate) fn fold_be(data: &[u8]) -> u32 {
    data.iter().fold(0, |acc, &byte| (acc << 8) | u32::from(byte))
}
