//! Entropy extractor strategies.
//!
//! An extractor decides how a fixed-size secret state absorbs variable-length untrusted
//! entropy, and how a long output stream is derived from that state without ever reusing
//! a (state, counter) pair. Three strategies are provided: the single-shot
//! [`Monolithic`] hash, the streaming [`Online`] absorber, and the extract-then-expand
//! [`HkdfStyle`] construction.

use crate::{BLOCK_SIZE, STATE_SIZE};

mod hkdf;
mod monolithic;
mod online;

pub use hkdf::HkdfStyle;
pub use monolithic::Monolithic;
pub use online::Online;


// EXTRACTOR TRAIT
// ================================================================================================

/// A state-update strategy for the seedless generator.
///
/// An extractor defines two operations: folding fresh entropy into the fixed-size secret
/// state, and deriving one fixed-size output block from the state and a counter value.
/// Implementations are stateless; the [`Generator`](crate::Generator) owns the state and
/// the counter, and never lets a strategy read or write the counter directly.
pub trait Extractor {
    /// Role the current state plays in the primitive call during a state update.
    const STATE_ROLE: StateRole;

    /// Derives a new state from the current state and fresh entropy of arbitrary length.
    fn update(state: &[u8; STATE_SIZE], data: &[u8]) -> [u8; STATE_SIZE];

    /// Derives the output block for the given counter value from the current state.
    ///
    /// Must not depend on anything but `(state, counter)`; block inputs stay distinct
    /// because the generator never reuses a counter value for a fixed state.
    fn derive_block(state: &[u8; STATE_SIZE], counter: u64) -> [u8; BLOCK_SIZE];
}

// STATE ROLE
// ================================================================================================

/// Position of the secret state in the underlying primitive call.
///
/// The monolithic and online extractors hash the state as part of the message; the
/// HKDF-style extractor keys a PRF with it. The role is an explicit tag so that key and
/// message cannot be swapped by accident when a strategy is added or modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateRole {
    /// The state is absorbed as (a prefix of) the primitive's message.
    Message,
    /// The state keys the primitive; entropy or the counter encoding is the message.
    Key,
}
