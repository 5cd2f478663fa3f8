//! Seedless pseudo-random generation for cold-start entropy accumulation.
//!
//! Generators in this crate start from a fixed, public, all-zero state and produce output
//! on demand even before any entropy has been supplied. Unpredictability is accumulated
//! by repeated [`SeedlessPrng::refresh`] calls, each of which irreversibly folds fresh
//! entropy of arbitrary length into the internal state through one of several
//! interchangeable extractor strategies.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod baseline;
pub mod extractor;
pub mod primitive;

mod error;
mod generator;

// RE-EXPORTS
// ================================================================================================

pub use error::PrngError;
pub use extractor::{Extractor, HkdfStyle, Monolithic, Online, StateRole};
pub use generator::{Generator, SeedlessPrng};

// TYPE ALIASES
// ================================================================================================

/// Generator driven by the single-shot hash extractor.
pub type MonolithicPrng = Generator<Monolithic>;

/// Generator driven by the streaming-absorption extractor.
pub type OnlinePrng = Generator<Online>;

/// Generator driven by the extract-then-expand extractor.
pub type HkdfPrng = Generator<HkdfStyle>;

// CONSTANTS
// ================================================================================================

/// Size of the internal secret state, in bytes.
pub const STATE_SIZE: usize = 32;

/// Number of output bytes produced per counter value by every extractor strategy.
pub const BLOCK_SIZE: usize = 32;
