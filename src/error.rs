use core::fmt;

// ERRORS
// ================================================================================================

/// Errors which can occur when drawing output from a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrngError {
    /// Producing the next output block would require a counter value outside the 64-bit
    /// encodable range.
    ///
    /// This error is fatal: the generator refuses to wrap the counter, so callers must
    /// construct a fresh generator to continue drawing output.
    CounterOverflow,
    /// The generator requires key material before it can produce output.
    Unready,
}

impl fmt::Display for PrngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PrngError::*;
        match self {
            CounterOverflow => {
                write!(f, "Block counter exceeded the 64-bit encodable range; construct a fresh generator")
            }
            Unready => {
                write!(f, "Generator must be refreshed with key material before producing output")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrngError {}
