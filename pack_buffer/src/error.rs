#[cfg(feature = "std")]
use thiserror::Error;

/// Buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Backward truncation past the start of the buffer.
    #[cfg_attr(
        feature = "std",
        error("cannot drop {requested} bytes from a buffer of length {len}")
    )]
    Underflow { requested: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::Underflow { requested, len } => write!(
                f,
                "cannot drop {} bytes from a buffer of length {}",
                requested, len
            ),
        }
    }
}
