#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(feature = "std")]
fn as_char(byte: &u8) -> char {
    char::from(*byte)
}

/// Encoder errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// `U` was given something that is not a code point.
    #[cfg_attr(feature = "std", error("pack(U): value out of range"))]
    CodepointOutOfRange(i128),

    #[cfg_attr(
        feature = "std",
        error("invalid character {:?} in bit string", as_char(.0))
    )]
    InvalidBitChar(u8),

    #[cfg_attr(
        feature = "std",
        error("invalid character {:?} in hex string", as_char(.0))
    )]
    InvalidHexChar(u8),

    /// `P` and `p` would expose raw memory addresses.
    #[cfg_attr(
        feature = "std",
        error("{0} packs raw memory addresses and is not supported")
    )]
    PointerUnsupported(char),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::CodepointOutOfRange(_) => write!(f, "pack(U): value out of range"),
            CodecError::InvalidBitChar(b) => {
                write!(f, "invalid character {:?} in bit string", char::from(*b))
            }
            CodecError::InvalidHexChar(b) => {
                write!(f, "invalid character {:?} in hex string", char::from(*b))
            }
            CodecError::PointerUnsupported(d) => {
                write!(f, "{} packs raw memory addresses and is not supported", d)
            }
        }
    }
}
