//! String directives: `A a Z B b H h M m u P p`.

mod base64;
mod bits;
mod hex;
mod padded;
mod quoted;

use crate::{CodecError, PackBuffer};
use pack_template::Count;

/// Resolved encoding of a string directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// `A`: space padded.
    SpacePadded,
    /// `a`: null padded.
    NullPadded,
    /// `Z`: null padded, plus a terminator.
    NullTerminated,
    /// `B`: bit string, most significant bit first.
    BitsMsbFirst,
    /// `b`: bit string, least significant bit first.
    BitsLsbFirst,
    /// `H`: hex string, high nibble first.
    HexHighFirst,
    /// `h`: hex string, low nibble first.
    HexLowFirst,
    /// `M`
    QuotedPrintable,
    /// `m`
    Base64,
    /// `u`
    Uuencode,
    /// `P` / `p`: recognized, never packed.
    Pointer(char),
}

impl TextFormat {
    pub fn resolve(directive: char) -> Option<Self> {
        let format = match directive {
            'A' => TextFormat::SpacePadded,
            'a' => TextFormat::NullPadded,
            'Z' => TextFormat::NullTerminated,
            'B' => TextFormat::BitsMsbFirst,
            'b' => TextFormat::BitsLsbFirst,
            'H' => TextFormat::HexHighFirst,
            'h' => TextFormat::HexLowFirst,
            'M' => TextFormat::QuotedPrintable,
            'm' => TextFormat::Base64,
            'u' => TextFormat::Uuencode,
            'P' | 'p' => TextFormat::Pointer(directive),
            _ => return None,
        };
        Some(format)
    }

    /// Fails for the pointer directives, which have no safe encoding.
    pub fn ensure_supported(&self) -> Result<(), CodecError> {
        match *self {
            TextFormat::Pointer(directive) => Err(CodecError::PointerUnsupported(directive)),
            _ => Ok(()),
        }
    }

    /// Whether this is a MIME transfer encoding (`M`, `m`). Their output
    /// is labelled US-ASCII; `u` is 7-bit too but keeps the binary label.
    pub fn is_mime_encoding(&self) -> bool {
        matches!(self, TextFormat::QuotedPrintable | TextFormat::Base64)
    }

    /// Encodes `input` according to `count` and appends the result.
    ///
    /// What `count` means depends on the format: a field width for the
    /// padded formats, a number of bits or nibbles for bit and hex
    /// strings, and a line length for the armoring formats.
    ///
    /// ```
    /// use pack_codecs::{PackBuffer, TextFormat};
    /// use pack_template::Count;
    ///
    /// let mut buffer = PackBuffer::new();
    /// TextFormat::BitsMsbFirst.pack_into(b"1011", Count::Star, &mut buffer).unwrap();
    /// TextFormat::HexHighFirst.pack_into(b"a1f", Count::Star, &mut buffer).unwrap();
    /// assert_eq!(buffer.as_slice(), &[0b1011_0000, 0xa1, 0xf0]);
    /// ```
    pub fn pack_into(&self, input: &[u8], count: Count, buffer: &mut PackBuffer) -> Result<(), CodecError> {
        match *self {
            TextFormat::SpacePadded => padded::pack(input, count, b' ', false, buffer),
            TextFormat::NullPadded => padded::pack(input, count, 0, false, buffer),
            TextFormat::NullTerminated => padded::pack(input, count, 0, true, buffer),
            TextFormat::BitsMsbFirst => bits::pack(input, count, bits::BitOrder::MsbFirst, buffer)?,
            TextFormat::BitsLsbFirst => bits::pack(input, count, bits::BitOrder::LsbFirst, buffer)?,
            TextFormat::HexHighFirst => hex::pack(input, count, hex::NibbleOrder::HighFirst, buffer)?,
            TextFormat::HexLowFirst => hex::pack(input, count, hex::NibbleOrder::LowFirst, buffer)?,
            TextFormat::QuotedPrintable => quoted::pack(input, count, buffer),
            TextFormat::Base64 => base64::pack_base64(input, count, buffer),
            TextFormat::Uuencode => base64::pack_uuencode(input, count, buffer),
            TextFormat::Pointer(directive) => return Err(CodecError::PointerUnsupported(directive)),
        }
        Ok(())
    }
}
