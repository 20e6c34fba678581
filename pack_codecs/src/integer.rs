//! Integer directives: `C c S s n v I i L l N V J j U`.
//!
//! Fixed-width formats never reject a value. Anything outside the width is
//! reduced modulo `2^(8*width)`, which is plain two's-complement
//! truncation of the low bytes.

use crate::layout::Ordered;
use crate::{CodecError, Endian, NativeLayout, PackBuffer};
use pack_template::Modifiers;

/// Largest value the extended UTF-8 scheme can hold (six bytes).
const MAX_CODEPOINT: i128 = 0x7fff_ffff;

/// Resolved encoding of an integer directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntFormat {
    Fixed {
        /// 1, 2, 4 or 8 bytes.
        width: usize,
        signed: bool,
        endian: Endian,
    },
    /// `U`: one code point as a UTF-8 sequence.
    Utf8,
}

impl IntFormat {
    /// Maps a directive letter and its modifiers onto a format, or `None`
    /// if the letter is not an integer directive.
    ///
    /// ```
    /// use pack_codecs::{Endian, IntFormat, NativeLayout};
    /// use pack_template::Modifiers;
    ///
    /// let layout = NativeLayout::LP64_LE;
    /// let native_long = Modifiers { native_size: true, endian: Some(Endian::Big) };
    ///
    /// assert_eq!(
    ///     IntFormat::resolve('l', native_long, &layout),
    ///     Some(IntFormat::Fixed { width: 8, signed: true, endian: Endian::Big })
    /// );
    /// assert_eq!(IntFormat::resolve('d', Modifiers::default(), &layout), None);
    /// ```
    pub fn resolve(directive: char, modifiers: Modifiers, layout: &NativeLayout) -> Option<Self> {
        let native = modifiers.endian.unwrap_or(layout.endian);
        let (width, signed, endian) = match directive {
            'C' => (1, false, native),
            'c' => (1, true, native),
            'S' => (2, false, native),
            's' => (2, true, native),
            'n' => (2, false, Endian::Big),
            'v' => (2, false, Endian::Little),
            'I' => (4, false, native),
            'i' => (4, true, native),
            'L' | 'l' => {
                let width = if modifiers.native_size {
                    layout.long_width.bytes()
                } else {
                    4
                };
                (width, directive == 'l', native)
            }
            'N' => (4, false, Endian::Big),
            'V' => (4, false, Endian::Little),
            'J' => (layout.word_width.bytes(), false, native),
            'j' => (layout.word_width.bytes(), true, native),
            'U' => return Some(IntFormat::Utf8),
            _ => return None,
        };
        Some(IntFormat::Fixed {
            width,
            signed,
            endian,
        })
    }

    /// Number of bytes one value takes, or `None` for `U`.
    pub fn width(&self) -> Option<usize> {
        match *self {
            IntFormat::Fixed { width, .. } => Some(width),
            IntFormat::Utf8 => None,
        }
    }

    /// Appends one value.
    ///
    /// # Errors
    ///
    /// Only [`IntFormat::Utf8`] can fail, with
    /// [`CodecError::CodepointOutOfRange`] for a negative value or one
    /// above `0x7fff_ffff`.
    pub fn pack_into(&self, value: i128, buffer: &mut PackBuffer) -> Result<(), CodecError> {
        match *self {
            IntFormat::Fixed { width, endian, .. } => {
                // Signedness only matters when reading back: the low bytes
                // of the two's-complement value are the same either way.
                let raw = value as u64;
                match width {
                    1 => buffer.push(raw as u8),
                    2 => buffer.extend_pod(&(raw as u16).ordered(endian)),
                    4 => buffer.extend_pod(&(raw as u32).ordered(endian)),
                    _ => buffer.extend_pod(&raw.ordered(endian)),
                }
                Ok(())
            }
            IntFormat::Utf8 => pack_codepoint(value, buffer),
        }
    }
}

/// Writes `value` with the pre-RFC 3629 UTF-8 scheme, which
/// reaches 31 bits using up to six bytes. Surrogates are not rejected.
fn pack_codepoint(value: i128, buffer: &mut PackBuffer) -> Result<(), CodecError> {
    if !(0..=MAX_CODEPOINT).contains(&value) {
        return Err(CodecError::CodepointOutOfRange(value));
    }
    let cp = value as u32;
    if cp < 0x80 {
        buffer.push(cp as u8);
        return Ok(());
    }

    let (len, lead): (u32, u8) = match cp {
        0..=0x7ff => (2, 0xc0),
        0x800..=0xffff => (3, 0xe0),
        0x1_0000..=0x1f_ffff => (4, 0xf0),
        0x20_0000..=0x3ff_ffff => (5, 0xf8),
        _ => (6, 0xfc),
    };

    buffer.push(lead | (cp >> (6 * (len - 1))) as u8);
    for i in (0..len - 1).rev() {
        buffer.push(0x80 | ((cp >> (6 * i)) & 0x3f) as u8);
    }
    Ok(())
}
