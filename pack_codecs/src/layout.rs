//! Declared native layout of the platform the data is packed for.
//!
//! `S`, `I`, `L`, `J` and the native float directives follow this layout
//! instead of whatever the packing host happens to be, so output can be
//! made deterministic on any machine.

use crate::Endian;
use bytemuck::Pod;

/// Size of a native `long` or machine word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeWidth {
    Bits32,
    Bits64,
}

impl NativeWidth {
    pub const fn bytes(self) -> usize {
        match self {
            NativeWidth::Bits32 => 4,
            NativeWidth::Bits64 => 8,
        }
    }
}

/// Byte order and type widths used for native directives.
///
/// # Examples
///
/// ```
/// use pack_codecs::{Endian, NativeLayout, NativeWidth};
///
/// let layout = NativeLayout::new(Endian::Big, NativeWidth::Bits32, NativeWidth::Bits32);
/// assert_eq!(layout.word_width.bytes(), 4);
/// assert_ne!(layout, NativeLayout::LP64_LE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeLayout {
    pub endian: Endian,
    /// Width of `l_` / `L_`.
    pub long_width: NativeWidth,
    /// Width of `j` / `J`.
    pub word_width: NativeWidth,
}

impl NativeLayout {
    /// 64-bit Unix on a little-endian CPU (x86_64, aarch64).
    pub const LP64_LE: Self = Self::new(Endian::Little, NativeWidth::Bits64, NativeWidth::Bits64);
    /// 64-bit Unix on a big-endian CPU (s390x, sparc64).
    pub const LP64_BE: Self = Self::new(Endian::Big, NativeWidth::Bits64, NativeWidth::Bits64);
    /// 64-bit Windows.
    pub const LLP64_LE: Self = Self::new(Endian::Little, NativeWidth::Bits32, NativeWidth::Bits64);
    /// 32-bit little-endian targets.
    pub const ILP32_LE: Self = Self::new(Endian::Little, NativeWidth::Bits32, NativeWidth::Bits32);

    pub const fn new(endian: Endian, long_width: NativeWidth, word_width: NativeWidth) -> Self {
        NativeLayout {
            endian,
            long_width,
            word_width,
        }
    }

    /// The layout of the target this crate was compiled for.
    pub fn host() -> Self {
        let endian = if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        };
        let word_width = if cfg!(target_pointer_width = "64") {
            NativeWidth::Bits64
        } else {
            NativeWidth::Bits32
        };
        let long_width = if cfg!(all(target_pointer_width = "64", not(windows))) {
            NativeWidth::Bits64
        } else {
            NativeWidth::Bits32
        };
        NativeLayout::new(endian, long_width, word_width)
    }
}

impl Default for NativeLayout {
    fn default() -> Self {
        Self::host()
    }
}

/// Integers whose in-memory bytes can be put into a given order before
/// being copied out with `bytemuck`.
pub(crate) trait Ordered: Pod {
    fn ordered(self, endian: Endian) -> Self;
}

macro_rules! impl_ordered {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn ordered(self, endian: Endian) -> Self {
                    match endian {
                        Endian::Big => self.to_be(),
                        Endian::Little => self.to_le(),
                    }
                }
            }
        )*
    };
}

impl_ordered!(u16, u32, u64);
