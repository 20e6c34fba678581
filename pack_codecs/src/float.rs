//! Float directives: `D d F f E e G g`.

use crate::layout::Ordered;
use crate::{Endian, NativeLayout, PackBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// IEEE-754 binary32.
    Single,
    /// IEEE-754 binary64.
    Double,
}

/// Resolved encoding of a float directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatFormat {
    pub precision: Precision,
    pub endian: Endian,
}

impl FloatFormat {
    pub fn resolve(directive: char, layout: &NativeLayout) -> Option<Self> {
        let (precision, endian) = match directive {
            'D' | 'd' => (Precision::Double, layout.endian),
            'E' => (Precision::Double, Endian::Little),
            'G' => (Precision::Double, Endian::Big),
            'F' | 'f' => (Precision::Single, layout.endian),
            'e' => (Precision::Single, Endian::Little),
            'g' => (Precision::Single, Endian::Big),
            _ => return None,
        };
        Some(FloatFormat { precision, endian })
    }

    pub fn width(&self) -> usize {
        match self.precision {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }

    /// Appends one value. Narrowing to single precision rounds to nearest
    /// and saturates to infinity; NaN and infinities pass through.
    pub fn pack_into(&self, value: f64, buffer: &mut PackBuffer) {
        match self.precision {
            Precision::Single => buffer.extend_pod(&(value as f32).to_bits().ordered(self.endian)),
            Precision::Double => buffer.extend_pod(&value.to_bits().ordered(self.endian)),
        }
    }
}
