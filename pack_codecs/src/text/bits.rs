use crate::{CodecError, PackBuffer};
use alloc::vec;
use pack_template::Count;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BitOrder {
    MsbFirst,
    LsbFirst,
}

fn bit_value(c: u8) -> Result<bool, CodecError> {
    match c {
        b'0' => Ok(false),
        b'1' => Ok(true),
        _ => Err(CodecError::InvalidBitChar(c)),
    }
}

/// `B`, `b`: each input character is one bit. `count` is the number of
/// bits; bits past the end of the input are zero.
pub(super) fn pack(input: &[u8], count: Count, order: BitOrder, buffer: &mut PackBuffer) -> Result<(), CodecError> {
    let bits = match count {
        Count::Star => input.len(),
        _ => count.or(1),
    };

    let mut packed = vec![0u8; bits.div_ceil(8)];
    for (pos, &c) in input.iter().take(bits).enumerate() {
        if bit_value(c)? {
            let shift = match order {
                BitOrder::MsbFirst => 7 - pos % 8,
                BitOrder::LsbFirst => pos % 8,
            };
            packed[pos / 8] |= 1 << shift;
        }
    }

    buffer.extend_from_slice(&packed);
    Ok(())
}
