use crate::{CodecError, PackBuffer};
use alloc::vec;
use pack_template::Count;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NibbleOrder {
    HighFirst,
    LowFirst,
}

fn nibble(c: u8) -> Result<u8, CodecError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CodecError::InvalidHexChar(c)),
    }
}

/// `H`, `h`: each input character is one nibble. `count` is the number of
/// nibbles; nibbles past the end of the input are zero.
pub(super) fn pack(input: &[u8], count: Count, order: NibbleOrder, buffer: &mut PackBuffer) -> Result<(), CodecError> {
    let nibbles = match count {
        Count::Star => input.len(),
        _ => count.or(1),
    };

    let mut packed = vec![0u8; nibbles.div_ceil(2)];
    for (pos, &c) in input.iter().take(nibbles).enumerate() {
        let value = nibble(c)?;
        let high = match order {
            NibbleOrder::HighFirst => pos % 2 == 0,
            NibbleOrder::LowFirst => pos % 2 == 1,
        };
        packed[pos / 2] |= if high { value << 4 } else { value };
    }

    buffer.extend_from_slice(&packed);
    Ok(())
}
