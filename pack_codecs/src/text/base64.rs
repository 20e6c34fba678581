use crate::PackBuffer;
use pack_template::Count;

const BASE64_ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const UU_ALPHABET: &[u8; 64] = b"`!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_";

/// Input bytes per line when no usable count is given.
const DEFAULT_LINE_BYTES: usize = 45;
/// A uuencoded line length must fit in one length character.
const MAX_UU_LINE_BYTES: usize = 63;

/// Input bytes per output line. Counts below 3 fall back to the default;
/// others are rounded down to whole 3-byte groups.
fn line_bytes(count: Count, max: Option<usize>) -> usize {
    let requested = count.or(0);
    if requested <= 2 {
        return DEFAULT_LINE_BYTES;
    }
    match max {
        Some(max) if requested > max => max,
        _ => requested / 3 * 3,
    }
}

/// Encodes 3-byte groups into 4 characters, padding a short final group.
fn encode_groups(input: &[u8], alphabet: &[u8; 64], padding: u8, buffer: &mut PackBuffer) {
    for group in input.chunks(3) {
        let b0 = group[0];
        let b1 = group.get(1).copied().unwrap_or(0);
        let b2 = group.get(2).copied().unwrap_or(0);

        buffer.push(alphabet[usize::from(b0 >> 2)]);
        buffer.push(alphabet[usize::from((b0 & 0x03) << 4 | b1 >> 4)]);
        buffer.push(if group.len() > 1 {
            alphabet[usize::from((b1 & 0x0f) << 2 | b2 >> 6)]
        } else {
            padding
        });
        buffer.push(if group.len() > 2 {
            alphabet[usize::from(b2 & 0x3f)]
        } else {
            padding
        });
    }
}

/// `m`: base64 in newline-terminated lines. A count of zero produces a
/// single unbroken run with no newline.
pub(super) fn pack_base64(input: &[u8], count: Count, buffer: &mut PackBuffer) {
    if count == Count::Exact(0) {
        encode_groups(input, BASE64_ALPHABET, b'=', buffer);
        return;
    }
    for line in input.chunks(line_bytes(count, None)) {
        encode_groups(line, BASE64_ALPHABET, b'=', buffer);
        buffer.push(b'\n');
    }
}

/// `u`: each line is a length character, the encoded bytes, and a newline.
pub(super) fn pack_uuencode(input: &[u8], count: Count, buffer: &mut PackBuffer) {
    for line in input.chunks(line_bytes(count, Some(MAX_UU_LINE_BYTES))) {
        buffer.push(b' ' + line.len() as u8);
        encode_groups(line, UU_ALPHABET, b'`', buffer);
        buffer.push(b'\n');
    }
}
