use crate::PackBuffer;
use pack_template::Count;

/// `A`, `a`, `Z`: copy the input into a field of `count` bytes, padding or
/// truncating. A star makes the field exactly as wide as the input.
pub(super) fn pack(input: &[u8], count: Count, fill: u8, terminate: bool, buffer: &mut PackBuffer) {
    match count {
        Count::Star => buffer.extend_from_slice(input),
        _ => {
            let width = count.or(1);
            let taken = width.min(input.len());
            buffer.extend_from_slice(&input[..taken]);
            buffer.pad(width - taken, fill);
        }
    }
    if terminate {
        buffer.push(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[u8], count: Count, fill: u8, terminate: bool) -> Vec<u8> {
        let mut buffer = PackBuffer::new();
        pack(input, count, fill, terminate, &mut buffer);
        buffer.into_vec()
    }

    #[test]
    fn pads_and_truncates() {
        assert_eq!(run(b"ab", Count::Exact(5), 0, false), b"ab\0\0\0");
        assert_eq!(run(b"ab", Count::Exact(4), b' ', false), b"ab  ");
        assert_eq!(run(b"abcdef", Count::Exact(3), b' ', false), b"abc");
        assert_eq!(run(b"abc", Count::Unspecified, 0, false), b"a");
        assert_eq!(run(b"abc", Count::Exact(0), 0, false), b"");
    }

    #[test]
    fn star_takes_whole_input() {
        assert_eq!(run(b"abc", Count::Star, b' ', false), b"abc");
        assert_eq!(run(b"abc", Count::Star, 0, true), b"abc\0");
        assert_eq!(run(b"", Count::Star, 0, true), b"\0");
    }

    #[test]
    fn terminator_follows_field() {
        assert_eq!(run(b"abc", Count::Exact(2), 0, true), b"ab\0");
        assert_eq!(run(b"a", Count::Exact(3), 0, true), b"a\0\0\0");
    }
}
