use crate::PackBuffer;
use pack_template::Count;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";
const DEFAULT_LINE_LIMIT: usize = 72;

/// `M`: quoted-printable. `count` above 1 sets the soft line limit.
pub(super) fn pack(input: &[u8], count: Count, buffer: &mut PackBuffer) {
    let limit = match count.or(0) {
        0 | 1 => DEFAULT_LINE_LIMIT,
        n => n,
    };

    let mut line_len = 0usize;
    let mut prev = None;

    for &b in input {
        if b > 126 || (b < 32 && b != b'\n' && b != b'\t') || b == b'=' {
            buffer.push(b'=');
            buffer.push(HEX_UPPER[usize::from(b >> 4)]);
            buffer.push(HEX_UPPER[usize::from(b & 0x0f)]);
            line_len += 3;
            prev = None;
        } else if b == b'\n' {
            // Trailing whitespace would be stripped by transports.
            if matches!(prev, Some(b' ' | b'\t')) {
                buffer.push(b'=');
                buffer.push(b);
            }
            buffer.push(b);
            line_len = 0;
            prev = Some(b);
        } else {
            buffer.push(b);
            line_len += 1;
            prev = Some(b);
        }

        if line_len > limit {
            buffer.push(b'=');
            buffer.push(b'\n');
            line_len = 0;
            prev = Some(b'\n');
        }
    }

    if line_len > 0 {
        buffer.push(b'=');
        buffer.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &[u8], count: Count) -> Vec<u8> {
        let mut buffer = PackBuffer::new();
        pack(input, count, &mut buffer);
        buffer.into_vec()
    }

    #[test]
    fn plain_text() {
        assert_eq!(run(b"abc", Count::Unspecified), b"abc=\n");
        assert_eq!(run(b"abc\n", Count::Unspecified), b"abc\n");
        assert_eq!(run(b"", Count::Unspecified), b"");
    }

    #[test]
    fn escapes() {
        assert_eq!(run(b"a=b", Count::Unspecified), b"a=3Db=\n");
        assert_eq!(run(&[0xe9], Count::Unspecified), b"=E9=\n");
        assert_eq!(run(b"\x01\t", Count::Unspecified), b"=01\t=\n");
    }

    #[test]
    fn protects_whitespace_before_newline() {
        assert_eq!(run(b"a \n", Count::Unspecified), b"a =\n\n");
    }

    #[test]
    fn soft_line_breaks() {
        let input = [b'x'; 10];
        assert_eq!(run(&input, Count::Exact(4)), b"xxxxx=\nxxxxx=\n");

        let long = [b'y'; 80];
        let encoded = run(&long, Count::Unspecified);
        assert_eq!(&encoded[..75], [&[b'y'; 73][..], &b"=\n"[..]].concat().as_slice());
    }
}
