//! Property-based tests for the directive encoders.

use pack_codecs::{Endian, FloatFormat, IntFormat, NativeLayout, PackBuffer, TextFormat};
use pack_template::{Count, Modifiers};
use proptest::prelude::*;

const FIXED_INT_LETTERS: &[char] = &[
    'C', 'c', 'S', 's', 'n', 'v', 'I', 'i', 'L', 'l', 'N', 'V', 'J', 'j',
];

fn any_layout() -> impl Strategy<Value = NativeLayout> {
    prop::sample::select(vec![
        NativeLayout::LP64_LE,
        NativeLayout::LP64_BE,
        NativeLayout::LLP64_LE,
        NativeLayout::ILP32_LE,
    ])
}

fn encode_int(format: IntFormat, value: i128) -> Vec<u8> {
    let mut buffer = PackBuffer::new();
    format.pack_into(value, &mut buffer).unwrap();
    buffer.into_vec()
}

/// Reads a fixed-width field back, sign-extending when the format is signed.
fn decode_int(format: IntFormat, bytes: &[u8]) -> i128 {
    let IntFormat::Fixed { width, signed, endian } = format else {
        unreachable!("fixed formats only");
    };
    let mut raw: u64 = 0;
    for i in 0..width {
        let byte = match endian {
            Endian::Big => bytes[i],
            Endian::Little => bytes[width - 1 - i],
        };
        raw = (raw << 8) | u64::from(byte);
    }
    let bits = 8 * width as u32;
    if signed && bits < 64 && raw >> (bits - 1) == 1 {
        raw as i128 - (1i128 << bits)
    } else if signed && bits == 64 {
        raw as i64 as i128
    } else {
        raw as i128
    }
}

fn in_range(format: IntFormat) -> impl Strategy<Value = i128> {
    let IntFormat::Fixed { width, signed, .. } = format else {
        unreachable!("fixed formats only");
    };
    let bits = 8 * width as u32;
    let (min, max) = if signed {
        (-(1i128 << (bits - 1)), (1i128 << (bits - 1)) - 1)
    } else {
        (0, (1i128 << bits) - 1)
    };
    min..=max
}

proptest! {
    #[test]
    fn prop_fixed_ints_roundtrip_in_range(
        (format, value) in (prop::sample::select(FIXED_INT_LETTERS), any_layout())
            .prop_map(|(d, layout)| IntFormat::resolve(d, Modifiers::default(), &layout).unwrap())
            .prop_flat_map(|format| (Just(format), in_range(format)))
    ) {
        let bytes = encode_int(format, value);
        prop_assert_eq!(Some(bytes.len()), format.width());
        prop_assert_eq!(decode_int(format, &bytes), value);
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_ints_wrap(
        d in prop::sample::select(FIXED_INT_LETTERS),
        layout in any_layout(),
        value in any::<i64>(),
        multiple in -4i128..4,
    ) {
        let format = IntFormat::resolve(d, Modifiers::default(), &layout).unwrap();
        let modulus = 1i128 << (8 * format.width().unwrap() as u32);
        let shifted = i128::from(value) + multiple * modulus;

        prop_assert_eq!(encode_int(format, shifted), encode_int(format, value.into()));
        prop_assert_eq!(
            encode_int(format, value.into()),
            encode_int(format, i128::from(value).rem_euclid(modulus))
        );
    }
}

proptest! {
    #[test]
    fn prop_utf8_matches_std_for_scalars(c in any::<char>()) {
        let bytes = encode_int(IntFormat::Utf8, u32::from(c).into());
        let mut expected = [0u8; 4];
        prop_assert_eq!(bytes.as_slice(), c.encode_utf8(&mut expected).as_bytes());
    }
}

proptest! {
    #[test]
    fn prop_doubles_roundtrip(value in any::<f64>(), big in any::<bool>()) {
        let format = FloatFormat::resolve(if big { 'G' } else { 'E' }, &NativeLayout::host()).unwrap();
        let mut buffer = PackBuffer::new();
        format.pack_into(value, &mut buffer);

        let bytes: [u8; 8] = buffer.as_slice().try_into().unwrap();
        let back = if big { f64::from_be_bytes(bytes) } else { f64::from_le_bytes(bytes) };
        prop_assert_eq!(back.to_bits(), value.to_bits());
    }
}

proptest! {
    #[test]
    fn prop_padded_fields_have_exact_width(
        input in prop::collection::vec(any::<u8>(), 0..64),
        width in 0usize..96,
        d in prop::sample::select(vec!['A', 'a', 'Z']),
    ) {
        let mut buffer = PackBuffer::new();
        TextFormat::resolve(d)
            .unwrap()
            .pack_into(&input, Count::Exact(width), &mut buffer)
            .unwrap();

        let expected = if d == 'Z' { width + 1 } else { width };
        prop_assert_eq!(buffer.len(), expected);

        let kept = width.min(input.len());
        prop_assert_eq!(&buffer.as_slice()[..kept], &input[..kept]);
    }
}

proptest! {
    #[test]
    fn prop_bit_and_hex_output_sizes(bits in "[01]{0,64}", nibbles in "[0-9a-fA-F]{0,64}", count in 0usize..80) {
        let mut buffer = PackBuffer::new();
        TextFormat::BitsLsbFirst.pack_into(bits.as_bytes(), Count::Exact(count), &mut buffer).unwrap();
        prop_assert_eq!(buffer.len(), count.div_ceil(8));

        let mut buffer = PackBuffer::new();
        TextFormat::HexHighFirst.pack_into(nibbles.as_bytes(), Count::Star, &mut buffer).unwrap();
        prop_assert_eq!(buffer.len(), nibbles.len().div_ceil(2));
    }
}

proptest! {
    #[test]
    fn prop_armored_output_is_ascii(input in prop::collection::vec(any::<u8>(), 0..300), count in 0usize..100) {
        for format in [TextFormat::QuotedPrintable, TextFormat::Base64, TextFormat::Uuencode] {
            let mut buffer = PackBuffer::new();
            format.pack_into(&input, Count::Exact(count), &mut buffer).unwrap();
            prop_assert!(buffer.as_slice().is_ascii());
        }
    }
}

proptest! {
    #[test]
    fn prop_unwrapped_base64_length(input in prop::collection::vec(any::<u8>(), 0..300)) {
        let mut buffer = PackBuffer::new();
        TextFormat::Base64.pack_into(&input, Count::Exact(0), &mut buffer).unwrap();
        prop_assert_eq!(buffer.len(), input.len().div_ceil(3) * 4);
    }
}
