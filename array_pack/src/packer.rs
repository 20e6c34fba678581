//! Template driver: walks the directives against the values.

use crate::coerce::{coerce_float, coerce_integer, coerce_string};
use crate::{Encoding, PackConfig, PackError, Value};
use pack_buffer::PackBuffer;
use pack_codecs::{FloatFormat, IntFormat, NativeLayout, TextFormat};
use pack_template::{Count, Token, Tokenizer};

/// Packs value sequences according to directive templates.
///
/// A `Packer` holds only its configuration. Every call gets its own
/// buffer and value cursor, so one packer may be shared between threads.
///
/// The encoding label of the result is overwritten by every integer
/// directive (UTF-8 for `U`, binary otherwise) and by `m` and `M`
/// (US-ASCII). Whichever of these comes last in the template decides it.
///
/// ```
/// use array_pack::{Encoding, Packer, Value};
///
/// let packer = Packer::new();
/// let values = [Value::from(0x263a), Value::from(1)];
///
/// assert_eq!(packer.pack(&values, "UC").unwrap().encoding(), Encoding::Binary);
/// assert_eq!(packer.pack(&values, "CU").unwrap().encoding(), Encoding::Utf8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Packer {
    config: PackConfig,
}

impl Packer {
    /// A packer for the host layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PackConfig) -> Self {
        Packer { config }
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Packs `values` according to `template`.
    ///
    /// # Errors
    ///
    /// Fails on the first directive that cannot be satisfied. Directives
    /// before it have run, but their output is dropped along with the
    /// buffer. A malformed unit in the template is only reported once
    /// packing reaches it.
    pub fn pack(&self, values: &[Value], template: &str) -> Result<Packed, PackError> {
        let mut run = Run {
            source: values,
            layout: self.config.layout(),
            buffer: PackBuffer::with_capacity(template.len()),
            encoding: Encoding::default(),
            index: 0,
        };
        for parsed in Tokenizer::new(template) {
            run.apply(parsed?)?;
        }
        Ok(Packed {
            bytes: run.buffer.into_vec(),
            encoding: run.encoding,
        })
    }
}

/// State of a single pack call.
struct Run<'a> {
    source: &'a [Value],
    layout: &'a NativeLayout,
    buffer: PackBuffer,
    encoding: Encoding,
    index: usize,
}

impl<'a> Run<'a> {
    fn apply(&mut self, token: Token) -> Result<(), PackError> {
        let directive = token.directive;

        if let Some(format) = TextFormat::resolve(directive) {
            return self.pack_text(format, token);
        }
        if let Some(format) = IntFormat::resolve(directive, token.modifiers, self.layout) {
            for _ in 0..self.repetitions(token.count) {
                let value = coerce_integer(self.next_value()?)?;
                format.pack_into(value, &mut self.buffer)?;
            }
            self.encoding = match format {
                IntFormat::Utf8 => Encoding::Utf8,
                IntFormat::Fixed { .. } => Encoding::Binary,
            };
            return Ok(());
        }
        if let Some(format) = FloatFormat::resolve(directive, self.layout) {
            for _ in 0..self.repetitions(token.count) {
                let value = coerce_float(self.next_value()?)?;
                format.pack_into(value, &mut self.buffer);
            }
            return Ok(());
        }

        match directive {
            'x' => {
                if !token.count.is_star() {
                    self.buffer.pad(token.count.or(1), 0);
                }
            }
            'X' => {
                if !token.count.is_star() {
                    self.buffer
                        .drop_back(token.count.or(1))
                        .map_err(|source| PackError::BufferRange { directive, source })?;
                }
            }
            '@' => self.buffer.seek(token.count.or(1)),
            _ => return Err(PackError::UnsupportedDirective(directive)),
        }
        Ok(())
    }

    fn pack_text(&mut self, format: TextFormat, token: Token) -> Result<(), PackError> {
        let value = self.next_value()?;
        format.ensure_supported()?;

        let bytes = coerce_string(value, token.directive)?;
        format.pack_into(&bytes, token.count, &mut self.buffer)?;

        if format.is_mime_encoding() {
            self.encoding = Encoding::UsAscii;
        }
        Ok(())
    }

    /// How many values a numeric directive consumes. The count is checked
    /// against the remaining values one at a time, in
    /// [`next_value`](Self::next_value).
    fn repetitions(&self, count: Count) -> usize {
        match count {
            Count::Star => self.source.len() - self.index,
            Count::Exact(n) => n,
            Count::Unspecified => 1,
        }
    }

    fn next_value(&mut self) -> Result<&'a Value, PackError> {
        let value = self
            .source
            .get(self.index)
            .ok_or(PackError::TooFewArguments)?;
        self.index += 1;
        Ok(value)
    }
}

/// The bytes produced by one pack call and their encoding label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    bytes: Vec<u8>,
    encoding: Encoding,
}

impl Packed {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Packed {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Packed> for Vec<u8> {
    fn from(packed: Packed) -> Self {
        packed.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn packer() -> Packer {
        Packer::with_config(PackConfig::with_layout(NativeLayout::LP64_LE))
    }

    fn pack(values: &[Value], template: &str) -> Result<Packed, PackError> {
        packer().pack(values, template)
    }

    #[test]
    fn cursor_is_shared_between_directives() {
        let values: Vec<Value> = (1..=4).map(Value::from).collect();
        let packed = pack(&values, "C2 n*").unwrap();
        assert_eq!(packed.as_bytes(), &[1, 2, 0, 3, 0, 4]);
    }

    #[test]
    fn star_with_nothing_left_packs_nothing() {
        let packed = pack(&[Value::from(1)], "C N*").unwrap();
        assert_eq!(packed.as_bytes(), &[1]);
        assert_eq!(packed.encoding(), Encoding::Binary);
    }

    #[test]
    fn zero_count_consumes_nothing() {
        let packed = pack(&[Value::from(7)], "N0 C").unwrap();
        assert_eq!(packed.as_bytes(), &[7]);
    }

    #[test]
    fn text_consumes_one_value_regardless_of_count() {
        let values = [Value::from("abc"), Value::from("de")];
        let packed = pack(&values, "a* A3").unwrap();
        assert_eq!(packed.as_bytes(), b"abcde ");
    }

    #[test]
    fn position_directives() {
        assert_eq!(pack(&[], "x2 X").unwrap().as_bytes(), &[0]);
        assert_eq!(pack(&[], "x* X*").unwrap().as_bytes(), b"");
        assert_eq!(pack(&[], "@3").unwrap().as_bytes(), &[0, 0, 0]);
        assert_eq!(pack(&[], "@").unwrap().as_bytes(), &[0]);
        assert_eq!(
            pack(&[Value::from("abcdef")], "a* @2").unwrap().as_bytes(),
            b"ab"
        );
    }

    #[test]
    fn backing_up_past_the_start_fails() {
        let err = pack(&[Value::from(1)], "C X2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferRange);
        assert_eq!(err.to_string(), "X outside of the string");

        let err = pack(&[], "X0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferRange);
    }

    #[test]
    fn pointers_need_a_value_first() {
        let err = pack(&[], "P").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConsumption);

        let err = pack(&[Value::Nil], "p").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }

    #[test]
    fn armor_labels() {
        let text = [Value::from("hi")];
        assert_eq!(pack(&text, "m").unwrap().encoding(), Encoding::UsAscii);
        assert_eq!(pack(&text, "M").unwrap().encoding(), Encoding::UsAscii);
        assert_eq!(pack(&text, "u").unwrap().encoding(), Encoding::Binary);
        assert_eq!(pack(&text, "a").unwrap().encoding(), Encoding::Binary);
    }

    #[test]
    fn floats_do_not_touch_the_label() {
        let values = [Value::from("hi"), Value::from(1.0)];
        assert_eq!(pack(&values, "m g").unwrap().encoding(), Encoding::UsAscii);
    }

    #[test]
    fn native_size_modifier_follows_layout() {
        let values = [Value::from(-1)];
        assert_eq!(pack(&values, "l").unwrap().len(), 4);
        assert_eq!(pack(&values, "l_").unwrap().len(), 8);

        let windows = Packer::with_config(PackConfig::with_layout(NativeLayout::LLP64_LE));
        assert_eq!(windows.pack(&values, "l!").unwrap().len(), 4);
        assert_eq!(windows.pack(&values, "j").unwrap().len(), 8);
    }

    #[test]
    fn packed_conversions() {
        let packed = pack(&[Value::from(65)], "C").unwrap();
        assert_eq!(packed.as_ref(), b"A");
        assert!(!packed.is_empty());
        assert_eq!(Vec::from(packed), b"A".to_vec());
    }
}
