//! Packer configuration with a fluent builder.

use pack_codecs::{Endian, NativeLayout, NativeWidth};

/// Settings shared by every pack call of a [`Packer`](crate::Packer).
///
/// The default declares the layout of the compiling target. Use the
/// builder to pack for a different platform.
///
/// ```
/// use array_pack::{Endian, PackConfig, Packer, Value};
///
/// let config = PackConfig::builder().endian(Endian::Big).build();
/// let packed = Packer::with_config(config).pack(&[Value::from(1)], "S").unwrap();
/// assert_eq!(packed.as_bytes(), &[0, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackConfig {
    layout: NativeLayout,
}

impl PackConfig {
    pub fn builder() -> PackConfigBuilder {
        PackConfigBuilder::new()
    }

    pub fn with_layout(layout: NativeLayout) -> Self {
        PackConfig { layout }
    }

    /// The declared native layout.
    pub fn layout(&self) -> &NativeLayout {
        &self.layout
    }
}

/// Builder for [`PackConfig`]. Starts from the host layout and overrides
/// one field at a time.
#[derive(Debug, Clone, Copy)]
pub struct PackConfigBuilder {
    layout: NativeLayout,
}

impl PackConfigBuilder {
    pub fn new() -> Self {
        Self {
            layout: NativeLayout::host(),
        }
    }

    /// Replaces the whole layout.
    pub fn layout(mut self, layout: NativeLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn endian(mut self, endian: Endian) -> Self {
        self.layout.endian = endian;
        self
    }

    /// Width of `l_` and `L_`.
    pub fn long_width(mut self, width: NativeWidth) -> Self {
        self.layout.long_width = width;
        self
    }

    /// Width of `j` and `J`.
    pub fn word_width(mut self, width: NativeWidth) -> Self {
        self.layout.word_width = width;
        self
    }

    pub fn build(self) -> PackConfig {
        PackConfig::with_layout(self.layout)
    }
}

impl Default for PackConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_single_fields() {
        let config = PackConfig::builder()
            .layout(NativeLayout::LP64_LE)
            .endian(Endian::Big)
            .long_width(NativeWidth::Bits32)
            .build();

        assert_eq!(config.layout().endian, Endian::Big);
        assert_eq!(config.layout().long_width, NativeWidth::Bits32);
        assert_eq!(config.layout().word_width, NativeWidth::Bits64);
    }

    #[test]
    fn default_is_host() {
        assert_eq!(PackConfig::default().layout(), &NativeLayout::host());
        assert_eq!(PackConfigBuilder::default().build(), PackConfig::default());
    }

    #[test]
    fn with_layout() {
        let config = PackConfig::with_layout(NativeLayout::ILP32_LE);
        assert_eq!(config.layout().word_width.bytes(), 4);
    }
}
