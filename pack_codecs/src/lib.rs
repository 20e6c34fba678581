//! # pack_codecs
//!
//! Per-directive encoders: fixed-width and UTF-8 integers, IEEE-754
//! floats, and the text sub-formats (padded strings, bit and hex strings,
//! base64, uuencode, quoted-printable).
//!
//! Each family has a format type that is resolved once from a directive
//! letter and then writes any number of values into a [`PackBuffer`].
//!
//! ```rust
//! use pack_codecs::{FloatFormat, IntFormat, NativeLayout, PackBuffer, TextFormat};
//! use pack_template::{Count, Modifiers};
//!
//! let layout = NativeLayout::LP64_LE;
//! let mut buffer = PackBuffer::new();
//!
//! let int = IntFormat::resolve('n', Modifiers::default(), &layout).unwrap();
//! int.pack_into(0x1234, &mut buffer).unwrap();
//!
//! let float = FloatFormat::resolve('g', &layout).unwrap();
//! float.pack_into(1.0, &mut buffer);
//!
//! let text = TextFormat::resolve('a').unwrap();
//! text.pack_into(b"hi", Count::Exact(3), &mut buffer).unwrap();
//!
//! assert_eq!(
//!     buffer.as_slice(),
//!     &[0x12, 0x34, 0x3f, 0x80, 0x00, 0x00, b'h', b'i', 0x00]
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod float;
pub mod integer;
pub mod layout;
pub mod text;

pub use error::CodecError;
pub use float::{FloatFormat, Precision};
pub use integer::IntFormat;
pub use layout::{NativeLayout, NativeWidth};
pub use pack_buffer::PackBuffer;
pub use pack_template::Endian;
pub use text::TextFormat;
