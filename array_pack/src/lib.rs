//! # array_pack
//!
//! Template driven binary packing: turn a sequence of values into one byte
//! string whose layout is described by a compact directive template, the
//! way scripting languages build wire formats and file headers.
//!
//! ## Directives
//!
//! | family | letters | consumes |
//! |---|---|---|
//! | text | `A a Z B b H h M m u` (`P p` rejected) | one value |
//! | integer | `C c S s n v I i L l N V J j U` | `count` values, all with `*` |
//! | float | `D d F f E e G g` | `count` values, all with `*` |
//! | position | `x X @` | nothing |
//!
//! `s S i I l L j J` accept `_` / `!` (native size) and `<` / `>` (byte
//! order). Whitespace separates units and `#` starts a comment.
//!
//! ## Quick Start
//!
//! ```rust
//! use array_pack::prelude::*;
//!
//! let values = [Value::from(0xCAFE), Value::from("id"), Value::from(1.5)];
//! let packed = pack(&values, "n a4 g").unwrap();
//!
//! assert_eq!(
//!     packed.as_bytes(),
//!     &[0xCA, 0xFE, b'i', b'd', 0, 0, 0x3F, 0xC0, 0, 0]
//! );
//! assert_eq!(packed.encoding(), Encoding::Binary);
//! ```
//!
//! Native directives (`S I L J D F` and friends) follow a declared
//! [`NativeLayout`] instead of the host, so output can be pinned:
//!
//! ```rust
//! use array_pack::{NativeLayout, PackConfig, Packer, Value};
//!
//! let packer = Packer::with_config(PackConfig::with_layout(NativeLayout::LP64_BE));
//! let packed = packer.pack(&[Value::from(1)], "J").unwrap();
//! assert_eq!(packed.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 1]);
//! ```

pub mod coerce;
pub mod config;
pub mod encoding;
pub mod error;
pub mod packer;
pub mod prelude;
pub mod value;

pub use crate::coerce::{StringCapability, coerce_float, coerce_integer, coerce_string};
pub use crate::config::{PackConfig, PackConfigBuilder};
pub use crate::encoding::Encoding;
pub use crate::error::{ErrorKind, PackError};
pub use crate::packer::{Packed, Packer};
pub use crate::value::{HostObject, Value};

// Re-export the configuration vocabulary of the lower crates
pub use pack_codecs::{Endian, NativeLayout, NativeWidth};

/// Packs `values` according to `template` for the host layout.
///
/// Shorthand for `Packer::new().pack(values, template)`.
pub fn pack(values: &[Value], template: &str) -> Result<Packed, PackError> {
    Packer::new().pack(values, template)
}
