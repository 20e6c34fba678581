//! Convenience re-exports for common usage

pub use crate::pack;
pub use crate::{Encoding, PackConfig, Packed, Packer, Value};
pub use crate::{ErrorKind, PackError};

// Host objects
pub use crate::HostObject;

// Layout
pub use crate::{Endian, NativeLayout, NativeWidth};
