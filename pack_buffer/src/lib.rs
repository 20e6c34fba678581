//! # pack_buffer
//!
//! The growable byte buffer a pack call writes into.
//!
//! ```rust
//! use pack_buffer::PackBuffer;
//!
//! let mut buffer = PackBuffer::new();
//! buffer.push(0x41);
//! buffer.extend_pod(&0x0102u16.to_be());
//! buffer.seek(5);
//! assert_eq!(buffer.as_slice(), &[0x41, 0x01, 0x02, 0x00, 0x00]);
//!
//! buffer.drop_back(2).unwrap();
//! assert_eq!(buffer.len(), 3);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod buffer;
pub mod error;

pub use buffer::PackBuffer;
pub use error::BufferError;
