use crate::BufferError;
use alloc::vec::Vec;
use bytemuck::Pod;

/// Growable output buffer for a single pack call.
///
/// Unlike a plain append-only sink, the length of a `PackBuffer` is not
/// monotonic: [`drop_back`](Self::drop_back) and [`seek`](Self::seek) may
/// shrink it again.
///
/// # Examples
///
/// ```
/// use pack_buffer::PackBuffer;
///
/// let mut buffer = PackBuffer::with_capacity(16);
/// buffer.extend_from_slice(b"ab");
/// buffer.pad(3, 0);
/// assert_eq!(buffer.as_slice(), b"ab\0\0\0");
///
/// buffer.seek(1);
/// assert_eq!(buffer.into_vec(), b"a".to_vec());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackBuffer {
    bytes: Vec<u8>,
}

impl PackBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        PackBuffer { bytes: Vec::new() }
    }

    /// Creates an empty buffer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        PackBuffer {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Appends a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Appends a run of bytes.
    #[inline]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Appends the in-memory representation of a plain-old-data value.
    ///
    /// The bytes are written in host order; callers that need a fixed
    /// order convert first (`to_be`, `to_le`).
    ///
    /// ```
    /// use pack_buffer::PackBuffer;
    ///
    /// let mut buffer = PackBuffer::new();
    /// buffer.extend_pod(&1u32.to_le());
    /// assert_eq!(buffer.as_slice(), &[1, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn extend_pod<T: Pod>(&mut self, value: &T) {
        self.bytes.extend_from_slice(bytemuck::bytes_of(value));
    }

    /// Appends `count` copies of `byte`.
    pub fn pad(&mut self, count: usize, byte: u8) {
        let new_len = self.bytes.len() + count;
        self.bytes.resize(new_len, byte);
    }

    /// Shortens the buffer to `len` bytes. Has no effect if the buffer is
    /// already that short.
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    /// Removes the last `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Underflow`] if the buffer is empty or holds
    /// fewer than `count` bytes. An empty buffer is rejected even for a
    /// zero count.
    ///
    /// ```
    /// use pack_buffer::{BufferError, PackBuffer};
    ///
    /// let mut buffer = PackBuffer::new();
    /// assert_eq!(
    ///     buffer.drop_back(0),
    ///     Err(BufferError::Underflow { requested: 0, len: 0 })
    /// );
    /// ```
    pub fn drop_back(&mut self, count: usize) -> Result<(), BufferError> {
        let len = self.bytes.len();
        if len == 0 || len < count {
            return Err(BufferError::Underflow {
                requested: count,
                len,
            });
        }
        self.bytes.truncate(len - count);
        Ok(())
    }

    /// Moves the end of the buffer to the absolute `position`, null-padding
    /// forward or truncating backward as needed.
    pub fn seek(&mut self, position: usize) {
        if self.bytes.len() < position {
            self.bytes.resize(position, 0);
        } else {
            self.bytes.truncate(position);
        }
    }

    /// Consumes the buffer, returning the packed bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for PackBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<PackBuffer> for Vec<u8> {
    fn from(buffer: PackBuffer) -> Self {
        buffer.bytes
    }
}
