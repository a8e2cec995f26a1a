//! Byte inputs, where every byte is one character

use std::fmt::{self, Display};
use std::ops::Deref;
use std::sync::Arc;

/// The character a byte stands for: its unsigned value, so `0xFF` is U+00FF.
#[inline]
pub fn byte_char(b: u8) -> char {
    char::from(b)
}

/// Write bytes as the characters they stand for.
pub(crate) fn write_bytes(fmt: &mut fmt::Formatter, bytes: &[u8]) -> fmt::Result {
    use std::fmt::Write;
    for &b in bytes {
        fmt.write_char(byte_char(b))?;
    }
    Ok(())
}

/// A shared, owned byte buffer.
///
/// Slicing a buffer hands out another view of the same allocation; clones are
/// cheap and nothing is copied after construction.
#[derive(Clone, Debug)]
pub struct ByteBuffer {
    buffer: Arc<[u8]>,
    start: usize,
    end: usize,
}

impl ByteBuffer {
    /// A buffer covering the whole of `buffer`.
    pub fn new(buffer: Arc<[u8]>) -> Self {
        let end = buffer.len();
        ByteBuffer { buffer, start: 0, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The bytes in `[lo, hi)` of this buffer, sharing its storage.
    pub fn slice(&self, lo: usize, hi: usize) -> Self {
        assert!(
            lo <= hi && hi <= self.len(),
            "range {}..{} out of range for length {}",
            lo,
            hi,
            self.len()
        );
        ByteBuffer {
            buffer: Arc::clone(&self.buffer),
            start: self.start + lo,
            end: self.start + hi,
        }
    }

    /// The underlying shared allocation.
    pub fn buffer(&self) -> Arc<[u8]> {
        Arc::clone(&self.buffer)
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buffer[self.start..self.end]
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(v: Vec<u8>) -> Self {
        ByteBuffer::new(v.into())
    }
}

impl From<Arc<[u8]>> for ByteBuffer {
    fn from(buffer: Arc<[u8]>) -> Self {
        ByteBuffer::new(buffer)
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for ByteBuffer {}

impl Display for ByteBuffer {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write_bytes(fmt, self)
    }
}
