//! Owned growable byte sequence for assembling encoded output.

use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::codec::{Symbol, encode_codepoint};
use crate::error::Utf8Error;

/// Buffers never start smaller than this.
const MIN_RESERVE: usize = 16;

/// An owned, growable byte buffer.
///
/// The codec itself never allocates; this is the companion type for callers
/// that assemble encoded output of unknown size — append raw bytes, whole
/// [`Symbol`]s, or codepoints encoded on the fly. Growth is amortized
/// doubling with a 16-byte floor.
///
/// The contents are *bytes*, not guaranteed-valid UTF-8; `Debug` prints
/// them as a byte string so malformed data stays legible.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteBuf {
    data: Vec<u8>,
}

impl ByteBuf {
    /// Creates an empty buffer with the minimum reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_RESERVE)
    }

    /// Creates an empty buffer reserving at least `capacity` bytes (never
    /// less than the 16-byte floor).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity.max(MIN_RESERVE)),
        }
    }

    /// Creates a buffer holding a copy of `bytes`, reserving the next
    /// power of two above its length.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::with_capacity(bytes.len().next_power_of_two());
        buf.data.extend_from_slice(bytes);
        buf
    }

    /// Encodes every codepoint into a fresh buffer, back to back.
    ///
    /// The dynamically sized complement of
    /// [`encode_many`](crate::encode_many): capacity grows as needed, so
    /// the only way to stop short is an invalid input.
    ///
    /// # Errors
    ///
    /// [`Utf8Error::InvalidCodepoint`] if a codepoint is out of range.
    pub fn from_codepoints(codepoints: &[u32]) -> Result<Self, Utf8Error> {
        let mut buf = Self::with_capacity(codepoints.len());
        for &codepoint in codepoints {
            buf.push_codepoint(codepoint)?;
        }
        Ok(buf)
    }

    /// Appends one byte.
    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Appends an already-encoded symbol.
    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.data.extend_from_slice(symbol.as_bytes());
    }

    /// Encodes `codepoint` and appends its symbol, returning the width
    /// appended.
    ///
    /// # Errors
    ///
    /// [`Utf8Error::InvalidCodepoint`] if `codepoint` is out of range; the
    /// buffer is left untouched.
    pub fn push_codepoint(&mut self, codepoint: u32) -> Result<usize, Utf8Error> {
        let symbol = encode_codepoint(codepoint)?;
        self.push_symbol(symbol);
        Ok(symbol.width())
    }

    /// The buffered bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of buffered bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes reserved, including the unused tail.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops the contents, keeping the reservation.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for ByteBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Deref for ByteBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<&[u8]> for ByteBuf {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl Extend<u8> for ByteBuf {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl fmt::Debug for ByteBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteBuf")
            .field(&BStr::new(&self.data))
            .finish()
    }
}
