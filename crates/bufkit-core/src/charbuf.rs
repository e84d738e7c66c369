//! Fixed-capacity, NUL-terminated character buffers.
//!
//! [`CharBuf<N>`] owns exactly `N` bytes, one of which is always reserved
//! for the terminator, so at most `N - 1` content bytes fit. The content
//! length is tracked explicitly and every write is bounds-checked: a write
//! either fits, is truncated to the remaining room, or is rejected with
//! [`BufError::CapacityExceeded`]. Nothing is ever written past byte `N`.
//!
//! Bytes past the terminator are kept zeroed, so two buffers with the same
//! content compare equal regardless of how they were built.

use std::borrow::Cow;
use std::fmt;

use crate::error::BufError;

/// Length of a C-style string view: bytes before the first NUL, or the
/// whole slice when it contains none.
#[inline]
pub fn c_str_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// A NUL-terminated byte string stored inline in `N` bytes.
///
/// Invariants:
/// - `len <= N - 1`
/// - `bytes[len] == 0`, and every byte after it is also zero
/// - no NUL appears in `bytes[..len]`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> CharBuf<N> {
    /// Maximum content length in bytes (the terminator is not counted).
    pub const CAPACITY: usize = {
        assert!(N > 0, "CharBuf needs room for at least the terminator");
        N - 1
    };

    /// Create an empty buffer.
    pub const fn new() -> Self {
        let _ = Self::CAPACITY;
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Build a buffer holding `content`.
    ///
    /// # Errors
    ///
    /// [`BufError::InteriorNul`] if `content` contains a NUL, and
    /// [`BufError::CapacityExceeded`] if it is longer than [`Self::CAPACITY`].
    pub fn from_bytes(content: &[u8]) -> Result<Self, BufError> {
        let mut buf = Self::new();
        buf.push_bytes(content)?;
        Ok(buf)
    }

    /// Build a buffer from `content`, keeping only what fits.
    ///
    /// Content stops at the first NUL, if any.
    pub fn from_bytes_truncating(content: &[u8]) -> Self {
        let mut buf = Self::new();
        buf.push_bytes_truncating(content);
        buf
    }

    /// Adopt a raw NUL-terminated array, e.g. one received over the C ABI.
    ///
    /// Bytes after the first terminator are discarded.
    ///
    /// # Errors
    ///
    /// [`BufError::MissingTerminator`] if `raw` contains no NUL.
    pub fn from_nul_terminated(raw: [u8; N]) -> Result<Self, BufError> {
        let len = c_str_len(&raw);
        if len == N {
            return Err(BufError::MissingTerminator { len: N });
        }
        let mut buf = Self::new();
        buf.bytes[..len].copy_from_slice(&raw[..len]);
        buf.len = len;
        Ok(buf)
    }

    /// The full `N`-byte backing array, terminator and zero padding included.
    pub fn to_nul_terminated(&self) -> [u8; N] {
        self.bytes
    }

    /// Content length in bytes, excluding the terminator.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum content length. Same as [`Self::CAPACITY`].
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Content bytes still available before the buffer is full.
    pub fn remaining(&self) -> usize {
        Self::CAPACITY - self.len
    }

    /// Content bytes, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Content bytes followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Content as `&str`, or `None` if it is not valid UTF-8.
    ///
    /// Byte-level truncation can split a multi-byte character, so this
    /// is not guaranteed to succeed even for buffers built from `&str`.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    /// Content as text, with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Append `suffix` in full, or leave the buffer untouched.
    ///
    /// # Errors
    ///
    /// [`BufError::InteriorNul`] if `suffix` contains a NUL, and
    /// [`BufError::CapacityExceeded`] if the result would not fit.
    pub fn push_bytes(&mut self, suffix: &[u8]) -> Result<(), BufError> {
        if let Some(position) = suffix.iter().position(|&b| b == 0) {
            return Err(BufError::InteriorNul { position });
        }
        let requested = self.len + suffix.len();
        if requested > Self::CAPACITY {
            return Err(BufError::CapacityExceeded {
                requested,
                capacity: Self::CAPACITY,
            });
        }
        self.bytes[self.len..requested].copy_from_slice(suffix);
        self.len = requested;
        Ok(())
    }

    /// Append as much of `suffix` as fits and return the number of bytes
    /// written. The suffix is treated as a C string: it ends at its first
    /// NUL, if any.
    pub fn push_bytes_truncating(&mut self, suffix: &[u8]) -> usize {
        let suffix = &suffix[..c_str_len(suffix)];
        let n = suffix.len().min(self.remaining());
        self.bytes[self.len..self.len + n].copy_from_slice(&suffix[..n]);
        self.len += n;
        n
    }

    /// Append `suffix` in full, or leave the buffer untouched.
    ///
    /// See [`push_bytes`](Self::push_bytes).
    pub fn push_str(&mut self, suffix: &str) -> Result<(), BufError> {
        self.push_bytes(suffix.as_bytes())
    }

    /// Append as much of `suffix` as fits; returns bytes written.
    pub fn push_str_truncating(&mut self, suffix: &str) -> usize {
        self.push_bytes_truncating(suffix.as_bytes())
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.bytes = [0; N];
        self.len = 0;
    }

    /// Reverse the content in place. The terminator stays put.
    pub fn reverse(&mut self) {
        self.bytes[..self.len].reverse();
    }

    /// Number of content bytes equal to `c`.
    ///
    /// Searching for `0` always yields zero; the terminator is not content.
    pub fn count_matches(&self, c: u8) -> usize {
        self.as_bytes().iter().filter(|&&b| b == c).count()
    }

    /// Run `f` over the content bytes, then restore the invariants.
    ///
    /// If `f` writes a NUL into the content, the string ends there and
    /// everything after it is zeroed. The terminator itself is never
    /// handed to `f`.
    pub fn with_content_mut<R>(&mut self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let out = f(&mut self.bytes[..self.len]);
        let len = c_str_len(&self.bytes[..self.len]);
        self.bytes[len..].fill(0);
        self.len = len;
        out
    }
}

impl<const N: usize> Default for CharBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<&str> for CharBuf<N> {
    type Error = BufError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<const N: usize> PartialEq<str> for CharBuf<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&str> for CharBuf<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> fmt::Debug for CharBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharBuf<{N}>({:?})", self.to_string_lossy())
    }
}

impl<const N: usize> fmt::Display for CharBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
