// ============================================================================
// Bounded String Buffer
// Fixed-capacity string with truncating copy and append
// ============================================================================

use arrayvec::ArrayString;
use std::fmt;
use std::ops::Deref;

/// Longest prefix of `s` that is at most `max` bytes and ends on a char boundary.
pub fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Stack string buffer of `N` bytes.
///
/// One byte of the capacity is reserved for a C terminator, so the buffer holds
/// at most `N - 1` bytes of text. Copy and append never fail: input that does
/// not fit is cut at the last char boundary that does.
///
/// # Example
/// ```
/// use magstr::text::BoundedStr;
///
/// let mut name = BoundedStr::<8>::new();
/// name.copy_from("eth0");
/// name.append(".100");
/// assert_eq!(name.as_str(), "eth0.10");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedStr<const N: usize> {
    buf: ArrayString<N>,
}

impl<const N: usize> BoundedStr<N> {
    /// Total capacity including the reserved terminator byte.
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            buf: ArrayString::new_const(),
        }
    }

    /// Maximum text length in bytes.
    #[inline]
    pub const fn limit(&self) -> usize {
        N.saturating_sub(1)
    }

    /// Bytes that can still be appended.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit().saturating_sub(self.buf.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Replace the content with `src`, truncated to the capacity.
    pub fn copy_from(&mut self, src: &str) -> &str {
        self.buf.clear();
        self.append(src)
    }

    /// Append `src`, truncated to the remaining capacity.
    ///
    /// A full buffer stays unchanged.
    pub fn append(&mut self, src: &str) -> &str {
        let part = truncate_to_boundary(src, self.remaining());
        if !part.is_empty() {
            self.buf.push_str(part);
        }
        self.as_str()
    }

    /// Push a single character the caller has already made room for.
    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        debug_assert!(c.len_utf8() <= self.remaining());
        self.buf.push(c);
    }

    #[inline]
    pub(crate) fn truncate(&mut self, new_len: usize) {
        self.buf.truncate(new_len);
    }
}

impl<const N: usize> Deref for BoundedStr<N> {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedStr<N> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
