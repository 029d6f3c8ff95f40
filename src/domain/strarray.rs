// ============================================================================
// String Array
// Packed sequence of NUL-terminated strings in one contiguous buffer
// ============================================================================

use std::collections::TryReserveError;
use std::fmt;
use std::ops::Range;

/// Allocation granularity of the packed buffer.
pub const STRARRAY_BLOCKSIZE: usize = 64;

/// Round `len` up to the next multiple of [`STRARRAY_BLOCKSIZE`].
#[inline]
pub const fn block_size(len: usize) -> usize {
    (len + STRARRAY_BLOCKSIZE - 1) & !(STRARRAY_BLOCKSIZE - 1)
}

/// Errors reported by [`StrArray`] mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrArrayError {
    /// The packed buffer could not grow
    AllocationFailed,
    /// The string contains a NUL byte and would split into two elements
    InteriorNul,
}

impl fmt::Display for StrArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrArrayError::AllocationFailed => write!(f, "string array allocation failed"),
            StrArrayError::InteriorNul => {
                write!(f, "string contains a NUL byte and cannot be stored")
            },
        }
    }
}

impl std::error::Error for StrArrayError {}

impl From<TryReserveError> for StrArrayError {
    fn from(_: TryReserveError) -> Self {
        StrArrayError::AllocationFailed
    }
}

/// Several strings stored back to back, each followed by a NUL byte.
///
/// The layout matches what configuration code hands around as a single
/// allocation: `"eth0\0eth1\0"`. Capacity grows in blocks of
/// [`STRARRAY_BLOCKSIZE`] bytes.
///
/// Ordering compares the packed bytes, so arrays sort by their first
/// differing element and an empty array sorts first.
///
/// # Example
/// ```
/// use magstr::domain::StrArray;
///
/// let mut ifaces = StrArray::new();
/// ifaces.append("eth0").unwrap();
/// ifaces.append("wlan0").unwrap();
/// ifaces.prepend("lo").unwrap();
///
/// assert_eq!(ifaces.count(), 3);
/// assert_eq!(ifaces.get(1), Some("eth0"));
/// assert_eq!(ifaces.as_bytes(), b"lo\0eth0\0wlan0\0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrArray {
    value: String,
}

impl StrArray {
    pub const fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Build an array from a sequence of strings.
    pub fn from_strs<I, S>(strings: I) -> Result<Self, StrArrayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut array = Self::new();
        for s in strings {
            array.append(s.as_ref())?;
        }
        Ok(array)
    }

    /// Packed length in bytes, terminators included.
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.value.capacity()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// Number of strings.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> std::str::SplitTerminator<'_, char> {
        self.value.split_terminator('\0')
    }

    /// String at position `idx`.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.iter().nth(idx)
    }

    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<&str> {
        self.iter().next_back()
    }

    /// Append a string at the end.
    pub fn append(&mut self, s: &str) -> Result<(), StrArrayError> {
        self.grow_for(s)?;
        self.value.push_str(s);
        self.value.push('\0');
        Ok(())
    }

    /// Put a string in front of all others.
    pub fn prepend(&mut self, s: &str) -> Result<(), StrArrayError> {
        self.grow_for(s)?;
        self.value.insert(0, '\0');
        self.value.insert_str(0, s);
        Ok(())
    }

    /// Remove the string at `idx` and return it.
    ///
    /// Removing the only element releases the buffer. With `resize` the
    /// allocation is shrunk to the block-rounded length afterwards.
    pub fn remove(&mut self, idx: usize, resize: bool) -> Option<String> {
        let span = self.span(idx)?;
        let removed = self.value[span.clone()].to_owned();

        if span.len() + 1 == self.value.len() {
            self.clear();
            return Some(removed);
        }

        self.value.drain(span.start..=span.end);
        if resize {
            self.value.shrink_to(block_size(self.value.len()));
        }
        Some(removed)
    }

    /// Overwrite this array with a copy of `other`.
    pub fn copy_from(&mut self, other: &StrArray) -> Result<(), StrArrayError> {
        if other.is_empty() {
            self.clear();
            return Ok(());
        }

        self.value.clear();
        self.reserve_block(other.len())?;
        self.value.push_str(&other.value);
        Ok(())
    }

    /// Drop all strings and release the buffer.
    pub fn clear(&mut self) {
        self.value = String::new();
    }

    fn grow_for(&mut self, s: &str) -> Result<(), StrArrayError> {
        if s.contains('\0') {
            return Err(StrArrayError::InteriorNul);
        }
        self.reserve_block(self.value.len() + s.len() + 1)
    }

    fn reserve_block(&mut self, new_len: usize) -> Result<(), StrArrayError> {
        let target = block_size(new_len);
        if target <= self.value.capacity() {
            return Ok(());
        }

        self.value
            .try_reserve_exact(target - self.value.len())
            .map_err(|err| {
                tracing::trace!("string array cannot grow to {} bytes: {}", target, err);
                StrArrayError::from(err)
            })
    }

    /// Byte range of element `idx`, terminator excluded.
    fn span(&self, idx: usize) -> Option<Range<usize>> {
        let mut start = 0;
        for (i, s) in self.iter().enumerate() {
            if i == idx {
                return Some(start..start + s.len());
            }
            start += s.len() + 1;
        }
        None
    }
}

impl<'a> IntoIterator for &'a StrArray {
    type Item = &'a str;
    type IntoIter = std::str::SplitTerminator<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
