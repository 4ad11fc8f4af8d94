//! Read-only View
//!
//! A `View` is the triple (backing storage, start, length). It borrows the
//! storage, so the compiler guarantees it never outlives it, and every
//! constructor checks `start + length <= storage.len()` up front. After
//! construction, reading through the view cannot leave the checked range.

use std::fmt;
use std::ops::Index;
use std::slice;

use crate::error::ViewError;

/// Check that `[offset, offset + length)` fits inside `bound`, returning the end.
///
/// Overflow of `offset + length` counts as out of range.
#[inline]
pub(crate) fn checked_end(offset: usize, length: usize, bound: usize) -> Result<usize, ViewError> {
    match offset.checked_add(length) {
        Some(end) if end <= bound => Ok(end),
        _ => Err(ViewError::out_of_range(offset, length, bound)),
    }
}

/// Non-owning, read-only reference to a contiguous range of `storage`.
pub struct View<'a, T> {
    /// Whole backing sequence (not just the viewed range)
    storage: &'a [T],
    /// Offset of the first viewed element in `storage`
    start: usize,
    /// Number of viewed elements
    len: usize,
}

impl<'a, T> Clone for View<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for View<'a, T> {}

impl<'a, T> View<'a, T> {
    /// Full-range view over `storage`
    pub const fn new(storage: &'a [T]) -> Self {
        Self {
            storage,
            start: 0,
            len: storage.len(),
        }
    }

    /// Caller has already validated `start + len <= storage.len()`
    pub(super) const fn from_checked(storage: &'a [T], start: usize, len: usize) -> Self {
        Self {
            storage,
            start,
            len,
        }
    }

    /// View over `storage[start..start + length]`.
    ///
    /// Fails with [`ViewError::OutOfRange`] if the range does not fit.
    pub fn from_storage(storage: &'a [T], start: usize, length: usize) -> Result<Self, ViewError> {
        checked_end(start, length, storage.len())?;
        Ok(Self {
            storage,
            start,
            len: length,
        })
    }

    /// Narrower view; `start` is relative to this view's first element.
    ///
    /// The result references the same backing storage, so slicing a slice
    /// lands on the same elements as the equivalent absolute range.
    pub fn slice(&self, start: usize, length: usize) -> Result<View<'a, T>, ViewError> {
        checked_end(start, length, self.len)?;
        Ok(View {
            storage: self.storage,
            start: self.start + start,
            len: length,
        })
    }

    /// Element at logical position `index`
    pub fn get(&self, index: usize) -> Result<&'a T, ViewError> {
        if index >= self.len {
            return Err(ViewError::out_of_range(index, 1, self.len));
        }
        Ok(&self.storage[self.start + index])
    }

    /// Split into `[0, mid)` and `[mid, len)`
    pub fn split_at(&self, mid: usize) -> Result<(View<'a, T>, View<'a, T>), ViewError> {
        let head = self.slice(0, mid)?;
        let tail = self.slice(mid, self.len - mid)?;
        Ok((head, tail))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of this view within its backing storage
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the whole backing storage
    #[inline]
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    /// The viewed elements as a plain slice, borrowed from the storage
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.storage[self.start..self.start + self.len]
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a> View<'a, u8> {
    /// Byte view over `text[start..start + length]`
    pub fn from_text(text: &'a str, start: usize, length: usize) -> Result<Self, ViewError> {
        Self::from_storage(text.as_bytes(), start, length)
    }

    /// Decode the viewed bytes as UTF-8 without copying
    pub fn to_str(&self) -> Result<&'a str, ViewError> {
        std::str::from_utf8(self.as_slice()).map_err(|e| ViewError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })
    }
}

impl<'a, T> Index<usize> for View<'a, T> {
    type Output = T;

    /// Panics when `index >= len`, like slice indexing; use [`View::get`] to
    /// get an error instead.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<'a, T> From<&'a [T]> for View<'a, T> {
    fn from(storage: &'a [T]) -> Self {
        View::new(storage)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for View<'a, T> {
    fn from(storage: &'a [T; N]) -> Self {
        View::new(storage)
    }
}

impl<'a> From<&'a str> for View<'a, u8> {
    fn from(text: &'a str) -> Self {
        View::new(text.as_bytes())
    }
}

impl<'a, T> IntoIterator for View<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for View<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}
