//! Writable View
//!
//! Same range contract as [`View`], over exclusively borrowed storage.
//! Typical use is a scratch buffer that lives on the stack of the calling
//! function: the exclusive borrow keeps the buffer from being read or
//! moved elsewhere while the view writes to it.

use std::fmt;

use super::view::{checked_end, View};
use crate::error::ViewError;

/// Non-owning, writable reference to a contiguous range of `storage`.
pub struct ViewMut<'a, T> {
    storage: &'a mut [T],
    start: usize,
    len: usize,
}

impl<'a, T> ViewMut<'a, T> {
    /// Full-range writable view
    pub fn new(storage: &'a mut [T]) -> Self {
        let len = storage.len();
        Self {
            storage,
            start: 0,
            len,
        }
    }

    /// Writable view over `storage[start..start + length]`
    pub fn from_storage(storage: &'a mut [T], start: usize, length: usize) -> Result<Self, ViewError> {
        checked_end(start, length, storage.len())?;
        Ok(Self {
            storage,
            start,
            len: length,
        })
    }

    /// Narrower writable view, reborrowing this one
    pub fn slice_mut(&mut self, start: usize, length: usize) -> Result<ViewMut<'_, T>, ViewError> {
        checked_end(start, length, self.len)?;
        Ok(ViewMut {
            storage: &mut *self.storage,
            start: self.start + start,
            len: length,
        })
    }

    pub fn get(&self, index: usize) -> Result<&T, ViewError> {
        if index >= self.len {
            return Err(ViewError::out_of_range(index, 1, self.len));
        }
        Ok(&self.storage[self.start + index])
    }

    /// Overwrite the element at `index`
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ViewError> {
        if index >= self.len {
            return Err(ViewError::out_of_range(index, 1, self.len));
        }
        self.storage[self.start + index] = value;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.start..self.start + self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[self.start..self.start + self.len]
    }

    /// Read-only view of the same range for as long as this borrow lasts
    pub fn as_view(&self) -> View<'_, T> {
        // Over the full storage so `start()` stays absolute
        View::from_checked(&*self.storage, self.start, self.len)
    }
}

impl<'a, T: Clone> ViewMut<'a, T> {
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<'a, T> From<&'a mut [T]> for ViewMut<'a, T> {
    fn from(storage: &'a mut [T]) -> Self {
        ViewMut::new(storage)
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for ViewMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewMut")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}
