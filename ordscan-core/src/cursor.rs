//! Forward cursors and end markers

use std::fmt;

/// A position in a sequence that can only move forward.
///
/// Cloning a cursor must yield an independent position over the same
/// elements, so a sequence can be walked by two cursors at once.
pub trait ForwardCursor: Clone {
    /// Value produced by reading the current element
    type Item;

    /// Read the element under the cursor.
    ///
    /// Must not be called on a cursor that its sentinel reports as the end.
    fn read(&self) -> Self::Item;

    /// Move to the next element.
    fn advance(&mut self);
}

/// End marker for a cursor type `C`.
///
/// The marker does not have to be a cursor itself.
pub trait Sentinel<C> {
    /// Check whether `cursor` has reached the end of the sequence
    fn is_end(&self, cursor: &C) -> bool;
}

/// Cursor over a slice.
///
/// The end of a slice is another `SliceCursor` positioned one past the last
/// element (see [`SliceCursor::end_of`]).
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element of `slice`
    pub fn new(slice: &'a [T]) -> Self {
        Self { slice, index: 0 }
    }

    /// Cursor one past the last element of `slice`
    pub fn end_of(slice: &'a [T]) -> Self {
        Self {
            slice,
            index: slice.len(),
        }
    }

    /// Number of advances from the start of the slice
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element under the cursor, `None` at the end
    pub fn get(&self) -> Option<&'a T> {
        self.slice.get(self.index)
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

impl<'a, T> fmt::Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<'a, T> ForwardCursor for SliceCursor<'a, T> {
    type Item = &'a T;

    /// # Panics
    /// If the cursor is at or past the end of the slice
    fn read(&self) -> &'a T {
        &self.slice[self.index]
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

impl<'a, T> Sentinel<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    fn is_end(&self, cursor: &SliceCursor<'a, T>) -> bool {
        cursor.index == self.index
    }
}

/// Cursor over any cloneable iterator.
///
/// The element under the cursor is buffered, so reading it any number of
/// times only clones the buffered item.
pub struct IterCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
    index: usize,
}

impl<I: Iterator> IterCursor<I> {
    /// Cursor at the first element produced by `iter`
    pub fn new(mut iter: I) -> Self {
        let current = iter.next();
        Self {
            iter,
            current,
            index: 0,
        }
    }

    /// Number of advances from the start
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element under the cursor, `None` once the iterator is exhausted
    pub fn get(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Consume the cursor, returning the element under it
    pub fn into_item(self) -> Option<I::Item> {
        self.current
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            current: self.current.clone(),
            index: self.index,
        }
    }
}

impl<I> fmt::Debug for IterCursor<I>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("index", &self.index)
            .field("exhausted", &self.current.is_none())
            .finish()
    }
}

impl<I> ForwardCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    /// # Panics
    /// If the underlying iterator is exhausted
    fn read(&self) -> I::Item {
        self.current
            .clone()
            .expect("read past the end of an IterCursor")
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
            self.index += 1;
        }
    }
}

/// End marker for [`IterCursor`]: reached once the iterator is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterEnd;

impl<I: Iterator> Sentinel<IterCursor<I>> for IterEnd {
    fn is_end(&self, cursor: &IterCursor<I>) -> bool {
        cursor.current.is_none()
    }
}

/// End marker that is never reached.
///
/// Scanning with it stops only at an order violation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl<C> Sentinel<C> for Unbounded {
    fn is_end(&self, _cursor: &C) -> bool {
        false
    }
}
