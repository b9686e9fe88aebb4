//! Ranges: containers that provide a begin cursor and an end marker

use std::collections::{linked_list, vec_deque, LinkedList, VecDeque};

use crate::cursor::{ForwardCursor, IterCursor, IterEnd, Sentinel, SliceCursor};

/// A sequence that can be traversed forward from `begin()` until `end()`.
///
/// # Implementations
/// - `[T]`, `[T; N]`, `Vec<T>`: [`SliceCursor`] with a `SliceCursor` end
/// - `VecDeque<T>`, `LinkedList<T>`: [`IterCursor`] with [`IterEnd`]
/// - [`IterRange`]: any cloneable iterator
pub trait ForwardRange {
    type Cursor<'a>: ForwardCursor
    where
        Self: 'a;

    type End<'a>: Sentinel<Self::Cursor<'a>>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor<'_>;

    fn end(&self) -> Self::End<'_>;
}

impl<T> ForwardRange for [T] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    type End<'a> = SliceCursor<'a, T> where Self: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self)
    }

    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end_of(self)
    }
}

impl<T, const N: usize> ForwardRange for [T; N] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    type End<'a> = SliceCursor<'a, T> where Self: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self.as_slice())
    }

    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end_of(self.as_slice())
    }
}

impl<T> ForwardRange for Vec<T> {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;
    type End<'a> = SliceCursor<'a, T> where Self: 'a;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::new(self.as_slice())
    }

    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end_of(self.as_slice())
    }
}

impl<T> ForwardRange for VecDeque<T> {
    type Cursor<'a> = IterCursor<vec_deque::Iter<'a, T>> where Self: 'a;
    type End<'a> = IterEnd where Self: 'a;

    fn begin(&self) -> IterCursor<vec_deque::Iter<'_, T>> {
        IterCursor::new(self.iter())
    }

    fn end(&self) -> IterEnd {
        IterEnd
    }
}

impl<T> ForwardRange for LinkedList<T> {
    type Cursor<'a> = IterCursor<linked_list::Iter<'a, T>> where Self: 'a;
    type End<'a> = IterEnd where Self: 'a;

    fn begin(&self) -> IterCursor<linked_list::Iter<'_, T>> {
        IterCursor::new(self.iter())
    }

    fn end(&self) -> IterEnd {
        IterEnd
    }
}

/// Adapts a cloneable iterator into a [`ForwardRange`].
///
/// Every call to `begin()` starts over from a clone of the wrapped iterator.
#[derive(Debug, Clone)]
pub struct IterRange<I>(pub I);

impl<I> ForwardRange for IterRange<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor<'a> = IterCursor<I> where Self: 'a;
    type End<'a> = IterEnd where Self: 'a;

    fn begin(&self) -> IterCursor<I> {
        IterCursor::new(self.0.clone())
    }

    fn end(&self) -> IterEnd {
        IterEnd
    }
}
