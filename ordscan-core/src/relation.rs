//! Ordering relations
//!
//! A relation is asked `holds(current, previous)`; a `true` answer marks the
//! current element as out of order.

use std::cell::Cell;

/// Binary predicate over comparison keys.
///
/// Expected to behave as a strict weak ordering. This is not checked; an
/// ill-formed relation gives an unspecified (but safe) scan result.
pub trait Relation<K: ?Sized> {
    fn holds(&self, a: &K, b: &K) -> bool;
}

/// `a < b`, the default relation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Less;

impl<K: PartialOrd + ?Sized> Relation<K> for Less {
    #[inline]
    fn holds(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// `a > b`, checks for non-increasing sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greater;

impl<K: PartialOrd + ?Sized> Relation<K> for Greater {
    #[inline]
    fn holds(&self, a: &K, b: &K) -> bool {
        a > b
    }
}

impl<K: ?Sized, F> Relation<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn holds(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Relation adapter that counts how many times it was evaluated.
///
/// Not `Sync`; intended for a single scan at a time.
#[derive(Debug, Default)]
pub struct Counted<R> {
    inner: R,
    calls: Cell<usize>,
}

impl<R> Counted<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of evaluations since creation or the last [`Counted::reset`]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<K: ?Sized, R: Relation<K>> Relation<K> for Counted<R> {
    fn holds(&self, a: &K, b: &K) -> bool {
        self.calls.set(self.calls.get() + 1);
        self.inner.holds(a, b)
    }
}
