//! Sorted-prefix scan
//!
//! There is exactly one scan loop ([`scan`]); every public entry point below
//! obtains a begin cursor and an end marker and delegates to it.

use crate::cursor::{ForwardCursor, Sentinel, SliceCursor};
use crate::projection::{Identity, Projection};
use crate::range::ForwardRange;
use crate::relation::{Less, Relation};

/// The single scan implementation.
///
/// Returns the first cursor `c` (past the first element) for which
/// `relation(proj(*c), proj(*prev(c)))` holds, or the end cursor.
fn scan<C, S, R, P>(begin: C, end: &S, relation: &R, projection: &P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Projection<C::Item>,
    R: Relation<P::Key>,
{
    let mut previous = begin;
    if end.is_end(&previous) {
        return previous;
    }

    let mut current = previous.clone();
    current.advance();
    while !end.is_end(&current) {
        let current_key = projection.project(current.read());
        let previous_key = projection.project(previous.read());
        if relation.holds(&current_key, &previous_key) {
            #[cfg(feature = "trace_scan")]
            tracing::trace!(target: "ordscan::scan", "order violation found");
            return current;
        }
        previous = current.clone();
        current.advance();
    }

    #[cfg(feature = "trace_scan")]
    tracing::trace!(target: "ordscan::scan", "reached end without violation");
    current
}

/// Cursor-pair form: scan from `begin` until `end`.
///
/// # Example
/// ```rust
/// use ordscan_core::{is_sorted_until, Identity, Less, SliceCursor};
///
/// let data = [1, 2, 0, 4];
/// let pos = is_sorted_until(SliceCursor::new(&data), SliceCursor::end_of(&data), Less, Identity);
/// assert_eq!(pos.index(), 2);
/// ```
pub fn is_sorted_until<C, S, R, P>(begin: C, end: S, relation: R, projection: P) -> C
where
    C: ForwardCursor,
    S: Sentinel<C>,
    P: Projection<C::Item>,
    R: Relation<P::Key>,
{
    scan(begin, &end, &relation, &projection)
}

/// Range form: scan a whole container.
pub fn is_sorted_until_range<'a, Rng, R, P>(
    range: &'a Rng,
    relation: R,
    projection: P,
) -> Rng::Cursor<'a>
where
    Rng: ForwardRange + ?Sized,
    P: Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>,
    R: Relation<<P as Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>>::Key>,
{
    scan(range.begin(), &range.end(), &relation, &projection)
}

/// Function object carrying a relation and a projection.
///
/// `IsSortedUntil::new()` (or [`IS_SORTED_UNTIL`]) uses [`Less`] and
/// [`Identity`]; [`by`](Self::by) and [`by_key`](Self::by_key) replace them.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsSortedUntil<R = Less, P = Identity> {
    relation: R,
    projection: P,
}

/// Default-configured [`IsSortedUntil`].
pub const IS_SORTED_UNTIL: IsSortedUntil = IsSortedUntil::new();

impl IsSortedUntil {
    pub const fn new() -> Self {
        Self {
            relation: Less,
            projection: Identity,
        }
    }
}

impl<R, P> IsSortedUntil<R, P> {
    /// Replace the ordering relation
    pub fn by<R2>(self, relation: R2) -> IsSortedUntil<R2, P> {
        IsSortedUntil {
            relation,
            projection: self.projection,
        }
    }

    /// Replace the projection
    pub fn by_key<P2>(self, projection: P2) -> IsSortedUntil<R, P2> {
        IsSortedUntil {
            relation: self.relation,
            projection,
        }
    }

    pub fn relation(&self) -> &R {
        &self.relation
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Cursor-pair form
    pub fn scan<C, S>(&self, begin: C, end: S) -> C
    where
        C: ForwardCursor,
        S: Sentinel<C>,
        P: Projection<C::Item>,
        R: Relation<P::Key>,
    {
        scan(begin, &end, &self.relation, &self.projection)
    }

    /// Range form
    pub fn scan_range<'a, Rng>(&self, range: &'a Rng) -> Rng::Cursor<'a>
    where
        Rng: ForwardRange + ?Sized,
        P: Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>,
        R: Relation<<P as Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>>::Key>,
    {
        scan(range.begin(), &range.end(), &self.relation, &self.projection)
    }

    /// Whether the whole range is in order
    pub fn is_sorted<'a, Rng>(&self, range: &'a Rng) -> bool
    where
        Rng: ForwardRange + ?Sized,
        P: Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>,
        R: Relation<<P as Projection<<Rng::Cursor<'a> as ForwardCursor>::Item>>::Key>,
    {
        let end = range.end();
        let position = scan(range.begin(), &end, &self.relation, &self.projection);
        end.is_end(&position)
    }
}

/// Length of the longest non-decreasing prefix of `slice`.
pub fn sorted_prefix_len<T: PartialOrd>(slice: &[T]) -> usize {
    IS_SORTED_UNTIL.scan_range(slice).index()
}

/// Length of the longest prefix of `slice` whose keys are non-decreasing.
pub fn sorted_prefix_len_by_key<T, K, F>(slice: &[T], key: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    IS_SORTED_UNTIL.by_key(key).scan_range(slice).index()
}

/// Whether `slice` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
    IS_SORTED_UNTIL.is_sorted(slice)
}
