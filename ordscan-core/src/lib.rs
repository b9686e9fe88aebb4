//! ordscan Core
//!
//! Finds the first position where a forward sequence stops being sorted.
//!
//! The crate is built from a handful of small traits:
//! - [`ForwardCursor`] / [`Sentinel`]: forward traversal with a separate end marker
//! - [`ForwardRange`]: containers that hand out a begin cursor and an end marker
//! - [`Relation`]: the ordering predicate (default [`Less`])
//! - [`Projection`]: key extraction applied before comparing (default [`Identity`])
//!
//! # Usage
//! ```rust
//! use ordscan_core::{IS_SORTED_UNTIL, Greater, SliceCursor};
//!
//! let data = [1, 2, 0, 4];
//! assert_eq!(IS_SORTED_UNTIL.scan_range(&data[..]).index(), 2);
//!
//! // cursor pair form with a descending check
//! let desc = [3, 1];
//! let pos = IS_SORTED_UNTIL
//!     .by(Greater)
//!     .scan(SliceCursor::new(&desc), SliceCursor::end_of(&desc));
//! assert_eq!(pos.index(), 2);
//! ```

mod algorithm;
mod cursor;
mod projection;
mod range;
mod relation;

pub use algorithm::{
    is_sorted, is_sorted_until, is_sorted_until_range, sorted_prefix_len,
    sorted_prefix_len_by_key, IsSortedUntil, IS_SORTED_UNTIL,
};
pub use cursor::{ForwardCursor, IterCursor, IterEnd, Sentinel, SliceCursor, Unbounded};
pub use projection::{Identity, Projection};
pub use range::{ForwardRange, IterRange};
pub use relation::{Counted, Greater, Less, Relation};
