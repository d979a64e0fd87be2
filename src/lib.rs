//! A [`RangeList`] implementation.
//!
//! ## What is a range list
//! A **range list** is a data structure that describes a set of integers as an
//! ascending list of non-overlapping half-open ranges.
//!
//! For example, the set `{1, 2, 3, 4, 10, 11}` is stored as the two ranges
//! `1..5` and `10..12` — only the boundaries are kept, never the individual
//! integers.
//!
//! The list is kept *canonical*: after every mutation the stored ranges are
//! sorted ascending, pairwise disjoint, and no two ranges share a boundary
//! (touching ranges are fused into one).
//!
//! ## Examples
//! You may call [`RangeList::new`] to create an empty range list, then use
//! [`RangeList::add`] and [`RangeList::remove`] to mark integers as present
//! or absent.
//!
//! ```rust
//! # use range_list::RangeList;
//! let mut list: RangeList<i32> = RangeList::new();
//!
//! list.add(1..5)
//!     .expect("Failed to add first range to range list.");
//!
//! list.add(10..17)
//!     .expect("Failed to add second range to range list.");
//!
//! // This range touches `10..17`, so the two fuse into a single range.
//! list.add(17..18)
//!     .expect("Failed to add third range to range list.");
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.to_string(), "[1, 5) [10, 18)");
//!
//!
//! // Removing a range that falls inside a stored range splits it in two.
//! list.remove(2..4)
//!     .expect("Failed to remove range from range list.");
//!
//! assert_eq!(list.to_string(), "[1, 2) [4, 5) [10, 18)");
//! ```

pub mod error;
pub mod iter;
mod list;
mod utilities;

pub use list::*;
