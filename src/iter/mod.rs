//! Range list iterator implementations.

mod list;

pub use list::{RangeListIntoIter, RangeListIter};
