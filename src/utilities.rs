use std::ops::{Bound, Range, RangeBounds};

/// Converts any bounded range form (inclusive, exclusive, ...) into a "normal"
/// half-open [`Range`].
/// Returns `None` if the range is empty or unbounded on either side (i.e. `..12`).
pub(crate) fn range_bounds_to_range<B, R>(range: B) -> Option<Range<R>>
where
    B: RangeBounds<R>,
    R: num::Integer + Copy,
{
    let start_inclusive = match range.start_bound() {
        Bound::Included(start) => *start,
        Bound::Excluded(start_excluded) => start_excluded.add(R::one()),
        Bound::Unbounded => return None,
    };

    let end_exclusive = match range.end_bound() {
        Bound::Included(end_inclusive) => end_inclusive.add(R::one()),
        Bound::Excluded(end) => *end,
        Bound::Unbounded => return None,
    };

    if start_inclusive >= end_exclusive {
        None
    } else {
        Some(start_inclusive..end_exclusive)
    }
}
