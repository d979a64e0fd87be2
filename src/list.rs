use std::{
    cmp::Ordering,
    fmt,
    ops::{Range, RangeBounds},
};

use crate::{
    error::InvalidRangeError,
    iter::{RangeListIntoIter, RangeListIter},
    utilities::range_bounds_to_range,
};


/// A list of ascending, non-overlapping half-open integer ranges.
///
/// ## Generics
/// Range boundaries are of type `R` (must implement
/// [`num::Integer`](../num/trait.Integer.html)` + `[`Copy`]).
///
/// ## Canonical form
/// After every successful [`add`][Self::add] or [`remove`][Self::remove] call
/// the stored ranges are sorted ascending by start, pairwise disjoint and
/// never touching (two ranges sharing a boundary are fused into one), and each
/// range contains at least one integer.
///
/// Seeding the list through [`from_ranges`][Self::from_ranges] validates each
/// range individually but does **not** canonicalize the sequence; see the
/// method documentation for the details.
pub struct RangeList<R>
where
    R: num::Integer + Copy,
{
    /// A vector of ascending, disjoint ranges.
    ranges: Vec<Range<R>>,
}

impl<R> RangeList<R>
where
    R: num::Integer + Copy,
{
    /// Initialize a new empty range list.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Initialize a new empty range list with the specified
    /// initial `capacity` of its internal vector of ranges.
    pub fn new_with_capacity(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    /// Initialize a range list from a sequence of half-open ranges.
    ///
    /// Each range is validated on its own: the method returns
    /// `Err(`[`InvalidRangeError`]`)` as soon as one contains no integer.
    ///
    /// ## No canonicalization
    /// The seed sequence is stored as given. If the caller supplies ranges
    /// that are unsorted, overlapping or touching, the canonical form is not
    /// restored until the next [`add`][Self::add] or [`remove`][Self::remove]
    /// call rebuilds the list. Callers wanting the invariant to hold
    /// immediately must supply an already-canonical sequence.
    pub fn from_ranges<I>(ranges: I) -> Result<Self, InvalidRangeError>
    where
        I: IntoIterator<Item = Range<R>>,
    {
        let mut validated_ranges = Vec::new();

        for range in ranges {
            if range.start >= range.end {
                return Err(InvalidRangeError);
            }

            validated_ranges.push(range);
        }

        Ok(Self {
            ranges: validated_ranges,
        })
    }

    /// Returns the first point (smallest value) in this range list.
    ///
    /// The returned value is *inclusive*, meaning that semantically,
    /// the value *is* included in the set.
    pub fn start(&self) -> Option<R> {
        self.ranges.first().map(|range| range.start)
    }

    /// Returns the last point (largest value) in this range list.
    ///
    /// The value is *exclusive*, meaning that semantically,
    /// the value *is not included* in the set.
    pub fn end(&self) -> Option<R> {
        self.ranges.last().map(|range| range.end)
    }

    /// Returns the span ([`start`][Self::start] to [`end`][Self::end]) of this range list.
    pub fn span(&self) -> Option<Range<R>> {
        let first_start = self.ranges.first()?.start;
        let last_end_exclusive = self.ranges.last()?.end;

        Some(first_start..last_end_exclusive)
    }

    /// Returns the amount of ranges contained in this range list.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns a `bool` indicating whether the range list is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Add a new `range` to the range list, marking its integers as present.
    ///
    /// The method will return `Err(`[`InvalidRangeError`]`)` if the range is
    /// unbounded or contains no integer; a rejected call leaves the list
    /// unchanged. Adding a range that is already fully covered is a no-op.
    ///
    /// ## Specifics
    /// - If the provided range overlaps *or touches* one or more stored
    /// ranges, they are all fused into a single covering range.
    ///
    /// - If the provided range is disjoint from every stored range, it is
    /// inserted at its sorted position.
    ///
    /// - If the provided range completely envelops one or more smaller ranges,
    /// those ranges are absorbed into it.
    pub fn add<B>(&mut self, range: B) -> Result<(), InvalidRangeError>
    where
        B: RangeBounds<R>,
    {
        let range = range_bounds_to_range(range).ok_or(InvalidRangeError)?;

        // A single left-to-right pass over the (sorted) stored ranges,
        // growing the candidate over everything it overlaps or touches.
        // Each branch preserves relative order, so the rebuilt vector needs
        // no final sort.
        let mut rebuilt_ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut pending = Some(range);

        for stored in self.ranges.drain(..) {
            let Some(candidate) = pending.clone() else {
                // The candidate has already been placed.
                rebuilt_ranges.push(stored);
                continue;
            };

            // The candidate swallows the stored range whole.
            if candidate.start <= stored.start && candidate.end >= stored.end {
                continue;
            }

            // The candidate lies entirely to the left of the stored range:
            // place it, fusing the two when their boundaries touch.
            if candidate.end <= stored.start {
                if candidate.end < stored.start {
                    rebuilt_ranges.push(candidate);
                    rebuilt_ranges.push(stored);
                } else {
                    rebuilt_ranges.push(candidate.start..stored.end);
                }

                pending = None;
                continue;
            }

            // The candidate lies entirely to the right of the stored range:
            // keep scanning, absorbing the stored range when their boundaries
            // touch.
            if candidate.start >= stored.end {
                if candidate.start > stored.end {
                    rebuilt_ranges.push(stored);
                } else {
                    pending = Some(stored.start..candidate.end);
                }

                continue;
            }

            // The candidate is nested inside the stored range and contributes
            // nothing new.
            if candidate.start >= stored.start && candidate.end <= stored.end {
                rebuilt_ranges.push(stored);

                pending = None;
                continue;
            }

            // Partial overlap: grow the candidate over the stored range and
            // keep scanning. Overlapping the left edge of the stored range
            // extends the candidate's end, overlapping the right edge extends
            // its start.
            if candidate.start < stored.start {
                pending = Some(candidate.start..stored.end);
            } else {
                pending = Some(stored.start..candidate.end);
            }
        }

        if let Some(candidate) = pending {
            rebuilt_ranges.push(candidate);
        }

        self.ranges = rebuilt_ranges;

        Ok(())
    }

    /// Remove a `range` from the range list, marking its integers as absent.
    ///
    /// The method will return `Err(`[`InvalidRangeError`]`)` if the range is
    /// unbounded or contains no integer; a rejected call leaves the list
    /// unchanged.
    ///
    /// ## Specifics
    /// - Stored ranges fully inside the provided range are dropped.
    ///
    /// - A stored range that partially overlaps the provided range is
    /// truncated at the removal boundary.
    ///
    /// - If the provided range falls strictly inside a single stored range,
    /// that range is split into the two surviving fragments on either side
    /// (either fragment is dropped when it contains no integer).
    pub fn remove<B>(&mut self, range: B) -> Result<(), InvalidRangeError>
    where
        B: RangeBounds<R>,
    {
        let range = range_bounds_to_range(range).ok_or(InvalidRangeError)?;

        let mut rebuilt_ranges = Vec::with_capacity(self.ranges.len() + 1);
        let mut pending = Some(range);

        for stored in self.ranges.drain(..) {
            let Some(removal) = pending.clone() else {
                // The removal has already been resolved.
                rebuilt_ranges.push(stored);
                continue;
            };

            // The stored range is covered whole: drop it.
            if stored.start >= removal.start && stored.end <= removal.end {
                continue;
            }

            // The stored range ends before the removal begins.
            if stored.end <= removal.start {
                rebuilt_ranges.push(stored);
                continue;
            }

            // The stored range begins at or past the removal's end. The list
            // is sorted, so no later range can overlap the removal either.
            if stored.start >= removal.end {
                rebuilt_ranges.push(stored);

                pending = None;
                continue;
            }

            // The removal falls inside the stored range: keep the fragments
            // on either side that still contain an integer.
            if stored.start <= removal.start && stored.end >= removal.end {
                if stored.start < removal.start {
                    rebuilt_ranges.push(stored.start..removal.start);
                }
                if removal.end < stored.end {
                    rebuilt_ranges.push(removal.end..stored.end);
                }

                continue;
            }

            // Partial overlap: truncate the stored range at the removal
            // boundary. Overlapping the removal's left edge keeps the stored
            // range's head, overlapping its right edge keeps the tail.
            if stored.start < removal.start {
                rebuilt_ranges.push(stored.start..removal.start);
            } else {
                rebuilt_ranges.push(removal.end..stored.end);
            }
        }

        self.ranges = rebuilt_ranges;

        Ok(())
    }

    fn range_index_by_position(&self, position: R) -> Result<usize, usize> {
        self.ranges.binary_search_by(|stored| {
            let start_ordering = position.cmp(&stored.start);
            let end_ordering = position.cmp(&stored.end);

            if start_ordering == Ordering::Less {
                // Smaller than the start bound - the position comes before
                // this range.
                Ordering::Greater
            } else if end_ordering == Ordering::Less {
                // Inside the range - larger or equal the start, smaller than
                // the end bound.
                Ordering::Equal
            } else {
                // Larger than (or equal) the end bound - the position comes
                // after this range.
                Ordering::Less
            }
        })
    }

    /// Returns the stored range that the `position` is inside of, if any.
    ///
    /// Only meaningful on a canonical list (binary search relies on the
    /// stored ranges being sorted and disjoint).
    pub fn range_at_position(&self, position: R) -> Option<&Range<R>> {
        let Ok(range_index) = self.range_index_by_position(position) else {
            return None;
        };

        self.ranges.get(range_index)
    }

    /// Returns a `bool` indicating whether the `position` is present in the set.
    pub fn contains(&self, position: R) -> bool {
        self.range_index_by_position(position).is_ok()
    }
}


impl<R> Default for RangeList<R>
where
    R: num::Integer + Copy,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}


impl<R> RangeList<R>
where
    R: num::Integer + Copy + fmt::Display,
{
    /// Writes the canonical rendering (see the [`Display`][fmt::Display]
    /// implementation) plus a newline to standard output.
    pub fn print(&self) {
        println!("{self}");
    }
}

/// Renders the list as `"[b1, e1) [b2, e2) ..."`: each range in ascending
/// order, joined by single spaces, with no trailing whitespace. An empty list
/// renders as the empty string.
impl<R> fmt::Display for RangeList<R>
where
    R: num::Integer + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, range) in self.ranges.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }

            write!(f, "[{}, {})", range.start, range.end)?;
        }

        Ok(())
    }
}



/*
 * Iterator conversion code.
 * Here we implement iter and an owned iterator as well as `IntoIterator`
 * for & and owned values (allowing us to use `RangeList` directly in
 * `for` loops).
 */

impl<R> RangeList<R>
where
    R: num::Integer + Copy,
{
    pub fn iter(&self) -> RangeListIter<R> {
        RangeListIter {
            inner_iterator: self.ranges.iter(),
        }
    }
}

impl<R> IntoIterator for RangeList<R>
where
    R: num::Integer + Copy,
{
    type Item = Range<R>;
    type IntoIter = RangeListIntoIter<R>;

    fn into_iter(self) -> RangeListIntoIter<R> {
        RangeListIntoIter {
            inner_iterator: self.ranges.into_iter(),
        }
    }
}

impl<'l, R> IntoIterator for &'l RangeList<R>
where
    R: num::Integer + Copy,
{
    type Item = &'l Range<R>;
    type IntoIter = RangeListIter<'l, R>;

    fn into_iter(self) -> RangeListIter<'l, R> {
        self.iter()
    }
}
