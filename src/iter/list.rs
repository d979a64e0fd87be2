use std::ops::Range;

/// An iterator over a borrowed [`RangeList`][crate::RangeList].
///
/// To create this iterator, see the [`RangeList::iter`][crate::RangeList::iter] method.
/// Produces borrowed [`Range`] elements.
pub struct RangeListIter<'l, R>
where
    R: num::Integer + Copy,
{
    pub(crate) inner_iterator: std::slice::Iter<'l, Range<R>>,
}

impl<'l, R> Iterator for RangeListIter<'l, R>
where
    R: num::Integer + Copy,
{
    type Item = &'l Range<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner_iterator.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner_iterator.size_hint()
    }
}

impl<R> ExactSizeIterator for RangeListIter<'_, R>
where
    R: num::Integer + Copy,
{
    fn len(&self) -> usize {
        self.inner_iterator.len()
    }
}


/// An iterator over an owned [`RangeList`][crate::RangeList].
///
/// To create this iterator, see the [`RangeList::into_iter`][crate::RangeList::into_iter] method.
/// Produces owned [`Range`] elements.
pub struct RangeListIntoIter<R>
where
    R: num::Integer + Copy,
{
    pub(crate) inner_iterator: std::vec::IntoIter<Range<R>>,
}

impl<R> Iterator for RangeListIntoIter<R>
where
    R: num::Integer + Copy,
{
    type Item = Range<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner_iterator.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner_iterator.size_hint()
    }
}

impl<R> ExactSizeIterator for RangeListIntoIter<R>
where
    R: num::Integer + Copy,
{
    fn len(&self) -> usize {
        self.inner_iterator.len()
    }
}
