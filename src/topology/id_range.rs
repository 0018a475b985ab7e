//! `IdRange`: a half-open, contiguous run of entity indices.
//!
//! Every partition view in this crate is a single `[start, end)` interval,
//! so the views are returned as this small `Copy` value instead of a
//! materialized `Vec`. Iterating an `IdRange` yields `start, start + 1, ...,
//! end - 1`; iterating it again starts over, because each call to
//! [`IdRange::iter`] builds a fresh `std::ops::Range`.

use std::fmt;
use std::ops::Range;

/// Half-open interval `[start, end)` of `usize` indices.
///
/// # Invariants
/// `start <= end`. Constructors clamp an inverted pair to the empty range
/// at `start`, so `len()` never underflows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Range<usize>", into = "Range<usize>")]
pub struct IdRange {
    start: usize,
    end: usize,
}

impl IdRange {
    /// Build `[start, end)`; empty when `start >= end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// The empty range.
    #[inline]
    pub const fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// `[0, count)`.
    #[inline]
    pub const fn upto(count: usize) -> Self {
        Self::new(0, count)
    }

    /// First index in the range (inclusive).
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last index (exclusive).
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// The same run translated by `offset` (local to global numbering).
    #[inline]
    pub const fn shifted(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// True if every index of `self` is also in `other`. The empty range is
    /// a subset of everything.
    pub fn is_subset_of(&self, other: &IdRange) -> bool {
        self.is_empty() || (other.start <= self.start && self.end <= other.end)
    }

    /// Fresh iterator over the indices.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Materialize the indices, e.g. to hand them to an index-array API.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// The equivalent `std::ops::Range`.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.iter()
    }
}

impl From<Range<usize>> for IdRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<IdRange> for Range<usize> {
    fn from(r: IdRange) -> Self {
        r.start..r.end
    }
}

impl IntoIterator for IdRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &IdRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_clamp_to_empty() {
        let r = IdRange::new(5, 3);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.start(), 5);
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn iteration_is_restartable() {
        let r = IdRange::new(2, 5);
        let first: Vec<_> = r.iter().collect();
        let second: Vec<_> = r.into_iter().collect();
        assert_eq!(first, vec![2, 3, 4]);
        assert_eq!(first, second);
        assert_eq!(r.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn shifted_preserves_length() {
        let r = IdRange::new(1, 4).shifted(10);
        assert_eq!(r, IdRange::new(11, 14));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn subset_rules() {
        let outer = IdRange::new(0, 10);
        assert!(IdRange::new(2, 5).is_subset_of(&outer));
        assert!(!IdRange::new(8, 12).is_subset_of(&outer));
        assert!(IdRange::new(50, 50).is_subset_of(&outer));
        assert!(IdRange::empty().is_subset_of(&IdRange::empty()));
    }

    #[test]
    fn contains_is_half_open() {
        let r = IdRange::new(3, 6);
        assert!(!r.contains(2));
        assert!(r.contains(3));
        assert!(r.contains(5));
        assert!(!r.contains(6));
    }

    #[test]
    fn std_range_conversions() {
        let r: IdRange = (4..7).into();
        let back: Range<usize> = r.into();
        assert_eq!(back, 4..7);
        assert_eq!(format!("{r}"), "[4, 7)");
    }
}
