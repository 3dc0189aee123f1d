//! Strictly increasing sequences of ids.
use std::{fmt, mem, ops::Deref};

use crate::{common::IntId, iter::IntIter};


/// An owned, strictly increasing vector of ids.
///
/// This is the representation produced by merges, and it backs the
/// ascending-order iterator variant.
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct SortedIntVec(Vec<IntId>);

impl fmt::Debug for SortedIntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.slice(), f)
    }
}

impl SortedIntVec {
    pub fn new() -> SortedIntVec {
        SortedIntVec::default()
    }

    pub fn with_capacity(n: usize) -> SortedIntVec {
        SortedIntVec(Vec::with_capacity(n))
    }

    /// Sort and deduplicate `ids`, reusing its allocation.
    pub fn from_unsorted(mut ids: Vec<IntId>) -> SortedIntVec {
        ids.sort_unstable();
        ids.dedup();
        SortedIntVec(ids)
    }

    pub fn slice(&self) -> &SortedIntSlice {
        // SAFETY: self.0 is strictly increasing.
        unsafe { SortedIntSlice::new_unchecked(&self.0) }
    }

    /// Append `id` to the vector.
    ///
    /// # Panics
    /// `id` must be strictly greater than the current last element.
    pub fn push(&mut self, id: IntId) {
        assert!(
            self.0.last().map_or(true, |last| *last < id),
            "attempting to push {id} after {:?}",
            self.0.last()
        );
        self.0.push(id)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn retain(&mut self, mut f: impl FnMut(IntId) -> bool) {
        self.0.retain(|id| f(*id))
    }

    pub fn into_vec(self) -> Vec<IntId> {
        self.0
    }
}

impl Deref for SortedIntVec {
    type Target = SortedIntSlice;
    fn deref(&self) -> &SortedIntSlice {
        self.slice()
    }
}

impl FromIterator<IntId> for SortedIntVec {
    fn from_iter<T: IntoIterator<Item = IntId>>(iter: T) -> Self {
        SortedIntVec::from_unsorted(iter.into_iter().collect())
    }
}

/// A borrowed, strictly increasing slice of ids.
#[derive(PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SortedIntSlice([IntId]);

impl fmt::Debug for SortedIntSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl SortedIntSlice {
    unsafe fn new_unchecked(slice: &[IntId]) -> &SortedIntSlice {
        debug_assert!(slice.windows(2).all(|w| w[0] < w[1]));
        // SAFETY: SortedIntSlice is repr(transparent), so the two layouts are compatible.
        mem::transmute::<&[IntId], &SortedIntSlice>(slice)
    }

    /// View `slice` as sorted, or return `None` if it is not strictly
    /// increasing.
    pub fn new(slice: &[IntId]) -> Option<&SortedIntSlice> {
        if slice.windows(2).all(|w| w[0] < w[1]) {
            // SAFETY: we just checked the invariant
            Some(unsafe { SortedIntSlice::new_unchecked(slice) })
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn inner(&self) -> &[IntId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = IntId> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, id: IntId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn subslice(&self, lo: usize, hi: usize) -> &SortedIntSlice {
        // SAFETY: any subslice of a sorted slice is sorted.
        unsafe { SortedIntSlice::new_unchecked(&self.inner()[lo..hi]) }
    }

    /// Return the index of the first id in the slice that is greater than or
    /// equal to `target`, scanning forward from `start`.
    ///
    /// Gallops before binary searching, so repeated calls with increasing
    /// targets stay cheap when the matches are close together.
    pub(crate) fn seek_from(&self, start: usize, target: IntId) -> usize {
        let ids = self.inner();
        if start >= ids.len() || ids[start] >= target {
            return start;
        }
        let mut step = 1;
        let mut lo = start;
        let mut hi = start + step;
        while hi < ids.len() && ids[hi] < target {
            lo = hi;
            step *= 2;
            hi = lo + step;
        }
        let hi = hi.min(ids.len());
        lo + ids[lo..hi].partition_point(|id| *id < target)
    }

    /// An ascending-order iterator over the slice.
    pub fn int_iter(&self) -> IntIter<'_> {
        IntIter::from_sorted(self)
    }
}
