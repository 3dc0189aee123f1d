//! Unordered id sets that back posting lists.
use std::fmt;

use fixedbitset::FixedBitSet;

use crate::{
    common::{HashSet, IntId},
    iter::IntIter,
    sorted::SortedIntVec,
};


/// A duplicate-free, unordered set of ids.
///
/// Iterators handed out by [`IntSet::int_iter`] borrow the set, so it cannot
/// change while a scan is in progress.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct IntSet {
    data: HashSet<IntId>,
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl IntSet {
    pub fn new() -> IntSet {
        IntSet::default()
    }

    pub fn with_capacity(n: usize) -> IntSet {
        IntSet {
            data: HashSet::with_capacity_and_hasher(n, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, id: IntId) -> bool {
        self.data.contains(&id)
    }

    /// Insert `id` into the set, return true if `id` was not previously in
    /// the set.
    pub fn insert(&mut self, id: IntId) -> bool {
        self.data.insert(id)
    }

    /// Remove `id` from the set, return true if `id` was in the set.
    pub fn remove(&mut self, id: IntId) -> bool {
        self.data.remove(&id)
    }

    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Iterate over the ids in an unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = IntId> + '_ {
        self.data.iter().copied()
    }

    pub(crate) fn raw_iter(&self) -> hashbrown::hash_set::Iter<'_, IntId> {
        self.data.iter()
    }

    /// A set-backed iterator over this set. Its order is unspecified.
    pub fn int_iter(&self) -> IntIter<'_> {
        IntIter::from_set(self)
    }

    /// Copy the contents of the set into ascending order.
    pub fn to_sorted(&self) -> SortedIntVec {
        self.iter().collect()
    }
}

impl FromIterator<IntId> for IntSet {
    fn from_iter<T: IntoIterator<Item = IntId>>(iter: T) -> Self {
        let mut res = IntSet::new();
        res.extend(iter);
        res
    }
}

impl Extend<IntId> for IntSet {
    fn extend<T: IntoIterator<Item = IntId>>(&mut self, iter: T) {
        self.data.extend(iter)
    }
}

/// A dense bitmap of ids, for posting lists that cover a large share of the
/// id space.
#[derive(Default, Clone)]
pub struct IntBitSet {
    bits: FixedBitSet,
}

// Bitmaps of different capacities can hold the same ids.
impl PartialEq for IntBitSet {
    fn eq(&self, other: &IntBitSet) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for IntBitSet {}

impl fmt::Debug for IntBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl IntBitSet {
    pub fn new() -> IntBitSet {
        IntBitSet::default()
    }

    /// Create a bitmap that can hold ids below `n` without growing.
    pub fn with_capacity(n: usize) -> IntBitSet {
        IntBitSet {
            bits: FixedBitSet::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.ones().next().is_none()
    }

    pub fn contains(&self, id: IntId) -> bool {
        self.bits.contains(id as usize)
    }

    /// Insert `id`, growing the bitmap if needed. Returns true if `id` was not
    /// previously present.
    pub fn insert(&mut self, id: IntId) -> bool {
        let index = id as usize;
        if index >= self.bits.len() {
            self.bits.grow(index + 1);
        }
        !self.bits.put(index)
    }

    /// Remove `id`, returning true if it was present.
    pub fn remove(&mut self, id: IntId) -> bool {
        let index = id as usize;
        if index >= self.bits.len() {
            return false;
        }
        let was_set = self.bits.contains(index);
        self.bits.set(index, false);
        was_set
    }

    /// Iterate over the ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = IntId> + '_ {
        self.bits.ones().map(|i| i as IntId)
    }

    pub(crate) fn bits(&self) -> &FixedBitSet {
        &self.bits
    }

    /// An ascending-order iterator over the bitmap.
    pub fn int_iter(&self) -> IntIter<'_> {
        IntIter::from_bits(self)
    }
}

impl FromIterator<IntId> for IntBitSet {
    fn from_iter<T: IntoIterator<Item = IntId>>(iter: T) -> Self {
        let mut res = IntBitSet::new();
        for id in iter {
            res.insert(id);
        }
        res
    }
}
