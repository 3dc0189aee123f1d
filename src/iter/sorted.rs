use std::fmt;

use fixedbitset::Ones;

use crate::{common::IntId, set::IntBitSet, sorted::SortedIntSlice, Error, Result};

use super::{IntIter, IntIterator};

/// An ascending iterator over a [`SortedIntSlice`].
#[derive(Debug)]
pub struct SortedIntIterator<'a> {
    ids: &'a SortedIntSlice,
    pos: usize,
}

impl<'a> SortedIntIterator<'a> {
    pub fn new(ids: &'a SortedIntSlice) -> SortedIntIterator<'a> {
        SortedIntIterator { ids, pos: 0 }
    }

    /// Skip forward to the first id greater than or equal to `target`.
    pub(crate) fn seek(&mut self, target: IntId) {
        self.pos = self.ids.seek_from(self.pos, target);
    }

    pub(crate) fn peek(&self) -> Option<IntId> {
        self.ids.inner().get(self.pos).copied()
    }
}

impl<'a> IntIterator<'a> for SortedIntIterator<'a> {
    fn has_next(&self) -> bool {
        self.pos < self.ids.len()
    }

    fn next(&mut self) -> Result<IntId> {
        let res = self.peek().ok_or(Error::StateViolation("sorted"))?;
        self.pos += 1;
        Ok(res)
    }

    fn size(&self) -> usize {
        self.ids.len()
    }

    fn has_ascending_order(&self) -> bool {
        true
    }

    fn create_copy_in_initial_state(&self) -> IntIter<'a> {
        IntIter::Sorted(SortedIntIterator::new(self.ids))
    }
}

/// An ascending iterator over the ids in an [`IntBitSet`].
pub struct BitSetIntIterator<'a> {
    bits: &'a IntBitSet,
    cursor: Ones<'a>,
    size: usize,
    consumed: usize,
}

impl<'a> BitSetIntIterator<'a> {
    pub fn new(bits: &'a IntBitSet) -> BitSetIntIterator<'a> {
        BitSetIntIterator {
            bits,
            cursor: bits.bits().ones(),
            size: bits.len(),
            consumed: 0,
        }
    }
}

impl<'a> IntIterator<'a> for BitSetIntIterator<'a> {
    fn has_next(&self) -> bool {
        self.consumed < self.size
    }

    fn next(&mut self) -> Result<IntId> {
        let bit = self.cursor.next().ok_or(Error::StateViolation("bitset"))?;
        self.consumed += 1;
        Ok(bit as IntId)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn has_ascending_order(&self) -> bool {
        true
    }

    fn create_copy_in_initial_state(&self) -> IntIter<'a> {
        IntIter::Bits(BitSetIntIterator::new(self.bits))
    }
}

impl fmt::Debug for BitSetIntIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSetIntIterator")
            .field("size", &self.size)
            .field("consumed", &self.consumed)
            .finish()
    }
}
