use std::fmt;

use hashbrown::hash_set;

use crate::{common::IntId, set::IntSet, Error, Result};

use super::{IntIter, IntIterator};

/// An iterator over an [`IntSet`], in the set's (unspecified) order.
pub struct SetIntIterator<'a> {
    set: &'a IntSet,
    cursor: hash_set::Iter<'a, IntId>,
    size: usize,
}

impl<'a> SetIntIterator<'a> {
    pub fn new(set: &'a IntSet) -> SetIntIterator<'a> {
        SetIntIterator {
            set,
            cursor: set.raw_iter(),
            size: set.len(),
        }
    }
}

impl<'a> IntIterator<'a> for SetIntIterator<'a> {
    fn has_next(&self) -> bool {
        self.cursor.len() != 0
    }

    fn next(&mut self) -> Result<IntId> {
        self.cursor
            .next()
            .copied()
            .ok_or(Error::StateViolation("set"))
    }

    fn size(&self) -> usize {
        self.size
    }

    fn has_ascending_order(&self) -> bool {
        false
    }

    fn create_copy_in_initial_state(&self) -> IntIter<'a> {
        IntIter::Set(SetIntIterator::new(self.set))
    }
}

impl fmt::Debug for SetIntIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetIntIterator")
            .field("size", &self.size)
            .field("remaining", &self.cursor.len())
            .finish()
    }
}
