//! Restartable cursors over id sets.
//!
//! Every posting-list read hands out an [`IntIter`], which is scanned with
//! [`IntIterator::has_next`] / [`IntIterator::next`] and then dropped. An
//! iterator borrows the storage it reads, so the storage is frozen for as long
//! as any iterator over it is alive. Copies made with
//! [`IntIterator::create_copy_in_initial_state`] share that storage and start
//! over from the beginning.
use std::fmt;

use crate::{
    common::IntId,
    set::{IntBitSet, IntSet},
    sorted::SortedIntSlice,
    Result,
};

mod empty;
mod hashed;
mod sorted;


pub use empty::{EmptyIntIterator, EMPTY};
pub use hashed::SetIntIterator;
pub use sorted::{BitSetIntIterator, SortedIntIterator};

/// The capabilities needed to scan a set of ids.
pub trait IntIterator<'a>: Send {
    /// Whether there are unread elements left.
    fn has_next(&self) -> bool;

    /// Return the next element and advance the cursor.
    ///
    /// Returns [`Error::StateViolation`](crate::Error::StateViolation) if
    /// called when [`IntIterator::has_next`] is false.
    fn next(&mut self) -> Result<IntId>;

    /// The number of elements in the underlying set when this iterator was
    /// created. This does not change as the iterator advances.
    fn size(&self) -> usize;

    /// Whether [`IntIterator::next`] yields strictly increasing ids.
    ///
    /// This is a property of the variant, not of any particular instance:
    /// callers may not assume any order when it is false.
    fn has_ascending_order(&self) -> bool;

    /// A fresh iterator over the same ids, positioned at the start.
    fn create_copy_in_initial_state(&self) -> IntIter<'a>;
}

/// An iterator over one of the id-set representations.
pub enum IntIter<'a> {
    /// The shared zero-element iterator.
    Empty(&'static EmptyIntIterator),
    Set(SetIntIterator<'a>),
    Sorted(SortedIntIterator<'a>),
    Bits(BitSetIntIterator<'a>),
    /// Any other representation.
    Dyn(Box<dyn IntIterator<'a> + 'a>),
}

impl<'a> IntIter<'a> {
    /// The shared empty iterator. This does not allocate.
    pub fn empty() -> IntIter<'a> {
        IntIter::Empty(&EMPTY)
    }

    pub fn from_set(set: &'a IntSet) -> IntIter<'a> {
        IntIter::Set(SetIntIterator::new(set))
    }

    pub fn from_sorted(ids: &'a SortedIntSlice) -> IntIter<'a> {
        IntIter::Sorted(SortedIntIterator::new(ids))
    }

    pub fn from_bits(bits: &'a IntBitSet) -> IntIter<'a> {
        IntIter::Bits(BitSetIntIterator::new(bits))
    }

    pub fn from_dyn(iter: impl IntIterator<'a> + 'a) -> IntIter<'a> {
        IntIter::Dyn(Box::new(iter))
    }

    /// Whether this is the shared empty iterator.
    pub fn is_shared_empty(&self) -> bool {
        matches!(self, IntIter::Empty(e) if std::ptr::eq(*e, &EMPTY))
    }

    /// Adapt the remaining elements to a standard iterator.
    pub fn ids(&mut self) -> Ids<'_, 'a> {
        Ids { iter: self }
    }

    /// Consume the remaining elements into a vector.
    pub fn collect_remaining(&mut self) -> Vec<IntId> {
        let mut res = Vec::with_capacity(self.size());
        res.extend(self.ids());
        res
    }
}

impl<'a> IntIterator<'a> for IntIter<'a> {
    fn has_next(&self) -> bool {
        match self {
            IntIter::Empty(e) => e.has_next(),
            IntIter::Set(s) => s.has_next(),
            IntIter::Sorted(s) => s.has_next(),
            IntIter::Bits(b) => b.has_next(),
            IntIter::Dyn(d) => d.has_next(),
        }
    }

    fn next(&mut self) -> Result<IntId> {
        match self {
            IntIter::Empty(e) => IntIterator::next(e),
            IntIter::Set(s) => s.next(),
            IntIter::Sorted(s) => s.next(),
            IntIter::Bits(b) => b.next(),
            IntIter::Dyn(d) => d.next(),
        }
    }

    fn size(&self) -> usize {
        match self {
            IntIter::Empty(e) => e.size(),
            IntIter::Set(s) => s.size(),
            IntIter::Sorted(s) => s.size(),
            IntIter::Bits(b) => b.size(),
            IntIter::Dyn(d) => d.size(),
        }
    }

    fn has_ascending_order(&self) -> bool {
        match self {
            IntIter::Empty(e) => e.has_ascending_order(),
            IntIter::Set(s) => s.has_ascending_order(),
            IntIter::Sorted(s) => s.has_ascending_order(),
            IntIter::Bits(b) => b.has_ascending_order(),
            IntIter::Dyn(d) => d.has_ascending_order(),
        }
    }

    fn create_copy_in_initial_state(&self) -> IntIter<'a> {
        match self {
            IntIter::Empty(e) => e.create_copy_in_initial_state(),
            IntIter::Set(s) => s.create_copy_in_initial_state(),
            IntIter::Sorted(s) => s.create_copy_in_initial_state(),
            IntIter::Bits(b) => b.create_copy_in_initial_state(),
            IntIter::Dyn(d) => d.create_copy_in_initial_state(),
        }
    }
}

impl fmt::Debug for IntIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntIter::Empty(e) => fmt::Debug::fmt(e, f),
            IntIter::Set(s) => fmt::Debug::fmt(s, f),
            IntIter::Sorted(s) => fmt::Debug::fmt(s, f),
            IntIter::Bits(b) => fmt::Debug::fmt(b, f),
            IntIter::Dyn(d) => f
                .debug_struct("Dyn")
                .field("size", &d.size())
                .field("ascending", &d.has_ascending_order())
                .finish(),
        }
    }
}

/// A standard-library view of the unread part of an [`IntIter`].
///
/// This `struct` is created by [`IntIter::ids`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Ids<'i, 'a> {
    iter: &'i mut IntIter<'a>,
}

impl Iterator for Ids<'_, '_> {
    type Item = IntId;

    fn next(&mut self) -> Option<IntId> {
        if !self.iter.has_next() {
            return None;
        }
        IntIterator::next(&mut *self.iter).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.iter.has_next() {
            (1, Some(self.iter.size()))
        } else {
            (0, Some(0))
        }
    }
}
