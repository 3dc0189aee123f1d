use crate::{common::IntId, Error, Result};

use super::{IntIter, IntIterator};

/// The zero-element iterator.
///
/// There is exactly one instance, [`EMPTY`]. It is immutable, so it can be
/// shared across threads without synchronization, and copying it hands back
/// the same instance.
#[derive(Debug)]
pub struct EmptyIntIterator {
    _private: (),
}

/// The shared empty iterator, used for keys with no postings.
pub static EMPTY: EmptyIntIterator = EmptyIntIterator { _private: () };

impl<'a> IntIterator<'a> for &'static EmptyIntIterator {
    fn has_next(&self) -> bool {
        false
    }

    fn next(&mut self) -> Result<IntId> {
        Err(Error::StateViolation("empty"))
    }

    fn size(&self) -> usize {
        0
    }

    fn has_ascending_order(&self) -> bool {
        false
    }

    fn create_copy_in_initial_state(&self) -> IntIter<'a> {
        IntIter::Empty(*self)
    }
}
