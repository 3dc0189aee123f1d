//! Restartable iterators over the integer id sets that back an inverted index.
//!
//! A posting list (the ids referencing one index key) can be stored as a hash
//! set, a sorted vector or a bitmap. Readers scan any of them through the
//! [`IntIterator`] contract, check [`IntIterator::has_ascending_order`] before
//! assuming an order, and use [`IntIterator::create_copy_in_initial_state`] to
//! rescan without going back to storage. Keys with no postings share the
//! [`EMPTY`] iterator.
use thiserror::Error;

pub(crate) mod common;
pub mod index;
pub mod iter;
pub mod merge;
pub mod set;
pub mod sorted;

#[cfg(test)]
pub(crate) mod test_workloads;

pub use common::IntId;
pub use index::PostingIndex;
pub use iter::{EmptyIntIterator, IntIter, IntIterator, EMPTY};
pub use merge::{Fallback, MergeOptions};
pub use set::{IntBitSet, IntSet};
pub use sorted::{SortedIntSlice, SortedIntVec};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `next` was called on an exhausted iterator. The payload names the
    /// iterator variant.
    #[error("next() called on an exhausted {0} iterator")]
    StateViolation(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
