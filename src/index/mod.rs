//! An in-memory inverted index from keys to posting lists.
use std::{fmt::Debug, hash::Hash};

use crate::{
    common::{HashMap, IntId},
    iter::{IntIter, IntIterator},
    merge::{self, MergeOptions},
    set::IntSet,
    sorted::SortedIntVec,
    Result,
};

#[cfg(test)]
mod tests;

/// Maps each key to the set of ids that reference it.
///
/// Reads hand out [`IntIter`]s that borrow the index, so no posting list can
/// change while a read is in progress.
#[derive(Clone)]
pub struct PostingIndex<K> {
    postings: HashMap<K, IntSet>,
    opts: MergeOptions,
}

impl<K> Default for PostingIndex<K> {
    fn default() -> Self {
        PostingIndex {
            postings: Default::default(),
            opts: Default::default(),
        }
    }
}

impl<K: Hash + Eq + Debug> PostingIndex<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: MergeOptions) -> Self {
        PostingIndex {
            postings: Default::default(),
            opts,
        }
    }

    pub fn options(&self) -> MergeOptions {
        self.opts
    }

    /// The number of keys with at least one posting.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.postings.keys()
    }

    pub fn contains(&self, key: &K, id: IntId) -> bool {
        self.postings.get(key).map_or(false, |set| set.contains(id))
    }

    /// Record that `id` references `key`. Returns true if this is new.
    pub fn add(&mut self, key: K, id: IntId) -> bool {
        self.postings.entry(key).or_default().insert(id)
    }

    /// Remove `id` from `key`'s postings. Keys left with no postings are
    /// dropped. Returns true if `id` was present.
    pub fn remove(&mut self, key: &K, id: IntId) -> bool {
        let Some(set) = self.postings.get_mut(key) else {
            return false;
        };
        let res = set.remove(id);
        if set.is_empty() {
            self.postings.remove(key);
        }
        res
    }

    /// Remove `id` from every key. Returns the number of keys it was removed
    /// from.
    pub fn remove_id(&mut self, id: IntId) -> usize {
        let mut touched = 0;
        self.postings.retain(|_, set| {
            touched += set.remove(id) as usize;
            !set.is_empty()
        });
        touched
    }

    /// Replace the postings for `key` wholesale.
    pub fn replace(&mut self, key: K, ids: IntSet) {
        if ids.is_empty() {
            self.postings.remove(&key);
            return;
        }
        self.postings.insert(key, ids);
    }

    /// An iterator over the ids referencing `key`.
    ///
    /// Keys with no postings get the shared empty iterator.
    pub fn postings(&self, key: &K) -> IntIter<'_> {
        match self.postings.get(key) {
            Some(set) => set.int_iter(),
            None => IntIter::empty(),
        }
    }

    /// Ids referencing every key in `keys`.
    pub fn all_of<'k>(&self, keys: impl IntoIterator<Item = &'k K>) -> Result<SortedIntVec>
    where
        K: 'k,
    {
        let iters = self.lookup(keys);
        log::debug!("all_of over {} posting lists", iters.len());
        merge::intersection(&iters, self.opts)
    }

    /// Ids referencing at least one key in `keys`.
    pub fn any_of<'k>(&self, keys: impl IntoIterator<Item = &'k K>) -> Result<SortedIntVec>
    where
        K: 'k,
    {
        let iters = self.lookup(keys);
        log::debug!("any_of over {} posting lists", iters.len());
        merge::union(&iters, self.opts)
    }

    fn lookup<'k>(&self, keys: impl IntoIterator<Item = &'k K>) -> Vec<IntIter<'_>>
    where
        K: 'k,
    {
        keys.into_iter()
            .map(|key| {
                let iter = self.postings(key);
                log::trace!("{key:?}: {} postings", iter.size());
                iter
            })
            .collect()
    }
}
