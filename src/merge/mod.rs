//! Union and intersection over several posting-list iterators.
//!
//! When every input reports [`IntIterator::has_ascending_order`], the inputs
//! are merged as sorted streams. Otherwise the configured [`Fallback`] is
//! used. The inputs are always scanned through copies made with
//! [`IntIterator::create_copy_in_initial_state`], so the caller's cursors are
//! left where they were.
use std::{cmp::Reverse, collections::BinaryHeap};

use smallvec::SmallVec;

use crate::{
    common::{HashSet, IntId},
    iter::{IntIter, IntIterator},
    sorted::SortedIntVec,
    Result,
};


/// What to do when at least one input is not in ascending order.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Deduplicate (or filter) through a hash set, then sort the result.
    #[default]
    Hash,
    /// Materialize and sort every input, then run the sorted merge.
    Sort,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    pub fallback: Fallback,
}

/// The algorithm a merge will run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    SortedMerge,
    HashDedup,
    SortThenMerge,
}

pub fn choose_strategy(iters: &[IntIter<'_>], opts: MergeOptions) -> Strategy {
    if iters.iter().all(|it| it.has_ascending_order()) {
        return Strategy::SortedMerge;
    }
    match opts.fallback {
        Fallback::Hash => Strategy::HashDedup,
        Fallback::Sort => Strategy::SortThenMerge,
    }
}

/// All ids present in at least one input, in ascending order.
pub fn union(iters: &[IntIter<'_>], opts: MergeOptions) -> Result<SortedIntVec> {
    let strategy = choose_strategy(iters, opts);
    log::trace!("union of {} iterators via {strategy:?}", iters.len());
    match strategy {
        Strategy::SortedMerge => sorted_union(copies(iters)),
        Strategy::HashDedup => {
            let mut seen = HashSet::default();
            for iter in copies(iters) {
                drain(iter, |id| {
                    seen.insert(id);
                })?;
            }
            Ok(SortedIntVec::from_unsorted(seen.into_iter().collect()))
        }
        Strategy::SortThenMerge => {
            let sorted = materialize(iters)?;
            let inputs = sorted.iter().map(|v| v.int_iter()).collect();
            sorted_union(inputs)
        }
    }
}

/// All ids present in every input, in ascending order.
///
/// The intersection of zero inputs is empty.
pub fn intersection(iters: &[IntIter<'_>], opts: MergeOptions) -> Result<SortedIntVec> {
    if iters.is_empty() || iters.iter().any(|it| it.size() == 0) {
        return Ok(SortedIntVec::new());
    }
    let strategy = choose_strategy(iters, opts);
    log::trace!("intersection of {} iterators via {strategy:?}", iters.len());
    match strategy {
        Strategy::SortedMerge => sorted_intersection(copies(iters)),
        Strategy::HashDedup => {
            let mut inputs = copies(iters);
            inputs.sort_by_key(|it| it.size());
            let mut inputs = inputs.into_iter();
            let mut candidates = HashSet::default();
            if let Some(smallest) = inputs.next() {
                drain(smallest, |id| {
                    candidates.insert(id);
                })?;
            }
            for iter in inputs {
                if candidates.is_empty() {
                    break;
                }
                let mut next = HashSet::with_capacity_and_hasher(
                    candidates.len(),
                    Default::default(),
                );
                drain(iter, |id| {
                    if candidates.contains(&id) {
                        next.insert(id);
                    }
                })?;
                candidates = next;
            }
            Ok(SortedIntVec::from_unsorted(candidates.into_iter().collect()))
        }
        Strategy::SortThenMerge => {
            let sorted = materialize(iters)?;
            let inputs = sorted.iter().map(|v| v.int_iter()).collect();
            sorted_intersection(inputs)
        }
    }
}

type Inputs<'a> = SmallVec<[IntIter<'a>; 4]>;

fn copies<'a>(iters: &[IntIter<'a>]) -> Inputs<'a> {
    iters
        .iter()
        .map(|it| it.create_copy_in_initial_state())
        .collect()
}

fn drain(mut iter: IntIter<'_>, mut f: impl FnMut(IntId)) -> Result<()> {
    while iter.has_next() {
        f(iter.next()?);
    }
    Ok(())
}

fn materialize(iters: &[IntIter<'_>]) -> Result<SmallVec<[SortedIntVec; 4]>> {
    copies(iters)
        .into_iter()
        .map(|mut it| -> Result<SortedIntVec> {
            let mut ids = Vec::with_capacity(it.size());
            while it.has_next() {
                ids.push(it.next()?);
            }
            Ok(SortedIntVec::from_unsorted(ids))
        })
        .collect()
}

/// An ascending input along with its current (unconsumed) head.
struct Cursor<'a> {
    iter: IntIter<'a>,
    head: Option<IntId>,
}

impl<'a> Cursor<'a> {
    fn new(iter: IntIter<'a>) -> Result<Cursor<'a>> {
        let mut res = Cursor { iter, head: None };
        res.advance()?;
        Ok(res)
    }

    fn advance(&mut self) -> Result<()> {
        self.head = if self.iter.has_next() {
            Some(self.iter.next()?)
        } else {
            None
        };
        Ok(())
    }

    /// Move the head to the first id greater than or equal to `target`.
    fn seek(&mut self, target: IntId) -> Result<()> {
        if self.head.map_or(true, |head| head >= target) {
            return Ok(());
        }
        if let IntIter::Sorted(sorted) = &mut self.iter {
            sorted.seek(target);
            return self.advance();
        }
        while self.head.map_or(false, |head| head < target) {
            self.advance()?;
        }
        Ok(())
    }
}

fn sorted_union(inputs: Inputs<'_>) -> Result<SortedIntVec> {
    let largest = inputs.iter().map(|it| it.size()).max().unwrap_or(0);
    let mut res = SortedIntVec::with_capacity(largest);
    let mut cursors = SmallVec::<[Cursor; 4]>::with_capacity(inputs.len());
    let mut heap = BinaryHeap::with_capacity(inputs.len());
    for iter in inputs {
        let cursor = Cursor::new(iter)?;
        if let Some(head) = cursor.head {
            heap.push(Reverse((head, cursors.len())));
        }
        cursors.push(cursor);
    }
    let mut last = None;
    while let Some(Reverse((id, i))) = heap.pop() {
        if last != Some(id) {
            res.push(id);
            last = Some(id);
        }
        let cursor = &mut cursors[i];
        cursor.advance()?;
        if let Some(head) = cursor.head {
            heap.push(Reverse((head, i)));
        }
    }
    Ok(res)
}

fn sorted_intersection(mut inputs: Inputs<'_>) -> Result<SortedIntVec> {
    let mut res = SortedIntVec::new();
    // Drive the leapfrog from the smallest input.
    inputs.sort_by_key(|it| it.size());
    let mut cursors = inputs
        .into_iter()
        .map(Cursor::new)
        .collect::<Result<SmallVec<[Cursor; 4]>>>()?;
    let n = cursors.len();
    let Some(mut target) = cursors.first().and_then(|c| c.head) else {
        return Ok(res);
    };
    if n == 1 {
        let cursor = &mut cursors[0];
        while let Some(head) = cursor.head {
            res.push(head);
            cursor.advance()?;
        }
        return Ok(res);
    }
    let mut agree = 1;
    let mut i = 1;
    loop {
        let cursor = &mut cursors[i];
        cursor.seek(target)?;
        match cursor.head {
            None => break,
            Some(head) if head == target => {
                agree += 1;
                if agree == n {
                    res.push(target);
                    cursor.advance()?;
                    match cursor.head {
                        None => break,
                        Some(head) => {
                            target = head;
                            agree = 1;
                        }
                    }
                }
            }
            Some(head) => {
                target = head;
                agree = 1;
            }
        }
        i = (i + 1) % n;
    }
    Ok(res)
}
