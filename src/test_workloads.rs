use std::{collections::BTreeSet, iter::once};

use crate::{IntBitSet, IntId, IntIter, IntIterator, IntSet, SortedIntVec};

#[derive(Debug)]
pub(crate) enum Operation {
    Insert(IntId),
    Remove(IntId),
    Dump,
}

/// Run `ops` against every set representation and a `BTreeSet` oracle,
/// checking the iterators over each representation on every `Dump`.
pub(crate) fn test_sets(ops: impl IntoIterator<Item = Operation>) {
    let mut oracle = BTreeSet::<IntId>::new();
    let mut hashed = IntSet::default();
    let mut bits = IntBitSet::default();
    for op in ops {
        match op {
            Operation::Insert(i) => {
                assert_eq!(oracle.contains(&i), hashed.contains(i));
                assert_eq!(oracle.contains(&i), bits.contains(i));
                let inserted = oracle.insert(i);
                assert_eq!(inserted, hashed.insert(i));
                assert_eq!(inserted, bits.insert(i));
                assert_eq!(oracle.len(), hashed.len());
                assert_eq!(oracle.len(), bits.len());
            }
            Operation::Remove(i) => {
                let removed = oracle.remove(&i);
                assert_eq!(removed, hashed.remove(i));
                assert_eq!(removed, bits.remove(i));
                assert!(!hashed.contains(i));
                assert!(!bits.contains(i));
                assert_eq!(oracle.len(), hashed.len());
                assert_eq!(oracle.len(), bits.len());
            }
            Operation::Dump => {
                let expected: Vec<IntId> = oracle.iter().copied().collect();
                let sorted: SortedIntVec = hashed.iter().collect();
                assert_eq!(expected, sorted.inner());
                check_scan(hashed.int_iter(), &expected);
                check_scan(bits.int_iter(), &expected);
                check_scan(sorted.int_iter(), &expected);
            }
        }
    }
}

/// Scan `iter` and a copy of it, checking both against `expected` (which is
/// sorted).
pub(crate) fn check_scan(mut iter: IntIter<'_>, expected: &[IntId]) {
    assert_eq!(iter.size(), expected.len());
    let mut copy = iter.create_copy_in_initial_state();
    let mut got = Vec::with_capacity(expected.len());
    while iter.has_next() {
        got.push(iter.next().unwrap());
        assert_eq!(iter.size(), expected.len());
    }
    assert!(iter.next().is_err());
    if iter.has_ascending_order() {
        assert!(got.windows(2).all(|w| w[0] < w[1]), "{got:?}");
    }
    got.sort_unstable();
    assert_eq!(got, expected);

    // The copy was made before the scan and is unaffected by it.
    let mut from_copy = copy.collect_remaining();
    from_copy.sort_unstable();
    assert_eq!(from_copy, expected);
    assert!(!copy.has_next());
}

pub(crate) fn insert_remove_sparse() -> impl Iterator<Item = Operation> {
    const N: usize = 1000;
    // Bounded so the bitmap representation stays small.
    let to_insert: BTreeSet<IntId> = (0..N).map(|_| rand::random::<IntId>() >> 12).collect();
    let in_sequence: Vec<IntId> = to_insert.into_iter().collect();
    let half = in_sequence.len() / 2;
    let in_set: Vec<IntId> = in_sequence[0..half].to_vec();
    let not_in_set: Vec<IntId> = in_sequence[half..].to_vec();
    in_set
        .clone()
        .into_iter()
        .map(Operation::Insert)
        .chain(once(Operation::Dump))
        .chain(not_in_set.into_iter().map(Operation::Remove))
        .chain(once(Operation::Dump))
        .chain(in_set.into_iter().map(Operation::Remove))
        .chain(once(Operation::Dump))
}

pub(crate) fn insert_remove_dense() -> impl Iterator<Item = Operation> {
    (0..1000)
        .map(Operation::Insert)
        .chain(once(Operation::Dump))
        .chain((0..1000).step_by(3).map(Operation::Remove))
        .chain(once(Operation::Dump))
        .chain((0..1000).map(Operation::Remove))
        .chain(once(Operation::Dump))
}
