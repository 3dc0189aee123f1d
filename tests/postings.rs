use id_postings::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A toy word index over a handful of "files".
fn word_index(opts: MergeOptions) -> PostingIndex<String> {
    let files = [
        "fn main prints hello",
        "struct point holds x and y",
        "fn area of a point struct",
        "impl display for point",
        "hello world",
    ];
    let mut index = PostingIndex::with_options(opts);
    for (file_id, text) in files.iter().enumerate() {
        for word in text.split_whitespace() {
            index.add(word.to_string(), file_id as IntId);
        }
    }
    index
}

#[test]
fn query_word_index() {
    init_logging();
    for fallback in [Fallback::Hash, Fallback::Sort] {
        let index = word_index(MergeOptions { fallback });
        let point = "point".to_string();
        let fn_ = "fn".to_string();
        let hello = "hello".to_string();
        let missing = "trait".to_string();

        assert_eq!(index.all_of([&point, &fn_]).unwrap().inner(), &[2]);
        assert_eq!(index.any_of([&fn_, &hello]).unwrap().inner(), &[0, 2, 4]);
        assert!(index.all_of([&point, &missing]).unwrap().is_empty());
        assert_eq!(index.any_of([&missing, &hello]).unwrap().inner(), &[0, 4]);
    }
}

#[test]
fn rescan_without_refetching() {
    init_logging();
    let index = word_index(MergeOptions::default());
    let mut it = index.postings(&"point".to_string());

    // Count with a copy, then materialize with the original.
    let mut counter = it.create_copy_in_initial_state();
    let mut count = 0;
    while counter.has_next() {
        counter.next().unwrap();
        count += 1;
    }
    assert_eq!(count, it.size());

    let mut ids = it.collect_remaining();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(it.next(), Err(Error::StateViolation("set")));
}

#[test]
fn mixed_representations() {
    init_logging();
    let hashed: IntSet = (0..100).filter(|i| i % 2 == 0).collect();
    let sorted: SortedIntVec = (0..100).filter(|i| i % 3 == 0).collect();
    let bits: IntBitSet = (0..100).filter(|i| i % 5 == 0).collect();
    let iters = [hashed.int_iter(), sorted.int_iter(), bits.int_iter()];

    let all = merge::intersection(&iters, MergeOptions::default()).unwrap();
    assert_eq!(all.inner(), &[0, 30, 60, 90]);

    let ascending = [sorted.int_iter(), bits.int_iter()];
    let any = merge::union(&ascending, MergeOptions::default()).unwrap();
    let expected: Vec<IntId> = (0..100).filter(|i| i % 3 == 0 || i % 5 == 0).collect();
    assert_eq!(any.inner(), &expected[..]);
}

#[test]
fn shared_empty_iterator() {
    let index: PostingIndex<u64> = PostingIndex::new();
    let it = index.postings(&42);
    assert!(it.is_shared_empty());
    assert!(it.create_copy_in_initial_state().is_shared_empty());
    assert!(!it.has_next());
}
