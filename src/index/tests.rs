use crate::{Fallback, IntIterator, MergeOptions, PostingIndex};

fn sample() -> PostingIndex<&'static str> {
    let mut index = PostingIndex::new();
    for (key, ids) in [
        ("fn", &[1, 2, 3, 4][..]),
        ("struct", &[2, 4, 6][..]),
        ("impl", &[4, 5, 6][..]),
    ] {
        for id in ids {
            assert!(index.add(key, *id));
        }
    }
    index
}

#[test]
fn missing_key_gets_shared_empty() {
    let index = sample();
    let it = index.postings(&"enum");
    assert!(it.is_shared_empty());
    assert_eq!(it.size(), 0);
}

#[test]
fn postings_for_key() {
    let index = sample();
    let mut it = index.postings(&"struct");
    assert!(!it.is_shared_empty());
    assert_eq!(it.size(), 3);
    assert!(!it.has_ascending_order());
    let mut ids = it.collect_remaining();
    ids.sort();
    assert_eq!(ids, vec![2, 4, 6]);
}

#[test]
fn add_and_remove() {
    let mut index = sample();
    assert!(!index.add("fn", 1));
    assert!(index.contains(&"fn", 1));
    assert!(index.remove(&"fn", 1));
    assert!(!index.remove(&"fn", 1));
    assert!(!index.contains(&"fn", 1));
    assert!(!index.remove(&"enum", 1));

    for id in [4, 5, 6] {
        assert!(index.remove(&"impl", id));
    }
    assert_eq!(index.len(), 2);
    assert!(index.postings(&"impl").is_shared_empty());
}

#[test]
fn remove_id_everywhere() {
    let mut index = sample();
    assert_eq!(index.remove_id(4), 3);
    assert_eq!(index.remove_id(4), 0);
    assert_eq!(index.remove_id(1), 1);
    assert_eq!(index.postings(&"fn").size(), 2);
    assert_eq!(index.len(), 3);
}

#[test]
fn replace_postings() {
    let mut index = sample();
    index.replace("fn", [9, 10].into_iter().collect());
    assert_eq!(index.postings(&"fn").size(), 2);
    index.replace("fn", Default::default());
    assert!(index.postings(&"fn").is_shared_empty());
    let mut keys: Vec<_> = index.keys().copied().collect();
    keys.sort();
    assert_eq!(keys, vec!["impl", "struct"]);
}

#[test]
fn queries() {
    for fallback in [Fallback::Hash, Fallback::Sort] {
        let mut index = PostingIndex::with_options(MergeOptions { fallback });
        for (key, id) in sample_pairs() {
            index.add(key, id);
        }
        assert_eq!(index.options().fallback, fallback);
        assert_eq!(index.all_of(&["fn", "struct"]).unwrap().inner(), &[2, 4]);
        assert_eq!(index.all_of(&["fn", "struct", "impl"]).unwrap().inner(), &[4]);
        assert!(index.all_of(&["fn", "enum"]).unwrap().is_empty());
        assert!(index.all_of(&[]).unwrap().is_empty());
        assert_eq!(
            index.any_of(&["struct", "impl", "enum"]).unwrap().inner(),
            &[2, 4, 5, 6]
        );
    }
}

fn sample_pairs() -> Vec<(&'static str, u32)> {
    let index = sample();
    let mut res = Vec::new();
    for key in ["fn", "struct", "impl"] {
        let mut it = index.postings(&key);
        for id in it.ids() {
            res.push((key, id));
        }
    }
    res
}
