use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<FxHasher>>;
pub(crate) type HashSet<T> = hashbrown::HashSet<T, BuildHasherDefault<FxHasher>>;

/// The integer identifier type stored in posting lists (file ids, stub ids).
pub type IntId = u32;
