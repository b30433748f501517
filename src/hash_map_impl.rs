use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::GenericMap;

impl<K: Eq + Hash, V, S: BuildHasher + Default> GenericMap for HashMap<K, V, S> {
    type K = K;
    type V = V;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}

#[cfg(feature = "hashbrown")]
impl<K: Eq + Hash, V, S: BuildHasher + Default> GenericMap for hashbrown::HashMap<K, V, S> {
    type K = K;
    type V = V;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}
