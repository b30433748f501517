use std::collections::BTreeMap;

use crate::GenericMap;

impl<K: Ord, V> GenericMap for BTreeMap<K, V> {
    type K = K;
    type V = V;

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.remove(key)
    }
}
