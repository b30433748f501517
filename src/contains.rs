use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// Associative containers that can answer "is this value (or key) present?".
///
/// Lookups go through [`Borrow`], so a `HashSet<String>` can be queried with a
/// `&str` just like its inherent `contains`.
pub trait Contains<Q: ?Sized> {
    fn contains(&self, value: &Q) -> bool;
}

impl<T, Q, S> Contains<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl<T, Q> Contains<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn contains(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

impl<K, V, Q, S> Contains<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

impl<K, V, Q> Contains<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

#[cfg(feature = "hashbrown")]
impl<T, Q, S> Contains<Q> for hashbrown::HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, value: &Q) -> bool {
        self.contains(value)
    }
}

#[cfg(feature = "hashbrown")]
impl<K, V, Q, S> Contains<Q> for hashbrown::HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, key: &Q) -> bool {
        self.contains_key(key)
    }
}

/// Returns true if `container` holds `value`. For maps, `value` is a key.
pub fn contains<C, Q>(container: &C, value: &Q) -> bool
where
    C: Contains<Q> + ?Sized,
    Q: ?Sized,
{
    Contains::contains(container, value)
}
