use std::any::type_name;
use std::collections::{btree_map, btree_set, hash_map, hash_set, vec_deque};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::slice;

use tracing::trace;

use crate::clear::Clear;
use crate::owned::Owned;

/// A sequence, set, or map whose elements (or values, for maps) are owning
/// pointers. Containers of plain values don't qualify:
///
/// ```compile_fail,E0277
/// let mut counts: Vec<u32> = vec![1, 2];
/// owned_containers::delete_values(&mut counts);
/// ```
///
/// ```compile_fail,E0277
/// let mut counts = std::collections::HashMap::from([("a", 1u8)]);
/// owned_containers::delete_values(&mut counts);
/// ```
pub trait OwnedValues: Clear {
    type Ptr: Owned;
    type Values<'a>: Iterator<Item = &'a Self::Ptr>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_>;
}

/// Drops every owned pointee, empties `container`, and returns how many were released.
pub fn delete_values<C>(container: &mut C) -> usize
where
    C: OwnedValues + ?Sized,
{
    let released = container
        .owned_values()
        .filter(|ptr| ptr.is_live())
        .count();
    container.clear();
    trace!(released, container = type_name::<C>(), "deleted owned values");
    released
}

impl<P: Owned> OwnedValues for Vec<P> {
    type Ptr = P;
    type Values<'a> = slice::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<P: Owned> OwnedValues for VecDeque<P> {
    type Ptr = P;
    type Values<'a> = vec_deque::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

#[cfg(feature = "arrayvec")]
impl<P: Owned, const N: usize> OwnedValues for arrayvec::ArrayVec<P, N> {
    type Ptr = P;
    type Values<'a> = slice::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<P: Owned, S> OwnedValues for HashSet<P, S> {
    type Ptr = P;
    type Values<'a> = hash_set::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<P: Owned> OwnedValues for BTreeSet<P> {
    type Ptr = P;
    type Values<'a> = btree_set::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

impl<K, P: Owned, S> OwnedValues for HashMap<K, P, S> {
    type Ptr = P;
    type Values<'a> = hash_map::Values<'a, K, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.values()
    }
}

impl<K, P: Owned> OwnedValues for BTreeMap<K, P> {
    type Ptr = P;
    type Values<'a> = btree_map::Values<'a, K, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.values()
    }
}

#[cfg(feature = "hashbrown")]
impl<P: Owned, S> OwnedValues for hashbrown::HashSet<P, S> {
    type Ptr = P;
    type Values<'a> = hashbrown::hash_set::Iter<'a, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.iter()
    }
}

#[cfg(feature = "hashbrown")]
impl<K, P: Owned, S> OwnedValues for hashbrown::HashMap<K, P, S> {
    type Ptr = P;
    type Values<'a> = hashbrown::hash_map::Values<'a, K, P>
    where
        Self: 'a;

    fn owned_values(&self) -> Self::Values<'_> {
        self.values()
    }
}
