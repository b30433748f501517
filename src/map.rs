use tracing::trace;

use crate::clear::Clear;
use crate::owned::Owned;

/// Maps whose entries can be swapped out or removed one key at a time.
pub trait GenericMap: Default + Clear {
    type K;
    type V;

    fn insert(&mut self, key: Self::K, value: Self::V) -> Option<Self::V>;
    fn remove(&mut self, key: &Self::K) -> Option<Self::V>;

    fn remove_and_delete(&mut self, key: &Self::K) -> bool
    where
        Self::V: Owned,
    {
        let released = self.remove(key).map_or(false, |old| old.is_live());
        if released {
            trace!("released value on remove");
        }
        released
    }

    fn replace_and_delete(&mut self, key: Self::K, value: Self::V) -> bool
    where
        Self::V: Owned,
    {
        let released = self.insert(key, value).map_or(false, |old| old.is_live());
        if released {
            trace!("released value on replace");
        }
        released
    }
}
