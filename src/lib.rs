//! Helpers for std collections that hold owning pointers.
//!
//! [`contains`] answers membership for any set or map. [`delete_values`]
//! releases every boxed element of a sequence, set, or map and leaves the
//! container empty; it only accepts containers whose elements are [`Owned`],
//! so a `Vec<u32>` is a type error rather than a silent no-op.
//!
//! ```
//! use std::collections::{BTreeSet, HashMap};
//! use owned_containers::{contains, delete_values};
//!
//! let primes = BTreeSet::from([3, 5, 7]);
//! assert!(contains(&primes, &5));
//! assert!(!contains(&primes, &9));
//!
//! let mut points = HashMap::from([("x", Box::new((0, 1))), ("y", Box::new((2, 3)))]);
//! assert_eq!(delete_values(&mut points), 2);
//! assert!(points.is_empty());
//! ```

pub use self::clear::Clear;
pub use self::contains::{contains, Contains};
pub use self::delete::{delete_values, OwnedValues};
pub use self::map::GenericMap;
pub use self::owned::Owned;

mod btree_map_impl;
mod hash_map_impl;

pub mod clear;
pub mod contains;
pub mod delete;
pub mod map;
pub mod owned;
