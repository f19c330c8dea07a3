//! Hasher selection and the map type aliases returned by the factory.
//!
//! The hasher is picked at build time:
//!
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature (without `fxhash`): `ahash::RandomState`
//! - otherwise: `std::collections::hash_map::RandomState`

use std::collections::{BTreeMap, HashMap};

/// The `BuildHasher` used by every hash-based map this crate creates.
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by every hash-based map this crate creates.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The `BuildHasher` used by every hash-based map this crate creates.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Unordered hash map with the crate's hasher.
pub type UnorderedMap<K, V> = HashMap<K, V, DefaultBuildHasher>;

/// Insertion-ordered hash map with the crate's hasher.
#[cfg(feature = "ordered")]
pub type OrderedMap<K, V> = indexmap::IndexMap<K, V, DefaultBuildHasher>;

/// Map ordered by the natural `Ord` of its keys.
pub type SortedMap<K, V> = BTreeMap<K, V>;

/// Creates an empty [`UnorderedMap`] with exactly the requested capacity hint.
pub(crate) fn unordered_with_capacity<K, V>(capacity: usize) -> UnorderedMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}

/// Creates an empty [`OrderedMap`] with exactly the requested capacity hint.
#[cfg(feature = "ordered")]
pub(crate) fn ordered_with_capacity<K, V>(capacity: usize) -> OrderedMap<K, V> {
    indexmap::IndexMap::with_capacity_and_hasher(capacity, DefaultBuildHasher::default())
}
