//! A chained builder for map literals.
//!
//! [`MapBuilder`] collects entries with `.with(key, value)` and turns them
//! into any of the crate's map kinds. Entries are applied in the order they
//! were added, so a repeated key keeps its last value.
//!
//! # Examples
//!
//! ```rust
//! use micromaps::builder::MapBuilder;
//!
//! let builder = MapBuilder::new()
//!     .with("x", "y")
//!     .with("a", "b");
//!
//! let sorted = builder.clone().build_sorted();
//! let keys: Vec<_> = sorted.keys().copied().collect();
//! assert_eq!(keys, vec!["a", "x"]);
//!
//! let unordered = builder.build_unordered();
//! assert_eq!(unordered.get("x"), Some(&"y"));
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::capacity::trace_presize;
use crate::hasher::{SortedMap, UnorderedMap, unordered_with_capacity};
use crate::immutable::ImmutableMap;

#[cfg(feature = "ordered")]
use crate::hasher::{OrderedMap, ordered_with_capacity};

/// Collects key/value pairs for one of the `build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapBuilder<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> MapBuilder<K, V> {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty builder with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Adds an entry.
    #[must_use]
    pub fn with(mut self, key: K, value: V) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Returns the number of entries added so far, repeated keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a pre-sized unordered map.
    #[must_use]
    pub fn build_unordered(self) -> UnorderedMap<K, V>
    where
        K: Hash + Eq,
    {
        let mut map = unordered_with_capacity(trace_presize("build_unordered", self.entries.len()));
        map.extend(self.entries);
        map
    }

    /// Builds a pre-sized map that iterates in the order keys were first added.
    #[cfg(feature = "ordered")]
    #[must_use]
    pub fn build_ordered(self) -> OrderedMap<K, V>
    where
        K: Hash + Eq,
    {
        let mut map = ordered_with_capacity(trace_presize("build_ordered", self.entries.len()));
        map.extend(self.entries);
        map
    }

    /// Builds a map ordered by key.
    #[must_use]
    pub fn build_sorted(self) -> SortedMap<K, V>
    where
        K: Ord,
    {
        self.entries.into_iter().collect::<BTreeMap<_, _>>()
    }

    /// Builds a read-only map.
    #[must_use]
    pub fn build_immutable(self) -> ImmutableMap<K, V>
    where
        K: Hash + Eq,
    {
        self.entries.into_iter().collect()
    }
}

impl<K, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for MapBuilder<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> FromIterator<(K, V)> for MapBuilder<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
