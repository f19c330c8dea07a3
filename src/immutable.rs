//! Read-only map snapshots.
//!
//! This module provides [`ImmutableMap`], the map returned by
//! [`to_immutable_map`](crate::factory::to_immutable_map).
//!
//! # Overview
//!
//! An `ImmutableMap` has no `&mut self` API at all, so the compiler already
//! rejects mutation through its inherent methods. Code that works through
//! the [`Mapping`](crate::mapping::Mapping) trait gets a runtime
//! [`UnsupportedOperation`](crate::error::MapError::UnsupportedOperation)
//! error instead.
//!
//! Internally the map uses one of three representations, picked by size:
//!
//! - empty: no allocation
//! - single entry: one shared `(K, V)` pair
//! - general: a shared hash map
//!
//! All three behave identically. Cloning shares the storage.
//!
//! # Examples
//!
//! ```rust
//! use micromaps::immutable::{ImmutableMap, Representation};
//! use std::collections::HashMap;
//!
//! let mut source = HashMap::new();
//! source.insert("one".to_string(), 1);
//! source.insert("two".to_string(), 2);
//!
//! let map: ImmutableMap<String, i32> = source.iter().map(|(k, v)| (k.clone(), *v)).collect();
//! source.insert("three".to_string(), 3);
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("one"), Some(&1));
//! assert_eq!(map.get("three"), None);
//! assert_eq!(map.representation(), Representation::General);
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, hash_map};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use crate::ReferenceCounter;
use crate::capacity::initial_capacity;
use crate::hasher::{DefaultBuildHasher, UnorderedMap};

// =============================================================================
// ImmutableMap Definition
// =============================================================================

/// Which internal representation an [`ImmutableMap`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// No entries.
    Empty,
    /// Exactly one entry.
    Single,
    /// Two or more entries.
    General,
}

enum Storage<K, V, S> {
    Empty,
    Single(ReferenceCounter<(K, V)>),
    General(ReferenceCounter<HashMap<K, V, S>>),
}

/// A hash map that cannot be modified after construction.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `get`          | O(1)       |
/// | `contains_key` | O(1)       |
/// | `len`          | O(1)       |
/// | `clone`        | O(1)       |
/// | `iter`         | O(N)       |
pub struct ImmutableMap<K, V, S = DefaultBuildHasher> {
    storage: Storage<K, V, S>,
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableMap<String, i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableMap<String, i32>: Send, Sync);

impl<K, V, S> ImmutableMap<K, V, S> {
    /// Creates an empty map. Does not allocate.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Storage::Empty,
        }
    }

    /// Creates a map holding exactly one entry.
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        Self {
            storage: Storage::Single(ReferenceCounter::new((key, value))),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Empty => 0,
            Storage::Single(_) => 1,
            Storage::General(map) => map.len(),
        }
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns which internal representation is in use.
    #[must_use]
    pub const fn representation(&self) -> Representation {
        match &self.storage {
            Storage::Empty => Representation::Empty,
            Storage::Single(_) => Representation::Single,
            Storage::General(_) => Representation::General,
        }
    }

    /// Returns an iterator over the entries in unspecified order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        let inner = match &self.storage {
            Storage::Empty => IterInner::Single(None),
            Storage::Single(entry) => IterInner::Single(Some(entry.as_ref())),
            Storage::General(map) => IterInner::General(map.iter()),
        };
        Iter { inner }
    }

    /// Returns an iterator over the keys.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K, V, S> ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns the value for `key`, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micromaps::immutable::ImmutableMap;
    ///
    /// let map: ImmutableMap<String, i32> = ImmutableMap::singleton("key".to_string(), 7);
    /// assert_eq!(map.get("key"), Some(&7));
    /// assert_eq!(map.get("other"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and value for `key`, if present.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.storage {
            Storage::Empty => None,
            Storage::Single(entry) => {
                (<K as Borrow<Q>>::borrow(&entry.0) == key).then_some((&entry.0, &entry.1))
            }
            Storage::General(map) => map.get_key_value(key),
        }
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(key).is_some()
    }
}

impl<K, V, S> ImmutableMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher + Default,
{
    /// Takes a snapshot of borrowed entries.
    ///
    /// The entries are cloned, so later changes to their source are not
    /// visible through the returned map.
    pub(crate) fn snapshot<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        I::IntoIter: ExactSizeIterator,
        K: 'a,
        V: 'a,
    {
        let mut entries = entries.into_iter();
        match entries.len() {
            0 => Self::new(),
            1 => match entries.next() {
                Some((key, value)) => Self::singleton(key.clone(), value.clone()),
                None => Self::new(),
            },
            length => {
                let mut map =
                    HashMap::with_capacity_and_hasher(initial_capacity(length), S::default());
                map.extend(entries.map(|(key, value)| (key.clone(), value.clone())));
                Self::from(map)
            }
        }
    }

    /// Copies the entries into a new mutable map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micromaps::immutable::ImmutableMap;
    ///
    /// let map: ImmutableMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let mut copy = map.to_unordered_map();
    /// copy.insert("c", 3);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    #[must_use]
    pub fn to_unordered_map(&self) -> UnorderedMap<K, V> {
        let mut map = HashMap::with_capacity_and_hasher(
            initial_capacity(self.len()),
            DefaultBuildHasher::default(),
        );
        map.extend(self.iter().map(|(key, value)| (key.clone(), value.clone())));
        map
    }
}

// =============================================================================
// Iterators
// =============================================================================

enum IterInner<'a, K, V> {
    Single(Option<&'a (K, V)>),
    General(hash_map::Iter<'a, K, V>),
}

/// Iterator over the entries of an [`ImmutableMap`].
pub struct Iter<'a, K, V> {
    inner: IterInner<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Single(slot) => slot.take().map(|entry| (&entry.0, &entry.1)),
            IterInner::General(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Single(slot) => {
                let remaining = usize::from(slot.is_some());
                (remaining, Some(remaining))
            }
            IterInner::General(iter) => iter.size_hint(),
        }
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of an [`ImmutableMap`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`ImmutableMap`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ImmutableMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S> Clone for ImmutableMap<K, V, S> {
    fn clone(&self) -> Self {
        let storage = match &self.storage {
            Storage::Empty => Storage::Empty,
            Storage::Single(entry) => Storage::Single(ReferenceCounter::clone(entry)),
            Storage::General(map) => Storage::General(ReferenceCounter::clone(map)),
        };
        Self { storage }
    }
}

impl<K, V, S> Default for ImmutableMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for ImmutableMap<K, V, S> {
    /// Takes ownership of `map`; no other handle can mutate it afterwards.
    fn from(map: HashMap<K, V, S>) -> Self {
        match map.len() {
            0 => Self::new(),
            1 => match map.into_iter().next() {
                Some((key, value)) => Self::singleton(key, value),
                None => Self::new(),
            },
            _ => Self {
                storage: Storage::General(ReferenceCounter::new(map)),
            },
        }
    }
}

impl<K, V, S> From<BTreeMap<K, V>> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Collects entries; a repeated key keeps its last value.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut map = HashMap::with_capacity_and_hasher(initial_capacity(lower), S::default());
        map.extend(iter);
        Self::from(map)
    }
}

impl<K, V, S1, S2> PartialEq<ImmutableMap<K, V, S2>> for ImmutableMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other_value| value == other_value))
    }
}

impl<K, V, S> Eq for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S1, S2> PartialEq<HashMap<K, V, S2>> for ImmutableMap<K, V, S1>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other_value| value == other_value))
    }
}

impl<K, V, S1, S2> PartialEq<ImmutableMap<K, V, S1>> for HashMap<K, V, S2>
where
    K: Hash + Eq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &ImmutableMap<K, V, S1>) -> bool {
        other == self
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ImmutableMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for ImmutableMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for ImmutableMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for ImmutableMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashMap::<K, V, S>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Tests
// =============================================================================
