//! A uniform, fallible read/write interface over map types.
//!
//! [`Mapping`] lets code treat `HashMap`, `IndexMap`, `BTreeMap` and
//! [`ImmutableMap`] alike. Mutations return `Result`: the mutable maps
//! always succeed, while every mutation on an [`ImmutableMap`] fails with
//! [`MapError::UnsupportedOperation`].
//!
//! # Examples
//!
//! ```rust
//! use micromaps::error::MapError;
//! use micromaps::factory::{fixed_map, to_immutable_map};
//! use micromaps::mapping::Mapping;
//!
//! let mut mutable = fixed_map("x", 1, []);
//! assert_eq!(mutable.put("y", 2), Ok(None));
//! assert_eq!(mutable.size(), 2);
//!
//! let mut frozen = to_immutable_map(Some(&mutable));
//! assert!(matches!(frozen.put("z", 3), Err(MapError::UnsupportedOperation(_))));
//! assert_eq!(frozen.size(), 2);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::error::MapError;
use crate::immutable::ImmutableMap;

/// Read/write access to a key/value mapping.
pub trait Mapping<K, V> {
    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_vacant(&self) -> bool {
        self.size() == 0
    }

    /// Returns the value for `key`, if present.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    /// Inserts an entry, returning the previous value for the key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnsupportedOperation`] if the map is immutable.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError>;

    /// Inserts every entry in order; a repeated key keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnsupportedOperation`] if the map is immutable.
    fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Removes `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnsupportedOperation`] if the map is immutable.
    fn remove_key(&mut self, key: &K) -> Result<Option<V>, MapError>;

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnsupportedOperation`] if the map is immutable.
    fn remove_all(&mut self) -> Result<(), MapError>;

    /// Walks the entries and removes those for which `predicate` returns `true`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::UnsupportedOperation`] if the map is immutable.
    fn remove_where<F>(&mut self, predicate: F) -> Result<(), MapError>
    where
        F: FnMut(&K, &mut V) -> bool,
        Self: Sized;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key, value))
    }

    fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.extend(entries);
        Ok(())
    }

    fn remove_key(&mut self, key: &K) -> Result<Option<V>, MapError> {
        Ok(self.remove(key))
    }

    fn remove_all(&mut self) -> Result<(), MapError> {
        self.clear();
        Ok(())
    }

    fn remove_where<F>(&mut self, mut predicate: F) -> Result<(), MapError>
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.retain(|key, value| !predicate(key, value));
        Ok(())
    }
}

#[cfg(feature = "ordered")]
impl<K, V, S> Mapping<K, V> for indexmap::IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key, value))
    }

    fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.extend(entries);
        Ok(())
    }

    /// Removes `key` keeping the insertion order of the remaining entries.
    fn remove_key(&mut self, key: &K) -> Result<Option<V>, MapError> {
        Ok(self.shift_remove(key))
    }

    fn remove_all(&mut self) -> Result<(), MapError> {
        self.clear();
        Ok(())
    }

    fn remove_where<F>(&mut self, mut predicate: F) -> Result<(), MapError>
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.retain(|key, value| !predicate(key, value));
        Ok(())
    }
}

impl<K, V> Mapping<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.insert(key, value))
    }

    fn put_all<I>(&mut self, entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.extend(entries);
        Ok(())
    }

    fn remove_key(&mut self, key: &K) -> Result<Option<V>, MapError> {
        Ok(self.remove(key))
    }

    fn remove_all(&mut self) -> Result<(), MapError> {
        self.clear();
        Ok(())
    }

    fn remove_where<F>(&mut self, mut predicate: F) -> Result<(), MapError>
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.retain(|key, value| !predicate(key, value));
        Ok(())
    }
}

/// Logs and builds the error every rejected mutation returns.
fn reject(operation: &'static str) -> MapError {
    tracing::debug!(operation, "rejected mutation of an immutable map");
    MapError::unsupported(operation)
}

impl<K, V, S> Mapping<K, V> for ImmutableMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn size(&self) -> usize {
        self.len()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn put(&mut self, _key: K, _value: V) -> Result<Option<V>, MapError> {
        Err(reject("put"))
    }

    /// Fails even when `entries` is empty.
    fn put_all<I>(&mut self, _entries: I) -> Result<(), MapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Err(reject("put_all"))
    }

    fn remove_key(&mut self, _key: &K) -> Result<Option<V>, MapError> {
        Err(reject("remove_key"))
    }

    fn remove_all(&mut self) -> Result<(), MapError> {
        Err(reject("remove_all"))
    }

    /// Fails without calling `predicate`.
    fn remove_where<F>(&mut self, _predicate: F) -> Result<(), MapError>
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        Err(reject("remove_where"))
    }
}
