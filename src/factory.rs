//! Stateless constructors for pre-sized, fixed, extended and immutable maps.
//!
//! # Overview
//!
//! | Function                | Returns           | Pre-sized for                     |
//! |-------------------------|-------------------|-----------------------------------|
//! | [`sized_unordered_map`] | [`UnorderedMap`]  | `expected_size`                   |
//! | [`sized_ordered_map`]   | [`OrderedMap`]    | `expected_size`                   |
//! | [`to_immutable_map`]    | [`ImmutableMap`]  | size of the source                |
//! | [`fixed_map`]           | [`UnorderedMap`]  | `1 + pairs(rest)`                 |
//! | [`extend`]              | [`UnorderedMap`]  | `len(original) + 1 + pairs(rest)` |
//! | [`fixed_sorted_map`]    | [`SortedMap`]     | (not applicable)                  |
//!
//! Every hash-based result is sized with
//! [`initial_capacity`](crate::capacity::initial_capacity), so inserting the
//! expected number of entries never reallocates.
//!
//! The `try_*` variants take the extra entries as one flat
//! [`KeyValueList`] and fail with [`MapError::InvalidArgument`] when a key
//! has no value. [`try_extend`] additionally fails with
//! [`MapError::NullArgument`] when the original map is missing.
//!
//! In every constructor entries are inserted left to right, so a repeated
//! key keeps its last value.
//!
//! # Examples
//!
//! ```rust
//! use micromaps::factory::{extend, fixed_map, fixed_sorted_map};
//!
//! let base = fixed_map("old", "value", [("x", "y")]);
//! let extended = extend(&base, "x", "z", [("a", "b")]);
//!
//! assert_eq!(base.get("x"), Some(&"y"));     // Original unchanged
//! assert_eq!(extended.get("x"), Some(&"z")); // New map
//! assert_eq!(extended.len(), 3);
//!
//! let sorted = fixed_sorted_map("x", "y", [("a", "b")]);
//! let keys: Vec<_> = sorted.keys().copied().collect();
//! assert_eq!(keys, vec!["a", "x"]);
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::capacity::trace_presize;
use crate::error::{MapError, NullArgumentError};
use crate::hasher::{SortedMap, UnorderedMap, unordered_with_capacity};
use crate::immutable::ImmutableMap;
use crate::pairs::{KeyValueList, Pairs};

#[cfg(feature = "ordered")]
use crate::hasher::{OrderedMap, ordered_with_capacity};

// =============================================================================
// Pre-sized maps
// =============================================================================

/// Returns an empty unordered map that holds `expected_size` entries
/// without resizing.
///
/// # Examples
///
/// ```rust
/// use micromaps::factory::sized_unordered_map;
///
/// let mut map = sized_unordered_map(100);
/// let capacity = map.capacity();
/// for index in 0..100 {
///     map.insert(index, index * 2);
/// }
/// assert_eq!(map.capacity(), capacity);
/// ```
#[must_use]
pub fn sized_unordered_map<K, V>(expected_size: usize) -> UnorderedMap<K, V> {
    unordered_with_capacity(trace_presize("sized_unordered_map", expected_size))
}

/// Returns an empty insertion-ordered map that holds `expected_size`
/// entries without resizing.
///
/// # Examples
///
/// ```rust
/// use micromaps::factory::sized_ordered_map;
///
/// let mut map = sized_ordered_map(3);
/// map.insert("c", 3);
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, vec!["c", "a", "b"]);
/// ```
#[cfg(feature = "ordered")]
#[must_use]
pub fn sized_ordered_map<K, V>(expected_size: usize) -> OrderedMap<K, V> {
    ordered_with_capacity(trace_presize("sized_ordered_map", expected_size))
}

// =============================================================================
// Immutable snapshots
// =============================================================================

/// Returns a read-only snapshot of `original`.
///
/// `None` and empty maps give the empty representation, a single entry
/// gives the single-entry representation, and anything larger is copied
/// into a new hash map. Later changes to `original` are not visible through
/// the result.
///
/// Works with any map whose shared reference iterates `(&K, &V)` with an
/// exact size: `HashMap`, `IndexMap`, `BTreeMap` and `ImmutableMap` itself.
///
/// # Examples
///
/// ```rust
/// use micromaps::factory::to_immutable_map;
/// use micromaps::immutable::Representation;
/// use std::collections::HashMap;
///
/// let missing: Option<&HashMap<String, i32>> = None;
/// assert!(to_immutable_map(missing).is_empty());
///
/// let mut source = HashMap::new();
/// source.insert("x".to_string(), 1);
/// let frozen = to_immutable_map(Some(&source));
/// source.insert("y".to_string(), 2);
///
/// assert_eq!(frozen.len(), 1);
/// assert_eq!(frozen.representation(), Representation::Single);
/// ```
#[must_use]
pub fn to_immutable_map<'a, K, V, M>(original: Option<&'a M>) -> ImmutableMap<K, V>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    <&'a M as IntoIterator>::IntoIter: ExactSizeIterator,
    K: Clone + Hash + Eq + 'a,
    V: Clone + 'a,
{
    let map = match original {
        Some(original) => ImmutableMap::snapshot(original),
        None => ImmutableMap::new(),
    };
    tracing::trace!(
        representation = ?map.representation(),
        length = map.len(),
        "built immutable map"
    );
    map
}

// =============================================================================
// Fixed maps
// =============================================================================

/// Returns a new unordered map holding `key1 -> value1` and every pair of
/// `rest`, inserted in order.
///
/// The map is pre-sized from the lower bound of `rest`'s `size_hint`, which
/// is exact for arrays, vectors and [`Pairs`]. A `rest` with a loose lower
/// bound (a `filter` chain, say) still contributes every pair, but the map
/// may grow while inserting them.
///
/// # Examples
///
/// ```rust
/// use micromaps::factory::fixed_map;
///
/// let single = fixed_map("x", 1, []);
/// assert_eq!(single.len(), 1);
///
/// let map = fixed_map("x", 1, [("a", 2), ("x", 3)]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("x"), Some(&3)); // Last write wins
/// ```
#[must_use]
pub fn fixed_map<K, V, I>(key1: K, value1: V, rest: I) -> UnorderedMap<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    let rest = rest.into_iter();
    let (rest_pairs, _) = rest.size_hint();
    let mut map = unordered_with_capacity(trace_presize("fixed_map", rest_pairs.saturating_add(1)));
    map.insert(key1, value1);
    map.extend(rest);
    map
}

/// Returns a new unordered map holding every entry of `original`, then
/// `key1 -> value1`, then every pair of `rest`.
///
/// `original` is never modified; the new entries overwrite copied ones.
///
/// Pre-sizing counts `original` exactly and `rest` by the lower bound of its
/// `size_hint`, as in [`fixed_map`].
#[must_use]
pub fn extend<'a, K, V, M, I>(original: &'a M, key1: K, value1: V, rest: I) -> UnorderedMap<K, V>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    <&'a M as IntoIterator>::IntoIter: ExactSizeIterator,
    K: Clone + Hash + Eq + 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = (K, V)>,
{
    let original = IntoIterator::into_iter(original);
    let rest = rest.into_iter();
    let (rest_pairs, _) = rest.size_hint();
    let expected_size = original.len().saturating_add(1).saturating_add(rest_pairs);

    let mut map = unordered_with_capacity(trace_presize("extend", expected_size));
    map.extend(original.map(|(key, value)| (key.clone(), value.clone())));
    map.insert(key1, value1);
    map.extend(rest);
    map
}

/// Returns a new map ordered by key holding `key1 -> value1` and every pair
/// of `rest`, inserted in order.
#[must_use]
pub fn fixed_sorted_map<K, V, I>(key1: K, value1: V, rest: I) -> SortedMap<K, V>
where
    K: Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = BTreeMap::new();
    map.insert(key1, value1);
    map.extend(rest);
    map
}

// =============================================================================
// Flat key/value list variants
// =============================================================================

fn validate<T>(function_name: &'static str, rest: KeyValueList<T>) -> Result<Pairs<T>, MapError> {
    rest.into_pairs().map_err(|error| {
        tracing::debug!(
            function_name,
            length = error.length,
            "rejected unpaired key/value list"
        );
        MapError::from(error)
    })
}

/// Like [`fixed_map`], taking the extra entries as one flat list.
///
/// # Errors
///
/// Returns [`MapError::InvalidArgument`] if `rest` has odd length.
///
/// # Examples
///
/// ```rust
/// use micromaps::error::MapError;
/// use micromaps::factory::try_fixed_map;
///
/// let map = try_fixed_map("x", "y", ["a", "b"]).unwrap();
/// assert_eq!(map.get("a"), Some(&"b"));
///
/// let error = try_fixed_map("x", "y", ["a"]).unwrap_err();
/// assert!(matches!(error, MapError::InvalidArgument(_)));
/// ```
pub fn try_fixed_map<T, L>(key1: T, value1: T, rest: L) -> Result<UnorderedMap<T, T>, MapError>
where
    T: Hash + Eq,
    L: Into<KeyValueList<T>>,
{
    let pairs = validate("try_fixed_map", rest.into())?;
    Ok(fixed_map(key1, value1, pairs))
}

/// Like [`extend`], accepting a missing original and a flat list of extra
/// entries.
///
/// # Errors
///
/// Returns [`MapError::NullArgument`] if `original` is `None`, checked
/// first, and [`MapError::InvalidArgument`] if `rest` has odd length.
pub fn try_extend<'a, T, M, L>(
    original: Option<&'a M>,
    key1: T,
    value1: T,
    rest: L,
) -> Result<UnorderedMap<T, T>, MapError>
where
    &'a M: IntoIterator<Item = (&'a T, &'a T)>,
    <&'a M as IntoIterator>::IntoIter: ExactSizeIterator,
    T: Clone + Hash + Eq + 'a,
    L: Into<KeyValueList<T>>,
{
    let Some(original) = original else {
        let error = NullArgumentError {
            function_name: "try_extend",
            parameter_name: "original",
        };
        tracing::debug!(
            function_name = error.function_name,
            parameter_name = error.parameter_name,
            "rejected missing argument"
        );
        return Err(error.into());
    };
    let pairs = validate("try_extend", rest.into())?;
    Ok(extend(original, key1, value1, pairs))
}

/// Like [`fixed_sorted_map`], taking the extra entries as one flat list.
///
/// # Errors
///
/// Returns [`MapError::InvalidArgument`] if `rest` has odd length.
pub fn try_fixed_sorted_map<T, L>(key1: T, value1: T, rest: L) -> Result<SortedMap<T, T>, MapError>
where
    T: Ord,
    L: Into<KeyValueList<T>>,
{
    let pairs = validate("try_fixed_sorted_map", rest.into())?;
    Ok(fixed_sorted_map(key1, value1, pairs))
}
