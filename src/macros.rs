//! Map literal macros.
//!
//! - [`fixed_map!`](crate::fixed_map!): unordered map, at least one entry
//! - [`fixed_sorted_map!`](crate::fixed_sorted_map!): map ordered by key, at least one entry
//! - [`immutable_map!`](crate::immutable_map!): read-only map, any number of entries
//!
//! Entries are written `key => value`, so a key without a value does not
//! parse.

/// Builds a pre-sized unordered map from `key => value` entries.
///
/// # Examples
///
/// ```
/// use micromaps::fixed_map;
///
/// let map = fixed_map! {
///     "x" => 1,
///     "a" => 2,
/// };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("x"), Some(&1));
/// ```
#[macro_export]
macro_rules! fixed_map {
    ($key1:expr => $value1:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::factory::fixed_map($key1, $value1, [$(($key, $value)),*])
    };
}

/// Builds a map ordered by key from `key => value` entries.
///
/// # Examples
///
/// ```
/// use micromaps::fixed_sorted_map;
///
/// let map = fixed_sorted_map! { "x" => "y", "a" => "b" };
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, vec!["a", "x"]);
/// ```
#[macro_export]
macro_rules! fixed_sorted_map {
    ($key1:expr => $value1:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::factory::fixed_sorted_map($key1, $value1, [$(($key, $value)),*])
    };
}

/// Builds an [`ImmutableMap`](crate::immutable::ImmutableMap) from
/// `key => value` entries.
///
/// # Examples
///
/// ```
/// use micromaps::immutable::{ImmutableMap, Representation};
/// use micromaps::immutable_map;
///
/// let empty: ImmutableMap<&str, i32> = immutable_map! {};
/// assert!(empty.is_empty());
///
/// let map = immutable_map! { "x" => 1 };
/// assert_eq!(map.representation(), Representation::Single);
/// ```
#[macro_export]
macro_rules! immutable_map {
    () => {
        $crate::immutable::ImmutableMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        <$crate::immutable::ImmutableMap<_, _> as ::core::iter::FromIterator<_>>::from_iter([
            $(($key, $value)),+
        ])
    };
}
