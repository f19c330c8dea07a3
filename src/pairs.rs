//! Flat key/value lists.
//!
//! [`KeyValueList`] is the typed form of a "map literal" written as one flat
//! sequence alternating key, value, key, value. The list itself accepts any
//! length; turning it into pairs fails when a trailing key has no value.
//!
//! # Examples
//!
//! ```rust
//! use micromaps::pairs::KeyValueList;
//!
//! let list = KeyValueList::from(["x", "y", "a", "b"]);
//! let pairs: Vec<_> = list.into_pairs().unwrap().collect();
//! assert_eq!(pairs, vec![("x", "y"), ("a", "b")]);
//!
//! let unpaired = KeyValueList::from(["x", "y", "a"]);
//! assert!(unpaired.into_pairs().is_err());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::UnpairedKeyError;

/// A flat sequence alternating key and value.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyValueList<T> {
    items: Vec<T>,
}

impl<T> KeyValueList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends one item, key or value depending on its position.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Returns the number of raw items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if every key has a matching value.
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.items.len() % 2 == 0
    }

    /// Returns the number of complete key/value pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.items.len() / 2
    }

    /// Converts the list into an iterator of `(key, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`UnpairedKeyError`] if the list has odd length.
    pub fn into_pairs(self) -> Result<Pairs<T>, UnpairedKeyError> {
        if !self.is_paired() {
            return Err(UnpairedKeyError {
                length: self.items.len(),
            });
        }
        Ok(Pairs {
            items: self.items.into_iter(),
        })
    }
}

impl<T> Default for KeyValueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for KeyValueList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> From<Vec<T>> for KeyValueList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for KeyValueList<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: Vec::from(items),
        }
    }
}

impl<T> FromIterator<T> for KeyValueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for KeyValueList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Iterator over the `(key, value)` pairs of a validated [`KeyValueList`].
pub struct Pairs<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Iterator for Pairs<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.items.next()?;
        let value = self.items.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() / 2;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Pairs<T> {}

impl<T> FusedIterator for Pairs<T> {}
