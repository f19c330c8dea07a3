//! # micromaps
//!
//! Small, stateless helpers for constructing maps.
//!
//! ## Overview
//!
//! - **Pre-sized maps**: hash-based and insertion-ordered maps sized so that
//!   the expected number of entries fits without a resize
//! - **Fixed maps**: map literals from a first entry plus more pairs
//! - **Extension**: a new map from an existing one plus more pairs, leaving
//!   the original untouched
//! - **Immutable snapshots**: read-only copies that reject every mutation
//!
//! ## Feature Flags
//!
//! - `ordered` (default): insertion-ordered maps backed by `indexmap`
//! - `arc`: share immutable map storage through `Arc` instead of `Rc`
//! - `serde`: serialization for `ImmutableMap` and `KeyValueList`
//! - `fxhash` / `ahash`: faster non-cryptographic hashers
//! - `full`: `ordered`, `arc` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use micromaps::prelude::*;
//!
//! let base = fixed_map("old1", "old1", [("old2", "old2"), ("x", "y")]);
//! let extended = extend(&base, "x", "y", [("a", "b")]);
//! assert_eq!(extended.len(), 4);
//! assert_eq!(base.len(), 3);
//!
//! let mut frozen = to_immutable_map(Some(&extended));
//! assert_eq!(frozen, extended);
//! assert!(frozen.remove_all().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the factory functions and the types they return.
///
/// # Usage
///
/// ```rust
/// use micromaps::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::MapBuilder;
    pub use crate::error::MapError;
    pub use crate::factory::*;
    pub use crate::hasher::*;
    pub use crate::immutable::{ImmutableMap, Representation};
    pub use crate::mapping::Mapping;
    pub use crate::pairs::KeyValueList;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod builder;
pub mod capacity;
pub mod error;
pub mod factory;
pub mod hasher;
pub mod immutable;
mod macros;
pub mod mapping;
pub mod pairs;
