//! Capacity arithmetic for pre-sized maps.
//!
//! The factory sizes every hash-based map so that `expected_size` insertions
//! fit without a resize under a 0.75 load factor:
//!
//! ```text
//! capacity = max(floor(expected_size / 0.75) + 1, MIN_INITIAL_CAPACITY)
//! ```
//!
//! The division is done in integers, so the result is exact for every
//! `usize` and saturates instead of overflowing.

/// Smallest capacity the factory ever requests.
pub const MIN_INITIAL_CAPACITY: usize = 4;

/// Numerator of the load factor the capacity formula is designed against.
pub const LOAD_FACTOR_NUMERATOR: usize = 3;

/// Denominator of the load factor the capacity formula is designed against.
pub const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// Returns the capacity to request for a map expected to hold
/// `expected_size` entries.
///
/// # Examples
///
/// ```rust
/// use micromaps::capacity::initial_capacity;
///
/// assert_eq!(initial_capacity(0), 4);
/// assert_eq!(initial_capacity(3), 5);
/// assert_eq!(initial_capacity(12), 17);
/// assert_eq!(initial_capacity(100), 134);
/// ```
#[must_use]
pub const fn initial_capacity(expected_size: usize) -> usize {
    // floor(n * 4 / 3) split as 4 * (n / 3) + floor(4 * (n % 3) / 3) so the
    // multiplication cannot overflow before the division.
    let whole = (expected_size / LOAD_FACTOR_NUMERATOR).saturating_mul(LOAD_FACTOR_DENOMINATOR);
    let remainder =
        (expected_size % LOAD_FACTOR_NUMERATOR) * LOAD_FACTOR_DENOMINATOR / LOAD_FACTOR_NUMERATOR;
    let capacity = whole.saturating_add(remainder).saturating_add(1);
    if capacity < MIN_INITIAL_CAPACITY {
        MIN_INITIAL_CAPACITY
    } else {
        capacity
    }
}

/// Emits the capacity chosen for a pre-sized allocation.
pub(crate) fn trace_presize(function_name: &'static str, expected_size: usize) -> usize {
    let capacity = initial_capacity(expected_size);
    tracing::trace!(function_name, expected_size, capacity, "pre-sizing map");
    capacity
}
